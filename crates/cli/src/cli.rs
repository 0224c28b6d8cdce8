use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aura-sniffer")]
#[command(about = "Access undocumented Aura APIs on Salesforce Experience Cloud sites")]
#[command(version)]
pub struct Cli {
    /// Experience Cloud URL, e.g. https://company.portal.com/s
    #[arg(short, long)]
    pub url: String,

    /// JSON with the Aura token and sid, e.g. '{"token":"...","sid":"..."}'
    #[arg(short, long)]
    pub token: Option<String>,

    /// Extra response marker treated as an authentication failure
    /// (repeatable; the login-redirect and invalidSession markers are
    /// always active)
    #[arg(long = "auth-marker", global = true, value_name = "MARKER")]
    pub auth_markers: Vec<String>,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the sObjects the session can see
    Sobjects,

    /// List records for an sObject
    Records {
        /// sObject API name, e.g. Account or Invoice__c
        sobject: String,
        /// Records per page
        #[arg(long, default_value = "10")]
        page_size: u32,
        /// Page to fetch (1-based)
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Fetch a single record by Id
    Record { record_id: String },

    /// Search records of an sObject
    Search {
        term: String,
        /// sObject API name to search within
        sobject: String,
        /// Fields to return, comma separated
        #[arg(long, value_delimiter = ',', default_value = "Id,Name")]
        fields: Vec<String>,
    },

    /// Fetch chatter feed items for a record
    FeedItems { record_id: String },

    /// Enumerate Apex methods exposed to the community
    ApexMethods,

    /// Invoke an exposed Apex method
    CallApex {
        /// Method to call, as Class.method
        method: String,
        /// JSON file with the method's named parameters
        #[arg(long, value_name = "FILE")]
        params_file: Option<PathBuf>,
        /// Managed package namespace, if any
        #[arg(long, default_value = "")]
        namespace: String,
    },

    /// Enumerate custom Lightning components reachable via the site routes
    CustomComponents,

    /// Enumerate the site's Aura routes
    Routes,

    /// Fetch the profile menu of the current session
    ProfileMenu,

    /// Fetch a page of records for every discovered sObject and write one
    /// JSON file per object
    Dump {
        /// Records to fetch per sObject
        #[arg(long, default_value = "10")]
        page_size: u32,
        /// Directory the per-object files go to
        #[arg(long, default_value = "file-dumps")]
        out_dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_records_command() {
        let args = vec![
            "aura-sniffer",
            "--url",
            "https://company.portal.com/s",
            "records",
            "Account",
            "--page-size",
            "25",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.url, "https://company.portal.com/s");
        match cli.command {
            Commands::Records {
                sobject,
                page_size,
                page,
            } => {
                assert_eq!(sobject, "Account");
                assert_eq!(page_size, 25);
                assert_eq!(page, 1);
            }
            _ => panic!("Expected Records command"),
        }
    }

    #[test]
    fn parse_search_with_fields() {
        let args = vec![
            "aura-sniffer",
            "-u",
            "https://x.com",
            "search",
            "acme",
            "Account",
            "--fields",
            "Id,Name,Phone",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Search {
                term,
                sobject,
                fields,
            } => {
                assert_eq!(term, "acme");
                assert_eq!(sobject, "Account");
                assert_eq!(fields, ["Id", "Name", "Phone"]);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn parse_dump_defaults() {
        let args = vec!["aura-sniffer", "-u", "https://x.com", "dump"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Dump { page_size, out_dir } => {
                assert_eq!(page_size, 10);
                assert_eq!(out_dir, PathBuf::from("file-dumps"));
            }
            _ => panic!("Expected Dump command"),
        }
    }

    #[test]
    fn parse_call_apex_with_params_file() {
        let args = vec![
            "aura-sniffer",
            "-u",
            "https://x.com",
            "-t",
            r#"{"token":"t","sid":"s"}"#,
            "call-apex",
            "InvoiceController.getInvoices",
            "--params-file",
            "params.json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        assert!(cli.token.is_some());
        match cli.command {
            Commands::CallApex {
                method,
                params_file,
                namespace,
            } => {
                assert_eq!(method, "InvoiceController.getInvoices");
                assert_eq!(params_file, Some(PathBuf::from("params.json")));
                assert_eq!(namespace, "");
            }
            _ => panic!("Expected CallApex command"),
        }
    }

    #[test]
    fn parse_repeatable_auth_markers() {
        let args = vec![
            "aura-sniffer",
            "-u",
            "https://x.com",
            "--auth-marker",
            "/secur/frontdoor.jsp",
            "--auth-marker",
            "SessionTimeout",
            "sobjects",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.auth_markers, ["/secur/frontdoor.jsp", "SessionTimeout"]);
    }

    #[test]
    fn url_is_required() {
        assert!(Cli::try_parse_from(vec!["aura-sniffer", "sobjects"]).is_err());
    }
}
