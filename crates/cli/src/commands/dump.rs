//! Batch dump: one page of records per discovered sObject, one JSON file
//! per object. The only command with internal looping; a failure on one
//! sObject is logged and skipped, never fatal to the batch.

use std::future::Future;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::context::CommandContext;
use crate::error::Result;
use crate::output;
use crate::session::CommunitySession;

pub async fn execute(ctx: &CommandContext, page_size: u32, out_dir: &Path) -> Result<()> {
    let session = CommunitySession::establish(ctx).await?;
    let names = session.client().sobjects().await?;
    output::print_status(
        "Dumping",
        format!("{} sObjects to {}", names.len(), out_dir.display()),
    );

    let client = session.client();
    let summary = dump_all(&names, out_dir, |name| async move {
        client.records(&name, page_size, 1).await
    })
    .await?;

    output::print_status(
        "Dump complete",
        format!("{} written, {} skipped", summary.written, summary.skipped),
    );
    Ok(())
}

#[derive(Debug, Default)]
pub(crate) struct DumpSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Sequentially fetch and write every sObject, isolating per-object
/// failures so one bad object never aborts the rest of the batch.
pub(crate) async fn dump_all<F, Fut>(names: &[String], out_dir: &Path, fetch: F) -> Result<DumpSummary>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = aura_sniffer_client::Result<Value>>,
{
    std::fs::create_dir_all(out_dir)?;
    let mut summary = DumpSummary::default();
    for name in names {
        match fetch(name.clone()).await {
            Ok(records) => {
                let path = write_dump_file(out_dir, name, &records)?;
                info!(target = "aura_sniffer", sobject = %name, path = %path.display(), "dumped");
                summary.written += 1;
            }
            Err(err) => {
                warn!(target = "aura_sniffer", sobject = %name, error = %err, "sObject skipped");
                output::print_error("Skipping", format!("{name}: {err}"));
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}

fn write_dump_file(dir: &Path, sobject: &str, records: &Value) -> Result<PathBuf> {
    let path = dir.join(format!("{}.json", sanitize(sobject)));
    std::fs::write(&path, serde_json::to_string_pretty(records)?)?;
    Ok(path)
}

/// sObject names come from the server; keep them filesystem-safe.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_sniffer_client::ClientError;
    use serde_json::json;

    #[tokio::test]
    async fn one_bad_sobject_does_not_abort_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let names = vec![
            "Account".to_string(),
            "Case".to_string(),
            "Invoice__c".to_string(),
        ];

        let summary = dump_all(&names, dir.path(), |name| async move {
            if name == "Case" {
                Err(ClientError::InvalidParameter("no access".into()))
            } else {
                Ok(json!([{"Id": "001", "Name": name}]))
            }
        })
        .await
        .unwrap();

        assert_eq!(summary.written, 2);
        assert_eq!(summary.skipped, 1);
        assert!(dir.path().join("Account.json").exists());
        assert!(!dir.path().join("Case.json").exists());
        assert!(dir.path().join("Invoice__c.json").exists());
    }

    #[tokio::test]
    async fn dump_files_hold_pretty_json_arrays() {
        let dir = tempfile::tempdir().unwrap();
        let names = vec!["Account".to_string()];

        dump_all(&names, dir.path(), |_| async move {
            Ok(json!([{"Id": "001xx"}]))
        })
        .await
        .unwrap();

        let raw = std::fs::read_to_string(dir.path().join("Account.json")).unwrap();
        let parsed: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed[0]["Id"], "001xx");
        assert!(raw.contains('\n'));
    }

    #[test]
    fn sanitize_keeps_api_names_and_mangles_the_rest() {
        assert_eq!(sanitize("Invoice__c"), "Invoice__c");
        assert_eq!(sanitize("../etc/passwd"), "___etc_passwd");
    }
}
