use std::path::Path;

use serde_json::{Map, Value};
use tracing::info;

use crate::context::CommandContext;
use crate::error::{Result, SnifferError};
use crate::output;
use crate::session::CommunitySession;

pub async fn list_methods(ctx: &CommandContext) -> Result<()> {
    info!(target = "aura_sniffer", "enumerating exposed Apex methods");

    let session = CommunitySession::establish(ctx).await?;
    let methods = session.client().apex_methods().await?;

    output::print_status("Apex methods", "");
    output::print_json(&methods)
}

pub async fn call(
    ctx: &CommandContext,
    method: &str,
    params_file: Option<&Path>,
    namespace: &str,
) -> Result<()> {
    // Parse everything before touching the network.
    let (class, method) = split_method(method)?;
    let params = match params_file {
        Some(path) => load_params(path)?,
        None => Value::Object(Map::new()),
    };

    info!(target = "aura_sniffer", %class, %method, "calling Apex method");

    let session = CommunitySession::establish(ctx).await?;
    let result = session
        .client()
        .call_apex(&class, &method, params, namespace)
        .await?;

    output::print_status("Apex result", format!("{class}.{method}"));
    output::print_json(&result)
}

fn split_method(method: &str) -> Result<(String, String)> {
    match method.split_once('.') {
        Some((class, name)) if !class.is_empty() && !name.is_empty() => {
            Ok((class.to_string(), name.to_string()))
        }
        _ => Err(SnifferError::InvalidParameter(format!(
            "Apex method must be given as Class.method, got {method:?}"
        ))),
    }
}

fn load_params(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        SnifferError::InvalidParameter(format!("cannot read params file {}: {e}", path.display()))
    })?;
    let params: Value = serde_json::from_str(&raw).map_err(|e| {
        SnifferError::InvalidParameter(format!("params file {} is not JSON: {e}", path.display()))
    })?;
    if !params.is_object() {
        return Err(SnifferError::InvalidParameter(format!(
            "params file {} must hold a top-level JSON object of named parameters",
            path.display()
        )));
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn split_method_requires_class_and_name() {
        assert_eq!(
            split_method("InvoiceController.getInvoices").unwrap(),
            ("InvoiceController".to_string(), "getInvoices".to_string())
        );
        assert!(split_method("justAClass").is_err());
        assert!(split_method(".method").is_err());
        assert!(split_method("Class.").is_err());
    }

    #[test]
    fn params_file_must_hold_an_object() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"accountId": "001xx"}}"#).unwrap();
        assert_eq!(load_params(file.path()).unwrap()["accountId"], "001xx");

        let mut list = tempfile::NamedTempFile::new().unwrap();
        write!(list, "[1, 2]").unwrap();
        assert!(matches!(
            load_params(list.path()),
            Err(SnifferError::InvalidParameter(_))
        ));

        assert!(matches!(
            load_params(Path::new("/nonexistent/params.json")),
            Err(SnifferError::InvalidParameter(_))
        ));
    }
}
