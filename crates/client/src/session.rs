//! Credentials for an authenticated community session.

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Opaque session credentials supplied by the operator, immutable for the
/// process lifetime. `token` rides in the `aura.token` form field, `sid` in
/// the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionCredentials {
    #[serde(default)]
    pub token: String,
    pub sid: String,
}

impl SessionCredentials {
    /// Parse the `--token` argument, e.g. `{"token":"...","sid":"..."}`.
    ///
    /// Fails with an invalid-parameter error before any network traffic so
    /// a typo never burns a request against the target.
    pub fn from_json(raw: &str) -> Result<Self> {
        let creds: Self = serde_json::from_str(raw).map_err(|e| {
            ClientError::InvalidParameter(format!(
                "--token must be JSON with \"token\" and \"sid\" fields: {e}"
            ))
        })?;
        if creds.sid.is_empty() {
            return Err(ClientError::InvalidParameter(
                "--token JSON has an empty \"sid\"".into(),
            ));
        }
        Ok(creds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_and_sid() {
        let creds = SessionCredentials::from_json(r#"{"token":"abc","sid":"00D..."}"#).unwrap();
        assert_eq!(creds.token, "abc");
        assert_eq!(creds.sid, "00D...");
    }

    #[test]
    fn token_field_may_be_absent() {
        let creds = SessionCredentials::from_json(r#"{"sid":"00D..."}"#).unwrap();
        assert_eq!(creds.token, "");
    }

    #[test]
    fn non_json_is_invalid_parameter() {
        let err = SessionCredentials::from_json("not json").unwrap_err();
        assert!(matches!(err, ClientError::InvalidParameter(_)));
    }

    #[test]
    fn missing_sid_is_invalid_parameter() {
        let err = SessionCredentials::from_json(r#"{"token":"abc"}"#).unwrap_err();
        assert!(matches!(err, ClientError::InvalidParameter(_)));
    }

    #[test]
    fn empty_sid_is_invalid_parameter() {
        let err = SessionCredentials::from_json(r#"{"token":"abc","sid":""}"#).unwrap_err();
        assert!(matches!(err, ClientError::InvalidParameter(_)));
    }
}
