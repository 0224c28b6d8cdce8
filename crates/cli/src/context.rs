use aura_sniffer_client::SessionCredentials;

use crate::error::Result;

/// Per-invocation immutable state: the normalized base URL and the parsed
/// credentials. Built before any network traffic so bad input fails fast.
#[derive(Debug, Clone)]
pub struct CommandContext {
    base_url: String,
    credentials: Option<SessionCredentials>,
    auth_markers: Vec<String>,
}

impl CommandContext {
    pub fn new(url: &str, token: Option<&str>) -> Result<Self> {
        let credentials = token.map(SessionCredentials::from_json).transpose()?;
        Ok(Self {
            base_url: normalize_url(url),
            credentials,
            auth_markers: Vec::new(),
        })
    }

    /// Site-specific markers the auth-failure detector should also probe.
    pub fn with_auth_markers(mut self, markers: Vec<String>) -> Self {
        self.auth_markers = markers;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> Option<&SessionCredentials> {
        self.credentials.as_ref()
    }

    pub fn auth_markers(&self) -> &[String] {
        &self.auth_markers
    }
}

/// Operators paste the community URL with or without the `/s` suffix.
fn normalize_url(url: &str) -> String {
    let url = url.strip_suffix('/').unwrap_or(url);
    let url = url.strip_suffix("/s").unwrap_or(url);
    url.strip_suffix('/').unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_site_suffix_is_stripped() {
        assert_eq!(normalize_url("https://x.com/s"), "https://x.com");
        assert_eq!(normalize_url("https://x.com/s/"), "https://x.com");
        assert_eq!(normalize_url("https://x.com/"), "https://x.com");
        assert_eq!(normalize_url("https://x.com"), "https://x.com");
    }

    #[test]
    fn malformed_token_fails_before_any_network_call() {
        assert!(CommandContext::new("https://x.com/s", Some("not json")).is_err());
        assert!(CommandContext::new("https://x.com/s", Some(r#"{"token":"t"}"#)).is_err());
        assert!(CommandContext::new("https://x.com/s", None).is_ok());
    }
}
