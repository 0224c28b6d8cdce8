//! Scrapes the Aura framework details out of the community markup.
//!
//! A full `aura.context` needs the deployed framework build id (`fwuid`),
//! the app descriptor and the `loaded` map. Communities embed all three,
//! URL-encoded, in a `/s/sfsites/l/...fwuid...` resource path inside the
//! landing page; the last `<script src>` tag points at the bootstrap JS the
//! routes collector later scrapes.

use std::sync::LazyLock;

use aura_sniffer_protocol::{AuraContext, LOGIN_REDIRECT_MARKER};
use percent_encoding::percent_decode_str;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ClientError, Result};
use crate::http::HttpClient;

static LOGIN_REDIRECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"window\.location\.href ='([^']+)").expect("LOGIN_REDIRECT_RE should compile")
});
static FWUID_BLOB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/s/sfsites/l/([^/]+fwuid[^/]+)").expect("FWUID_BLOB_RE should compile")
});
static SCRIPT_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<script[^>]*\ssrc="([^"]+)""#).expect("SCRIPT_SRC_RE should compile")
});

/// Everything the markup yields: a usable context plus the bootstrap URL
/// (absent on sites that inline their bootstrap).
#[derive(Debug, Clone)]
pub struct AuraConfig {
    pub context: AuraContext,
    pub bootstrap_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MarkupDetails {
    fwuid: String,
    app: String,
    #[serde(default)]
    loaded: Value,
}

pub struct AuraConfigLoader {
    base_url: String,
    http: HttpClient,
}

impl AuraConfigLoader {
    pub fn new(base_url: impl Into<String>, http: HttpClient) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    pub async fn load(&self) -> Result<AuraConfig> {
        let mut markup = self.http.get(&self.base_url).await?;
        if let Some(login_url) = login_redirect_target(&markup) {
            info!(target = "aura_sniffer", %login_url, "following login page redirect");
            markup = HttpClient::anonymous()?.get(&login_url).await?;
        }

        let bootstrap_url = bootstrap_url(&markup, &self.base_url);
        if bootstrap_url.is_none() {
            debug!(target = "aura_sniffer", "no bootstrap script tag in markup");
        }

        let context = match markup_details(&markup)? {
            Some(details) => {
                info!(target = "aura_sniffer", fwuid = %details.fwuid, app = %details.app, "aura config loaded");
                AuraContext::from_markup(details.fwuid, details.app, details.loaded)
            }
            None => {
                warn!(
                    target = "aura_sniffer",
                    "no fwuid blob in markup; falling back to a minimal context"
                );
                AuraContext::minimal()
            }
        };

        Ok(AuraConfig {
            context,
            bootstrap_url,
        })
    }
}

/// Target of the inline `window.location.href ='...'` redirect script, if
/// the site emitted one instead of serving the app markup.
fn login_redirect_target(markup: &str) -> Option<String> {
    if !markup.contains(LOGIN_REDIRECT_MARKER) {
        return None;
    }
    LOGIN_REDIRECT_RE
        .captures(markup)
        .map(|caps| caps[1].to_string())
}

/// Decode the URL-encoded fwuid blob, when present.
fn markup_details(markup: &str) -> Result<Option<MarkupDetails>> {
    let Some(caps) = FWUID_BLOB_RE.captures(markup) else {
        return Ok(None);
    };
    let decoded = percent_decode_str(&caps[1]).decode_utf8_lossy();
    let details: MarkupDetails = serde_json::from_str(&decoded)
        .map_err(|e| ClientError::Config(format!("fwuid blob is not valid JSON: {e}")))?;
    if details.fwuid.is_empty() || details.app.is_empty() || details.loaded.is_null() {
        return Err(ClientError::Config(
            "fwuid blob is missing fwuid, app or loaded details".into(),
        ));
    }
    Ok(Some(details))
}

/// Absolute URL of the last `<script src>` tag in the markup.
fn bootstrap_url(markup: &str, base_url: &str) -> Option<String> {
    let src = SCRIPT_SRC_RE
        .captures_iter(markup)
        .last()
        .map(|caps| caps[1].to_string())?;
    let base = Url::parse(base_url).ok()?;
    base.join(&src).ok().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKUP: &str = concat!(
        r#"<html><head><link href="/s/sfsites/l/%7B%22mode%22%3A%22PROD%22%2C%22app%22%3A%22siteforce%3AcommunityApp%22%2C"#,
        r#"%22fwuid%22%3A%22Abc-123%22%2C%22loaded%22%3A%7B%22APPLICATION%40markup%3A%2F%2Fsiteforce%3AcommunityApp%22%3A%22hash%22%7D%7D/app.css"/>"#,
        r#"</head><body>"#,
        r#"<script src="/jslibrary/common.js"></script>"#,
        r#"<script async src="/s/sfsites/c/bootstrap.js?aura.attributes=%7B%7D&jwt=x"></script>"#,
        r#"</body></html>"#,
    );

    #[test]
    fn extracts_fwuid_app_and_loaded() {
        let details = markup_details(MARKUP).unwrap().unwrap();
        assert_eq!(details.fwuid, "Abc-123");
        assert_eq!(details.app, "siteforce:communityApp");
        assert!(details.loaded.is_object());
    }

    #[test]
    fn markup_without_blob_yields_none() {
        assert!(markup_details("<html></html>").unwrap().is_none());
    }

    #[test]
    fn corrupt_blob_is_config_error() {
        let markup = "/s/sfsites/l/notjson-fwuid-notjson/app.css";
        assert!(matches!(
            markup_details(markup),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn bootstrap_url_is_last_script_resolved_against_base() {
        let url = bootstrap_url(MARKUP, "https://company.portal.com").unwrap();
        assert!(url.starts_with("https://company.portal.com/s/sfsites/c/bootstrap.js"));
    }

    #[test]
    fn login_redirect_target_is_extracted() {
        let markup = "<script>window.location.href ='https://x.com/login?startURL=%2Fs';</script>";
        assert_eq!(
            login_redirect_target(markup).as_deref(),
            Some("https://x.com/login?startURL=%2Fs")
        );
        assert_eq!(login_redirect_target("<html>app</html>"), None);
    }
}
