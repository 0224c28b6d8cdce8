//! Thin reqwest wrapper shared by every outbound call.

use reqwest::header::{CONTENT_TYPE, COOKIE};
use tracing::debug;

use crate::error::Result;

/// Community sites fingerprint obvious tooling; present a browser UA.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 11_2_1) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/88.0.4324.150 Safari/537.36";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP client with an optional `sid` session cookie. Research targets run
/// behind arbitrary certs, so TLS verification is off.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    sid: Option<String>,
}

impl HttpClient {
    /// Unauthenticated client, used for endpoint probing and login pages.
    pub fn anonymous() -> Result<Self> {
        Self::new(None)
    }

    pub fn new(sid: Option<String>) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self { inner, sid })
    }

    pub async fn get(&self, url: &str) -> Result<String> {
        debug!(target = "aura_sniffer", %url, "GET");
        let mut request = self.inner.get(url);
        if let Some(cookie) = self.cookie_header() {
            request = request.header(COOKIE, cookie);
        }
        Ok(request.send().await?.text().await?)
    }

    /// POST a pre-encoded `application/x-www-form-urlencoded` body.
    pub async fn post_form(&self, url: &str, body: String) -> Result<String> {
        debug!(target = "aura_sniffer", %url, bytes = body.len(), "POST form");
        let mut request = self
            .inner
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body);
        if let Some(cookie) = self.cookie_header() {
            request = request.header(COOKIE, cookie);
        }
        Ok(request.send().await?.text().await?)
    }

    fn cookie_header(&self) -> Option<String> {
        self.sid.as_ref().map(|sid| format!("sid={sid}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_header_present_only_with_sid() {
        let anon = HttpClient::anonymous().unwrap();
        assert!(anon.cookie_header().is_none());

        let authed = HttpClient::new(Some("00Dxx".into())).unwrap();
        assert_eq!(authed.cookie_header().as_deref(), Some("sid=00Dxx"));
    }
}
