//! Discovery of the Aura servlet path a community site actually serves.

use aura_sniffer_protocol::INVALID_SESSION_MARKER;
use tracing::{debug, info};

use crate::error::{ClientError, Result};
use crate::http::HttpClient;

/// Paths communities expose the servlet under, in probe order.
const CANDIDATE_PATHS: [&str; 4] = ["aura", "s/aura", "s/sfsites/aura", "sfsites/aura"];

/// Probes the candidate servlet paths and picks the preferred live one.
/// Probing runs unauthenticated even when a sid is at hand: an empty POST
/// to a live servlet answers `aura:invalidSession` either way.
pub struct EndpointSelector {
    base_url: String,
    http: HttpClient,
}

impl EndpointSelector {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: base_url.into(),
            http: HttpClient::anonymous()?,
        })
    }

    pub async fn select(&self) -> Result<String> {
        let mut live = Vec::new();
        for path in CANDIDATE_PATHS {
            let url = format!("{}/{}", self.base_url, path);
            debug!(target = "aura_sniffer", %url, "probing servlet path");
            if self.is_live(&url).await {
                live.push(url);
            }
        }
        let selected = preferred(live).ok_or_else(|| ClientError::NoEndpoint(self.base_url.clone()))?;
        info!(target = "aura_sniffer", endpoint = %selected, "selected Aura endpoint");
        Ok(selected)
    }

    async fn is_live(&self, url: &str) -> bool {
        match self.http.post_form(url, String::new()).await {
            Ok(body) => body.contains(INVALID_SESSION_MARKER),
            Err(err) => {
                debug!(target = "aura_sniffer", %url, error = %err, "probe failed");
                false
            }
        }
    }
}

/// The `s/sfsites/` servlet wins when live; otherwise the first live path.
fn preferred(live: Vec<String>) -> Option<String> {
    live.iter()
        .find(|url| url.contains("/s/sfsites/"))
        .cloned()
        .or_else(|| live.into_iter().next())
}
