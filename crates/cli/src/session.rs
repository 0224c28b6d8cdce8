use aura_sniffer_client::{AuraClient, Route, RoutesCollector};
use aura_sniffer_protocol::AuthDetector;

use crate::context::CommandContext;
use crate::error::{Result, SnifferError};
use crate::output;

/// An established connection to one community site: selected servlet
/// endpoint, scraped Aura config, ready-to-use client.
pub struct CommunitySession {
    client: AuraClient,
    bootstrap_url: Option<String>,
}

impl CommunitySession {
    pub async fn establish(ctx: &CommandContext) -> Result<Self> {
        let (mut client, bootstrap_url) =
            AuraClient::connect(ctx.base_url(), ctx.credentials()).await?;
        if !ctx.auth_markers().is_empty() {
            let mut detector = AuthDetector::default();
            for marker in ctx.auth_markers() {
                detector = detector.with_marker(marker.clone());
            }
            client = client.with_detector(detector);
        }
        output::print_status("Connected", ctx.base_url());
        Ok(Self {
            client,
            bootstrap_url,
        })
    }

    pub fn client(&self) -> &AuraClient {
        &self.client
    }

    /// Scrape the site routes from the bootstrap script.
    pub async fn collect_routes(&self) -> Result<Vec<Route>> {
        let bootstrap_url = self.bootstrap_url.as_deref().ok_or_else(|| {
            SnifferError::InvalidParameter(
                "the site markup exposed no bootstrap script; routes cannot be collected".into(),
            )
        })?;
        let routes = RoutesCollector::new(bootstrap_url, self.client.http().clone())
            .collect()
            .await?;
        Ok(routes)
    }
}
