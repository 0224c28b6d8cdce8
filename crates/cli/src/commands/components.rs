use aura_sniffer_client::ComponentCollector;
use tracing::info;

use crate::context::CommandContext;
use crate::error::Result;
use crate::output;
use crate::session::CommunitySession;

pub async fn execute(ctx: &CommandContext) -> Result<()> {
    let session = CommunitySession::establish(ctx).await?;
    let routes = session.collect_routes().await?;
    info!(target = "aura_sniffer", routes = routes.len(), "sweeping routes for components");
    output::print_status("Scanning", format!("{} routes, be patient", routes.len()));

    let components = ComponentCollector::new(session.client())
        .collect(&routes)
        .await?;

    output::print_status("Custom components", components.len().to_string());
    output::print_json(&components)
}
