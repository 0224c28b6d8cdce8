use tracing::info;

use crate::context::CommandContext;
use crate::error::Result;
use crate::output;
use crate::session::CommunitySession;

pub async fn execute(ctx: &CommandContext) -> Result<()> {
    info!(target = "aura_sniffer", "collecting routes");

    let session = CommunitySession::establish(ctx).await?;
    let routes = session.collect_routes().await?;

    output::print_status("Routes", routes.len().to_string());
    output::print_json(&routes)
}
