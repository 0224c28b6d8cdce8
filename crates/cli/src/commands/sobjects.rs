use tracing::info;

use crate::context::CommandContext;
use crate::error::Result;
use crate::output;
use crate::session::CommunitySession;

pub async fn execute(ctx: &CommandContext) -> Result<()> {
    info!(target = "aura_sniffer", url = %ctx.base_url(), "listing sObjects");

    let session = CommunitySession::establish(ctx).await?;
    let names = session.client().sobjects().await?;

    output::print_status("sObjects", names.len().to_string());
    output::print_json(&names)
}
