use tracing::info;

use crate::context::CommandContext;
use crate::error::Result;
use crate::output;
use crate::session::CommunitySession;

pub async fn execute(ctx: &CommandContext) -> Result<()> {
    info!(target = "aura_sniffer", "fetching profile menu");

    let session = CommunitySession::establish(ctx).await?;
    let menu = session.client().profile_menu().await?;

    output::print_status("Profile menu", "");
    output::print_json(&menu)
}
