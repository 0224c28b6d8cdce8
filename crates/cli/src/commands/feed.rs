use tracing::info;

use crate::context::CommandContext;
use crate::error::Result;
use crate::output;
use crate::session::CommunitySession;

pub async fn execute(ctx: &CommandContext, record_id: &str) -> Result<()> {
    info!(target = "aura_sniffer", %record_id, "fetching feed items");

    let session = CommunitySession::establish(ctx).await?;
    let items = session.client().feed_items(record_id).await?;

    output::print_status("Feed items", record_id);
    output::print_json(&items)
}
