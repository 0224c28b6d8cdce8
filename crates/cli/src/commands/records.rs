use tracing::info;

use crate::context::CommandContext;
use crate::error::Result;
use crate::output;
use crate::session::CommunitySession;

pub async fn execute(ctx: &CommandContext, sobject: &str, page_size: u32, page: u32) -> Result<()> {
    info!(target = "aura_sniffer", %sobject, page_size, page, "listing records");

    let session = CommunitySession::establish(ctx).await?;
    let records = session.client().records(sobject, page_size, page).await?;

    output::print_status("Records", sobject);
    output::print_json(&records)
}
