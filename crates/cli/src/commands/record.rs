use tracing::info;

use crate::context::CommandContext;
use crate::error::Result;
use crate::output;
use crate::session::CommunitySession;

pub async fn execute(ctx: &CommandContext, record_id: &str) -> Result<()> {
    info!(target = "aura_sniffer", %record_id, "fetching record");

    let session = CommunitySession::establish(ctx).await?;
    let record = session.client().record(record_id).await?;

    output::print_status("Record", record_id);
    output::print_json(&record)
}
