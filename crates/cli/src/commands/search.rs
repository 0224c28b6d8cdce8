use tracing::info;

use crate::context::CommandContext;
use crate::error::Result;
use crate::output;
use crate::session::CommunitySession;

pub async fn execute(
    ctx: &CommandContext,
    term: &str,
    sobject: &str,
    fields: &[String],
) -> Result<()> {
    info!(target = "aura_sniffer", %term, %sobject, "searching records");

    let session = CommunitySession::establish(ctx).await?;
    let results = session.client().search(term, sobject, fields).await?;

    output::print_status("Search results", format!("{sobject} / {term}"));
    output::print_json(&results)
}
