mod apex;
mod components;
mod dump;
mod feed;
mod profile;
mod record;
mod records;
mod routes;
mod search;
mod sobjects;

use crate::cli::Commands;
use crate::context::CommandContext;
use crate::error::Result;

pub async fn dispatch(command: Commands, ctx: CommandContext) -> Result<()> {
    match command {
        Commands::Sobjects => sobjects::execute(&ctx).await,
        Commands::Records {
            sobject,
            page_size,
            page,
        } => records::execute(&ctx, &sobject, page_size, page).await,
        Commands::Record { record_id } => record::execute(&ctx, &record_id).await,
        Commands::Search {
            term,
            sobject,
            fields,
        } => search::execute(&ctx, &term, &sobject, &fields).await,
        Commands::FeedItems { record_id } => feed::execute(&ctx, &record_id).await,
        Commands::ApexMethods => apex::list_methods(&ctx).await,
        Commands::CallApex {
            method,
            params_file,
            namespace,
        } => apex::call(&ctx, &method, params_file.as_deref(), &namespace).await,
        Commands::CustomComponents => components::execute(&ctx).await,
        Commands::Routes => routes::execute(&ctx).await,
        Commands::ProfileMenu => profile::execute(&ctx).await,
        Commands::Dump { page_size, out_dir } => dump::execute(&ctx, page_size, &out_dir).await,
    }
}
