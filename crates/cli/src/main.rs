use clap::Parser;

use aura_sniffer_cli::{cli::Cli, commands, context::CommandContext, logging, output};
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let ctx = match CommandContext::new(&cli.url, cli.token.as_deref()) {
        Ok(ctx) => ctx.with_auth_markers(cli.auth_markers),
        Err(err) => {
            output::print_error("Invalid arguments", err.to_string());
            std::process::exit(1);
        }
    };

    if let Err(err) = commands::dispatch(cli.command, ctx).await {
        error!(target = "aura_sniffer", error = %err, "command failed");
        output::print_error("Command failed", err.to_string());
        std::process::exit(1);
    }
}
