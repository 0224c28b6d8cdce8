use tracing_subscriber::EnvFilter;

/// Logging goes to stderr so payload JSON on stdout stays pipeable.
pub fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "warn,aura_sniffer=info",
        _ => "info,aura_sniffer=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
