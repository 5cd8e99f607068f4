use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Diagnostics go to stderr so command
/// output on stdout stays clean.
///
/// `RUST_LOG` wins over the verbosity flag when set.
pub fn setup_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
