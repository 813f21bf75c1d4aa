use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber filtered at `level`.
///
/// The directive comes from configuration only; `RUST_LOG` is not consulted.
/// Calling this twice is harmless: the second install is ignored.
pub fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
