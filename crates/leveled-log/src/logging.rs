use tracing_subscriber::EnvFilter;

/// Diagnostics for the tool itself, on stderr. Separate from the log
/// streams the tool writes.
pub fn init(log_level: &str) {
    // Prefer explicit --log-level; allow RUST_LOG override.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "diagnostics initialised");
}
