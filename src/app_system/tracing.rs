use tracing_subscriber::EnvFilter;

/// Sets up the global tracing subscriber once for the entire process.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn setup_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .init();
}
