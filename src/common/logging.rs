use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Diagnostics go to stderr so stdout carries only the transaction log.
/// The default level is `warn`; override with `RUST_LOG`. Calling this more
/// than once is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
