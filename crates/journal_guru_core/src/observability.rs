//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber, writing to stderr.
///
/// Stdout stays reserved for command output. Honours `RUST_LOG`, defaulting
/// to `info`. Calling it again after a
/// subscriber is installed is a no-op.
pub fn init_tracing() {
    let result = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    if result.is_ok() {
        tracing::debug!("Tracing subscriber initialized");
    }
}
