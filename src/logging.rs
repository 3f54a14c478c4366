//! Tracing subscriber setup for the host binary.
//!
//! Logs go to stderr; stdout carries the notification stream.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// Respects `RUST_LOG`, defaults to "info". Calling it twice is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .try_init();
}
