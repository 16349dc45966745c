//! Tracing initialization for the host process.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging at the configured level.
///
/// `RUST_LOG` overrides the level from config when set. Safe to call
/// more than once — later calls are no-ops.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
