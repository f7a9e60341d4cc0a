//! Telemetry helpers for structured logging.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "bounded_roster=info";

/// Install a formatted subscriber filtered by `RUST_LOG`.
///
/// Does nothing if a global subscriber is already set, so callers that
/// install their own keep it.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
