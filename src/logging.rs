//! Tracing subscriber setup for hosts and tests.
//!
//! The engine only emits `tracing` events; installing a subscriber is the
//! host's call. This helper gives embedders and the test suite a one-line
//! setup that respects `RUST_LOG` and is safe to call more than once.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a stderr subscriber filtered by `RUST_LOG`, defaulting to
/// `artboard=info`. Subsequent calls are no-ops, as is calling it when the
/// host already installed its own subscriber.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("artboard=info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
