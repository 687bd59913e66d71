//! Helpers for initializing structured logging in binaries and tests that
//! embed the crate.
//!
//! Library code only emits events through `tracing`; installing a subscriber
//! is left to the embedder, and this is the default one.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a formatting subscriber filtered by the `RUST_LOG` environment
/// variable, defaulting to the `info` level.
///
/// Does nothing if a global subscriber is already set, so tests can call it
/// repeatedly.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init();
}
