//! Development-time tracing for debugging path resolution.
//!
//! The engine emits `debug` events when it creates or replaces containers
//! and `trace` events when a path stops resolving. Nothing is printed unless
//! a subscriber is installed, either by the embedding application or by
//! [`init`].

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Uses `try_init` and discards its error, which only reports that a global
/// subscriber is already installed. Repeated calls (e.g. from several tests)
/// therefore keep the first subscriber and do nothing else.
///
/// # Example
/// ```bash
/// RUST_LOG=objpath=trace cargo test
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
