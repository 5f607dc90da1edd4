//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log filter via RUST_LOG with a development default

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// Called once from the binary entrypoint; library code only emits events.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devserve=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
