//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Default the filter to debug for this crate and tower-http

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG` when set; otherwise defaults to debug-level output for
/// the relay and its HTTP middleware.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "segment_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
