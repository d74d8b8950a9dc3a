//! Startup orchestration.
//!
//! # Responsibilities
//! - Hold back the listener while the rest of the pipeline comes up
//!
//! # Design Decisions
//! - The delay is logged per second so the deployment's startup ordering is
//!   visible in the logs

use std::time::Duration;

/// Sleep for `secs` seconds before startup, logging a countdown.
pub async fn startup_delay(secs: u64) {
    for remaining in (1..=secs).rev() {
        tracing::info!(remaining, "service sleeping before startup");
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}
