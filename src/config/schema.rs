//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Runtime configuration for the segment relay service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Bind address for the inbound listener (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Base URL of the downstream channel service; segments are posted to
    /// `<channel_url>/transfer`.
    pub channel_url: String,

    /// Seconds to wait before binding the listener, giving the channel
    /// service time to come up when both start together.
    pub startup_delay_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            channel_url: "http://127.0.0.1:8081".to_string(),
            startup_delay_secs: 5,
        }
    }
}
