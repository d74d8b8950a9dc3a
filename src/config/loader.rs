//! Configuration loading and validation from the environment.
//!
//! Variable names follow the channel pipeline's deployment contract:
//! `port` for the inbound listener and `channelURL` for the downstream
//! channel service (scheme defaulted to `http://` when absent).

use std::env;

use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable `{0}`")]
    Missing(&'static str),

    #[error("invalid value for `{name}`: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl RelayConfig {
    /// Load and validate configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("port").map_err(|_| ConfigError::Missing("port"))?;
        let port: u16 = port.parse().map_err(|e| ConfigError::Invalid {
            name: "port",
            reason: format!("{e}"),
        })?;

        let channel = env::var("channelURL").map_err(|_| ConfigError::Missing("channelURL"))?;
        let channel_url = normalize_channel_url(&channel)?;

        let startup_delay_secs = match env::var("startup_delay_secs") {
            Ok(value) => value.parse().map_err(|e| ConfigError::Invalid {
                name: "startup_delay_secs",
                reason: format!("{e}"),
            })?,
            Err(_) => RelayConfig::default().startup_delay_secs,
        };

        Ok(Self {
            bind_address: format!("0.0.0.0:{port}"),
            channel_url,
            startup_delay_secs,
        })
    }
}

/// Default the scheme to `http://` and check the result parses as a URL.
fn normalize_channel_url(raw: &str) -> Result<String, ConfigError> {
    let with_scheme = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };

    Url::parse(&with_scheme).map_err(|e| ConfigError::Invalid {
        name: "channelURL",
        reason: format!("{e}"),
    })?;

    Ok(with_scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_an_http_scheme() {
        assert_eq!(
            normalize_channel_url("channel:8081").unwrap(),
            "http://channel:8081"
        );
    }

    #[test]
    fn explicit_scheme_is_preserved() {
        assert_eq!(
            normalize_channel_url("https://channel.internal").unwrap(),
            "https://channel.internal"
        );
    }

    #[test]
    fn garbage_url_is_rejected() {
        assert!(normalize_channel_url("http://").is_err());
    }
}
