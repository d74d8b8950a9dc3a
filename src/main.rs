//! Segment Relay Service
//!
//! Accepts a payload over HTTP, splits it into fixed-size ordered segments,
//! and forwards each segment sequentially to the downstream channel service.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                SEGMENT RELAY                  │
//!                      │                                               │
//!   POST /send         │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   ───────────────────┼─▶│  http   │──▶│ segment  │──▶│   relay   │──┼──▶ channel
//!   (raw payload)      │  │ server  │   │ splitter │   │ forwarder │  │    service
//!                      │  └─────────┘   └──────────┘   └───────────┘  │    /transfer
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │          Cross-Cutting Concerns          │ │
//!                      │  │  ┌────────┐ ┌───────────┐ ┌───────────┐ │ │
//!                      │  │  │ config │ │ lifecycle │ │observabi- │ │ │
//!                      │  │  │ (env)  │ │start/stop │ │  lity     │ │ │
//!                      │  │  └────────┘ └───────────┘ └───────────┘ │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;

use segment_relay::lifecycle::{signals, startup};
use segment_relay::{HttpServer, RelayConfig, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    segment_relay::observability::logging::init();

    tracing::info!("segment-relay v0.1.0 starting");

    let config = RelayConfig::from_env()?;

    tracing::info!(
        bind_address = %config.bind_address,
        channel_url = %config.channel_url,
        startup_delay_secs = config.startup_delay_secs,
        "configuration loaded"
    );

    startup::startup_delay(config.startup_delay_secs).await;

    let listener = TcpListener::bind(&config.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
