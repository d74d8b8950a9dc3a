//! HTTP server setup and the inbound relay handler.
//!
//! # Responsibilities
//! - Create the Axum router with the /send handler
//! - Wire up middleware (tracing)
//! - Run one relay operation per inbound request
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - The caller sees exactly two outcomes: 200 (all segments accepted) or
//!   500 (anything failed), with no segment-level detail
//! - A failed relay operation is logged and answered, never fatal to the
//!   process
//! - The timestamp is captured once per request, before splitting, so every
//!   segment of the operation carries the same value

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    routing::post,
    Router,
};
use chrono::Utc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::config::RelayConfig;
use crate::relay::{Forwarder, HttpTransferClient};
use crate::segment::{split, SEGMENT_BYTES};

/// Application state injected into handlers.
///
/// Shared read-only across all concurrent relay operations; the forwarder
/// holds the only piece of cross-request state, the channel address.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<Forwarder<HttpTransferClient>>,
}

/// HTTP server for the segment relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let transport = HttpTransferClient::new(&config.channel_url);
        let state = AppState {
            forwarder: Arc::new(Forwarder::new(transport)),
        };

        let router = Router::new()
            .route("/send", post(send_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        Self { router, config }
    }

    /// Run the server until the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            channel_url = %self.config.channel_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Inbound relay handler: split the payload and forward every segment.
async fn send_handler(State(state): State<AppState>, request: Request<Body>) -> StatusCode {
    let relay_id = Uuid::new_v4();

    let payload = match axum::body::to_bytes(request.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(relay_id = %relay_id, error = %e, "failed to read message body");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    };

    let timestamp = Utc::now();
    let segments = split(&payload, SEGMENT_BYTES, timestamp);

    tracing::info!(
        relay_id = %relay_id,
        bytes = payload.len(),
        segments_count = segments.len(),
        "incoming message"
    );

    match state.forwarder.forward(&segments).await {
        Ok(()) => {
            tracing::debug!(relay_id = %relay_id, "relay operation succeeded");
            StatusCode::OK
        }
        Err(e) => {
            tracing::error!(relay_id = %relay_id, error = %e, "relay operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
