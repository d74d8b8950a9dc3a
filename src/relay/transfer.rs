//! Transport seam to the channel service.
//!
//! # Responsibilities
//! - Deliver one serialized segment to the channel's `/transfer` endpoint
//! - Translate connection errors and non-200 statuses into `TransferError`
//!
//! # Design Decisions
//! - A response status of exactly 200 is the only success signal
//! - No per-call timeout: a transfer that never resolves stalls its relay
//!   operation, matching the channel contract this service was built against

use std::future::Future;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use thiserror::Error;

/// Failure of a single segment delivery attempt.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The channel service could not be reached.
    #[error("channel service unavailable: {0}")]
    Unavailable(String),

    /// The channel service answered with a non-200 status.
    #[error("channel service rejected segment: status {0}")]
    Rejected(u16),
}

/// Capability to deliver one serialized segment downstream.
pub trait TransferClient: Send + Sync {
    /// Attempt delivery of one encoded segment, resolving once the channel
    /// service has accepted or refused it.
    fn transfer(&self, body: Vec<u8>) -> impl Future<Output = Result<(), TransferError>> + Send;
}

/// HTTP transport posting segments to `<channel_url>/transfer`.
pub struct HttpTransferClient {
    client: Client<HttpConnector, Body>,
    transfer_url: String,
}

impl HttpTransferClient {
    /// Create a client bound to the given channel base URL.
    pub fn new(channel_url: &str) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self {
            client,
            transfer_url: format!("{}/transfer", channel_url.trim_end_matches('/')),
        }
    }
}

impl TransferClient for HttpTransferClient {
    async fn transfer(&self, body: Vec<u8>) -> Result<(), TransferError> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(&self.transfer_url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .map_err(|e| TransferError::Unavailable(e.to_string()))?;

        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| TransferError::Unavailable(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(TransferError::Rejected(response.status().as_u16()));
        }
        Ok(())
    }
}
