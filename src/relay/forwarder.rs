//! Strictly sequential segment transmission.
//!
//! # Responsibilities
//! - Encode each segment into its wire form and hand it to the transport
//! - Wait for each delivery outcome before starting the next segment
//! - Abort the relay operation on the first failure of any kind
//!
//! # Design Decisions
//! - No pipelining: ordering is a correctness requirement of the channel
//!   contract, not an implementation accident
//! - No rollback: segments delivered before a failure stay delivered; the
//!   caller reports a single opaque failure to its own caller

use thiserror::Error;

use crate::relay::transfer::{TransferClient, TransferError};
use crate::segment::Segment;

/// Terminal failure of one relay operation.
#[derive(Debug, Error)]
pub enum RelayError {
    /// A segment could not be encoded into the wire format.
    #[error("failed to encode segment {segment_num}: {source}")]
    Encode {
        segment_num: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The transport failed to deliver a segment.
    #[error("transfer of segment {segment_num} failed: {source}")]
    Transfer {
        segment_num: usize,
        #[source]
        source: TransferError,
    },
}

/// Transmits the segments of one relay operation in index order.
pub struct Forwarder<T: TransferClient> {
    transport: T,
}

impl<T: TransferClient> Forwarder<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Deliver every segment, in order, one at a time.
    ///
    /// Returns `Ok(())` only if the channel service accepted all of them.
    /// Stops at the first segment that fails to encode or deliver; segments
    /// after it are never attempted.
    pub async fn forward(&self, segments: &[Segment]) -> Result<(), RelayError> {
        for segment in segments {
            let body = segment.encode().map_err(|source| RelayError::Encode {
                segment_num: segment.segment_num,
                source,
            })?;

            tracing::debug!(
                segment_num = segment.segment_num,
                segments_count = segment.segments_count,
                bytes = body.len(),
                "sending segment"
            );

            self.transport
                .transfer(body)
                .await
                .map_err(|source| RelayError::Transfer {
                    segment_num: segment.segment_num,
                    source,
                })?;
        }
        Ok(())
    }
}
