//! Sequential segment forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! Ordered segments from the splitter
//!     → forwarder.rs (encode + transmit strictly in index order)
//!     → transfer.rs (one HTTP POST per segment to <channel>/transfer)
//!     → channel service reassembles
//! ```
//!
//! # Design Decisions
//! - Transmission is strictly sequential: segment i+1 never starts before
//!   segment i has been accepted, so the channel service can rely on in-order
//!   arrival without a reordering buffer
//! - All-or-nothing per relay operation: the first failure aborts the
//!   operation with no retry and no compensation for the delivered prefix
//! - The transport is a trait seam so the forwarder can be exercised without
//!   a live channel service

pub mod forwarder;
pub mod transfer;

pub use forwarder::{Forwarder, RelayError};
pub use transfer::{HttpTransferClient, TransferClient, TransferError};
