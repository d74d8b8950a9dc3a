//! Payload segmentation subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound payload bytes
//!     → splitter.rs (partition into fixed-size chunks)
//!     → record.rs (Segment records with positional metadata)
//!     → [relay layer transmits them in order]
//! ```
//!
//! # Design Decisions
//! - Splitting is a pure function: no I/O, no clock access, no failure modes
//! - The operation timestamp is captured once by the caller and stamped onto
//!   every segment of that operation
//! - An empty payload yields zero segments, not one empty segment

pub mod record;
pub mod splitter;

pub use record::{Segment, SEGMENT_BYTES};
pub use splitter::split;
