//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate; fields over format strings
//! - Log level configurable via RUST_LOG, with a debug default for the
//!   relay's own crate

pub mod logging;
