//! HTTP inbound subsystem.
//!
//! # Data Flow
//! ```text
//! POST /send with raw payload body
//!     → server.rs (read body, assign relay operation ID)
//!     → segment layer splits the payload
//!     → relay layer forwards segments downstream
//!     → 200 if every segment was accepted, 500 otherwise
//! ```

pub mod server;

pub use server::HttpServer;
