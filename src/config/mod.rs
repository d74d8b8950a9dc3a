//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read variables, apply defaults, validate)
//!     → RelayConfig (validated, immutable)
//!     → injected once at startup
//! ```
//!
//! # Design Decisions
//! - Configuration comes from the environment, matching the deployment
//!   contract of the channel pipeline (`port`, `channelURL`)
//! - The channel URL is validated at load time so transfer requests can
//!   assume a well-formed base
//! - Config is immutable once loaded; the channel address is shared read-only
//!   by all concurrent relay operations

pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::RelayConfig;
