//! Segment Relay Service Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;
pub mod segment;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
