//! Error types for the Scheduler0 client.
//!
//! - [`ClientError`] - every failure a client call can surface
//! - [`ConfigError`] - invalid client configuration, raised at construction

mod client_error;
mod config_error;

pub use client_error::ClientError;
pub use config_error::ConfigError;

/// Result alias used throughout the crate.
pub type Result<T, E = ClientError> = std::result::Result<T, E>;
