//! Client configuration errors.

use thiserror::Error;

/// Errors in client configuration.
///
/// These surface while a client is being constructed and never once a
/// request is in flight.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL cannot carry an HTTP path (e.g. `mailto:`).
    #[error("Unsupported base URL scheme: {scheme}")]
    UnsupportedScheme {
        /// The scheme that was supplied.
        scheme: String,
    },

    /// A required configuration field is missing or empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A credential or account id cannot be carried in an HTTP header.
    #[error("Invalid value for header {name}: {reason}")]
    InvalidHeader {
        /// The header the value was destined for.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// An environment variable holds a value that cannot be used.
    #[error("Invalid value in {var}: {reason}")]
    InvalidEnv {
        /// The environment variable name.
        var: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Creates a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates an invalid header error.
    pub fn invalid_header(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidHeader {
            name,
            reason: reason.into(),
        }
    }
}
