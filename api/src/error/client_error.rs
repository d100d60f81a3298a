//! Top-level client error type.

use thiserror::Error;

use super::ConfigError;

/// Errors returned by every Scheduler0 client operation.
///
/// Each variant maps to one failure stage of a call, so callers can tell
/// "the server rejected the call" ([`ClientError::Api`]) apart from "the
/// server accepted the call but returned something unparsable"
/// ([`ClientError::Decode`]). Nothing is retried internally.
///
/// ## Examples
///
/// ```rust,ignore
/// use scheduler0_api::ClientError;
///
/// match client.get_job("42", None).await {
///     Ok(job) => println!("{:?}", job.data),
///     Err(ClientError::Api { status: 404, .. }) => println!("no such job"),
///     Err(e) => eprintln!("call failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client was configured with invalid values.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request body could not be serialized to JSON. No request was sent.
    #[error("Failed to serialize request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Network-level failure (DNS, connect, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status of 400 or above.
    ///
    /// `message` is the raw response body; the API guarantees no structure.
    #[error("API error (status {status}): {message}")]
    Api {
        /// The HTTP status code returned.
        status: u16,
        /// The response body, verbatim.
        message: String,
    },

    /// The server answered successfully but the body did not match the
    /// expected shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// Returns the HTTP status code if the server rejected the call.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the server answered with an error status.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Returns `true` for a 404 answer.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Returns `true` if a success response could not be decoded.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
