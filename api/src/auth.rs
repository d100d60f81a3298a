//! Authentication modes for Scheduler0 requests.
//!
//! A client carries up to two credential pairs. Exactly one
//! [`AuthMode`] is chosen per request:
//!
//! 1. [`AuthMode::Basic`] when both username and password are set. This is
//!    peer (node-to-node) traffic and is additionally marked with
//!    `X-Peer: cmd`.
//! 2. [`AuthMode::ApiKey`] when both API key and secret are set.
//! 3. [`AuthMode::None`] otherwise.
//!
//! Basic auth wins when both pairs are configured.

use std::fmt;

use reqwest::header::HeaderValue;
use strum::Display;

use crate::error::ConfigError;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-Key";
/// Header carrying the API secret.
pub const API_SECRET_HEADER: &str = "X-API-Secret";
/// Header marking peer traffic authenticated with basic auth.
pub const PEER_HEADER: &str = "X-Peer";
/// Value sent in [`PEER_HEADER`].
pub const PEER_HEADER_VALUE: &str = "cmd";

/// Credential state held by a client.
///
/// Empty strings are treated the same as unset values. The `Debug` output
/// never includes the secret or password.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// API key for external API traffic.
    pub api_key: Option<String>,
    /// API secret paired with `api_key`.
    pub api_secret: Option<String>,
    /// Username for peer traffic.
    pub username: Option<String>,
    /// Password paired with `username`.
    pub password: Option<String>,
}

impl Credentials {
    /// Credentials with only an API key pair.
    pub fn api_key(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            api_secret: Some(secret.into()),
            ..Self::default()
        }
    }

    /// Credentials with only a basic-auth pair.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
            ..Self::default()
        }
    }

    /// Picks the authentication mode these credentials produce.
    pub fn mode(&self) -> AuthMode<'_> {
        AuthMode::select(self)
    }

    /// Checks that every configured value can be sent as a header.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            (API_KEY_HEADER, &self.api_key),
            (API_SECRET_HEADER, &self.api_secret),
        ] {
            if let Some(value) = value {
                HeaderValue::from_str(value)
                    .map_err(|e| ConfigError::invalid_header(name, e.to_string()))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: &Option<String>) -> Option<&'static str> {
            value.as_ref().map(|_| "<redacted>")
        }

        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &redact(&self.api_secret))
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .finish()
    }
}

/// The authentication scheme applied to a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum AuthMode<'a> {
    /// HTTP Basic credentials plus `X-Peer: cmd`.
    Basic {
        /// Basic-auth username.
        username: &'a str,
        /// Basic-auth password.
        password: &'a str,
    },
    /// `X-API-Key` and `X-API-Secret` headers.
    ApiKey {
        /// The API key.
        key: &'a str,
        /// The API secret.
        secret: &'a str,
    },
    /// No authentication headers.
    None,
}

impl<'a> AuthMode<'a> {
    /// Selects the mode for `credentials`, preferring basic auth.
    pub fn select(credentials: &'a Credentials) -> Self {
        let non_empty = |v: &'a Option<String>| v.as_deref().filter(|s| !s.is_empty());

        if let (Some(username), Some(password)) =
            (non_empty(&credentials.username), non_empty(&credentials.password))
        {
            return Self::Basic { username, password };
        }
        if let (Some(key), Some(secret)) =
            (non_empty(&credentials.api_key), non_empty(&credentials.api_secret))
        {
            return Self::ApiKey { key, secret };
        }
        Self::None
    }

    /// Applies this mode's headers to a request builder.
    pub fn apply(self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::Basic { username, password } => request
                .basic_auth(username, Some(password))
                .header(PEER_HEADER, PEER_HEADER_VALUE),
            Self::ApiKey { key, secret } => request
                .header(API_KEY_HEADER, key)
                .header(API_SECRET_HEADER, secret),
            Self::None => request,
        }
    }
}
