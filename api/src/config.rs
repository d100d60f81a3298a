//! Client configuration.
//!
//! A [`ClientConfig`] is assembled once, either explicitly, through
//! [`ClientBuilder`](crate::ClientBuilder), or from `SCHEDULER0_*` environment
//! variables, and is immutable once a client owns it.

use std::time::Duration;

use reqwest::header::HeaderValue;
use tracing::info;
use url::Url;

use crate::account::ACCOUNT_ID_HEADER;
use crate::auth::Credentials;
use crate::error::ConfigError;

/// API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Environment variable holding the base URL (required).
pub const ENV_API_URL: &str = "SCHEDULER0_API_URL";
/// Environment variable holding the API version.
pub const ENV_API_VERSION: &str = "SCHEDULER0_API_VERSION";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "SCHEDULER0_API_KEY";
/// Environment variable holding the API secret.
pub const ENV_API_SECRET: &str = "SCHEDULER0_API_SECRET";
/// Environment variable holding the peer username.
pub const ENV_USERNAME: &str = "SCHEDULER0_USERNAME";
/// Environment variable holding the peer password.
pub const ENV_PASSWORD: &str = "SCHEDULER0_PASSWORD";
/// Environment variable holding the default account id.
pub const ENV_ACCOUNT_ID: &str = "SCHEDULER0_ACCOUNT_ID";
/// Environment variable holding a request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "SCHEDULER0_TIMEOUT_SECS";

/// Settings shared by every request a client makes.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Scheme, host and optional path prefix of the Scheduler0 server.
    pub base_url: Url,
    /// API version segment, e.g. `v1`.
    pub version: String,
    /// Credentials used to pick the authentication mode.
    pub credentials: Credentials,
    /// Account id sent when neither the call nor the body names one.
    pub account_id: Option<String>,
    /// Per-request deadline. `None` imposes no deadline.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a configuration with no credentials and no default account.
    ///
    /// ## Errors
    ///
    /// Returns an error if `base_url` is not an absolute `http`/`https` URL
    /// or `version` is empty.
    pub fn new(base_url: &str, version: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self {
            base_url: parse_base_url(base_url)?,
            version: version.into(),
            credentials: Credentials::default(),
            account_id: None,
            timeout: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads the configuration from `SCHEDULER0_*` environment variables.
    ///
    /// Reads:
    /// - `SCHEDULER0_API_URL` (required)
    /// - `SCHEDULER0_API_VERSION` (default `v1`)
    /// - `SCHEDULER0_API_KEY` / `SCHEDULER0_API_SECRET`
    /// - `SCHEDULER0_USERNAME` / `SCHEDULER0_PASSWORD`
    /// - `SCHEDULER0_ACCOUNT_ID`
    /// - `SCHEDULER0_TIMEOUT_SECS`
    ///
    /// ## Errors
    ///
    /// Returns an error if the URL is missing or invalid, or the timeout is
    /// not a positive whole number of seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let base_url = get(ENV_API_URL).ok_or_else(|| ConfigError::missing_field(ENV_API_URL))?;
        let version = get(ENV_API_VERSION).unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let timeout = get(ENV_TIMEOUT_SECS)
            .map(|raw| match raw.parse::<u64>() {
                Ok(0) => Err(ConfigError::InvalidEnv {
                    var: ENV_TIMEOUT_SECS,
                    reason: "timeout must be at least one second".to_string(),
                }),
                Ok(secs) => Ok(Duration::from_secs(secs)),
                Err(e) => Err(ConfigError::InvalidEnv {
                    var: ENV_TIMEOUT_SECS,
                    reason: e.to_string(),
                }),
            })
            .transpose()?;

        let mut config = Self::new(&base_url, version)?;
        config.credentials = Credentials {
            api_key: get(ENV_API_KEY),
            api_secret: get(ENV_API_SECRET),
            username: get(ENV_USERNAME),
            password: get(ENV_PASSWORD),
        };
        config.account_id = get(ENV_ACCOUNT_ID);
        config.timeout = timeout;
        config.validate()?;

        info!(
            base_url = %config.base_url,
            version = %config.version,
            auth_mode = %config.credentials.mode(),
            has_account_id = config.account_id.is_some(),
            "Scheduler0 client configured from environment"
        );

        Ok(config)
    }

    /// Checks every field that is sent on the wire.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.version.trim().is_empty() {
            return Err(ConfigError::missing_field("version"));
        }
        self.credentials.validate()?;
        if let Some(account_id) = &self.account_id {
            HeaderValue::from_str(account_id)
                .map_err(|e| ConfigError::invalid_header(ACCOUNT_ID_HEADER, e.to_string()))?;
        }
        Ok(())
    }
}

/// Parses a base URL, accepting only `http` and `https`.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}
