//! Client construction and request execution with tracing instrumentation.
//!
//! This module provides [`Scheduler0Client`], which sends requests built by
//! the request builder and decodes the answers with a [`ResponseFormat`].

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument, warn, Span};
use url::Url;

use crate::auth::Credentials;
use crate::config::{ClientConfig, DEFAULT_API_VERSION};
use crate::error::Result;
use crate::response::ResponseFormat;
use crate::ClientError;

/// Builder for configuring a [`Scheduler0Client`].
///
/// The base URL is only parsed in [`build`](Self::build), so every setter
/// is infallible.
#[derive(Debug)]
#[must_use]
pub struct ClientBuilder {
    base_url: String,
    version: String,
    credentials: Credentials,
    account_id: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            version: DEFAULT_API_VERSION.to_string(),
            credentials: Credentials::default(),
            account_id: None,
            timeout: None,
            http_client: None,
        }
    }

    /// Sets the API version segment (default `v1`).
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Authenticates with an API key and secret.
    pub fn api_key(mut self, key: impl Into<String>, secret: impl Into<String>) -> Self {
        self.credentials.api_key = Some(key.into());
        self.credentials.api_secret = Some(secret.into());
        self
    }

    /// Authenticates as a peer with HTTP basic credentials.
    ///
    /// When an API key is also configured, basic auth takes precedence.
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials.username = Some(username.into());
        self.credentials.password = Some(password.into());
        self
    }

    /// Sets the default account id sent with every call.
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Sets a per-request deadline.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let client = Scheduler0Client::builder("https://scheduler0.example.com")
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sends requests through an existing `reqwest::Client`.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`Scheduler0Client`].
    ///
    /// ## Errors
    ///
    /// Returns [`ClientError::Config`] if the base URL, version or a
    /// credential is invalid, or [`ClientError::Transport`] if the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<Scheduler0Client> {
        let mut config = ClientConfig::new(&self.base_url, self.version)?;
        config.credentials = self.credentials;
        config.account_id = self.account_id.filter(|id| !id.is_empty());
        config.timeout = self.timeout;

        Scheduler0Client::assemble(config, self.http_client)
    }
}

/// Async client for the Scheduler0 HTTP API.
///
/// Cloning is cheap: clones share the connection pool and the immutable
/// configuration, so a single client can serve concurrent tasks.
///
/// ## Examples
///
/// ```rust,ignore
/// use scheduler0_api::Scheduler0Client;
///
/// let client = Scheduler0Client::builder("https://scheduler0.example.com")
///     .api_key("key", "secret")
///     .account_id("42")
///     .build()?;
///
/// let job = client.get_job("7", None).await?;
/// println!("{:?}", job.data.spec);
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler0Client {
    pub(super) http: reqwest::Client,
    pub(super) config: Arc<ClientConfig>,
}

impl Scheduler0Client {
    /// Creates a builder for `base_url`.
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    /// Creates an unauthenticated client.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL or version is invalid.
    pub fn new(base_url: &str, version: &str) -> Result<Self> {
        Self::builder(base_url).version(version).build()
    }

    /// Creates a client authenticating with an API key pair.
    pub fn with_api_key(base_url: &str, version: &str, key: &str, secret: &str) -> Result<Self> {
        Self::builder(base_url)
            .version(version)
            .api_key(key, secret)
            .build()
    }

    /// Creates a client authenticating with an API key pair that scopes
    /// every call to `account_id` by default.
    pub fn with_api_key_and_account(
        base_url: &str,
        version: &str,
        key: &str,
        secret: &str,
        account_id: &str,
    ) -> Result<Self> {
        Self::builder(base_url)
            .version(version)
            .api_key(key, secret)
            .account_id(account_id)
            .build()
    }

    /// Creates a client for peer traffic using basic auth.
    pub fn with_basic_auth(
        base_url: &str,
        version: &str,
        username: &str,
        password: &str,
    ) -> Result<Self> {
        Self::builder(base_url)
            .version(version)
            .basic_auth(username, password)
            .build()
    }

    /// Creates a client from `SCHEDULER0_*` environment variables.
    ///
    /// See [`ClientConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Creates a client from a prepared configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::assemble(config, None)
    }

    fn assemble(config: ClientConfig, http: Option<reqwest::Client>) -> Result<Self> {
        config.validate()?;

        let http = match http {
            Some(http) => http,
            None => reqwest::Client::builder().build()?,
        };

        debug!(
            base_url = %config.base_url,
            version = %config.version,
            auth_mode = %config.credentials.mode(),
            "Scheduler0 client ready"
        );

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Sends a built request and decodes the answer with `F`.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - the request cannot be delivered ([`ClientError::Transport`])
    /// - the server answers with status 400 or above ([`ClientError::Api`],
    ///   carrying the raw body text)
    /// - a success body does not match `F` ([`ClientError::Decode`])
    #[instrument(
        name = "scheduler0_request",
        skip(self, request),
        fields(
            http.method = %request.method(),
            http.url = %request.url(),
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn execute<F>(&self, request: reqwest::Request) -> Result<F::Output>
    where
        F: ResponseFormat,
    {
        let response = self.http.execute(request).await.map_err(|e| {
            Span::current().record("otel.status_code", "ERROR");
            warn!(error = %e, "Scheduler0 request failed before a response arrived");
            ClientError::Transport(e)
        })?;

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        if status_code >= 400 {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());

            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);
            warn!(status = status_code, "Scheduler0 API returned an error status");

            return Err(ClientError::Api {
                status: status_code,
                message,
            });
        }

        Span::current().record("otel.status_code", "OK");

        if !F::reads_body() {
            return F::parse(bytes::Bytes::new());
        }

        let body = response.bytes().await?;
        F::parse(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{Envelope, JsonFormat, NoContent};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    struct TestProject {
        id: u64,
        name: String,
    }

    fn get(client: &Scheduler0Client, endpoint: &str) -> reqwest::Request {
        client
            .build_bodyless(crate::RestMethod::Get, endpoint, &Default::default())
            .unwrap()
    }

    #[tokio::test]
    async fn test_execute_get_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/projects/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": {"id": 1, "name": "billing"}
            })))
            .mount(&mock_server)
            .await;

        let client = Scheduler0Client::new(&mock_server.uri(), "v1").unwrap();
        let request = get(&client, "/projects/1");

        let result = client
            .execute::<JsonFormat<Envelope<TestProject>>>(request)
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(
            result.data,
            TestProject {
                id: 1,
                name: "billing".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_error_status_keeps_raw_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/projects/404"))
            .respond_with(ResponseTemplate::new(404).set_body_string("project not found"))
            .mount(&mock_server)
            .await;

        let client = Scheduler0Client::new(&mock_server.uri(), "v1").unwrap();
        let err = client
            .execute::<JsonFormat<TestProject>>(get(&client, "/projects/404"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(
            err,
            ClientError::Api { status: 404, ref message } if message == "project not found"
        ));
    }

    #[tokio::test]
    async fn test_error_status_with_json_body_is_not_decoded() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/jobs"))
            .respond_with(
                ResponseTemplate::new(500).set_body_string(r#"{"success":false,"data":"boom"}"#),
            )
            .mount(&mock_server)
            .await;

        let client = Scheduler0Client::new(&mock_server.uri(), "v1").unwrap();
        let err = client
            .execute::<JsonFormat<TestProject>>(get(&client, "/jobs"))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            r#"API error (status 500): {"success":false,"data":"boom"}"#
        );
    }

    #[tokio::test]
    async fn test_non_200_success_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/features"))
            .respond_with(ResponseTemplate::new(299).set_body_string("[]"))
            .mount(&mock_server)
            .await;

        let client = Scheduler0Client::new(&mock_server.uri(), "v1").unwrap();
        let items = client
            .execute::<JsonFormat<Vec<TestProject>>>(get(&client, "/features"))
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_json_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/projects/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&mock_server)
            .await;

        let client = Scheduler0Client::new(&mock_server.uri(), "v1").unwrap();
        let err = client
            .execute::<JsonFormat<TestProject>>(get(&client, "/projects/1"))
            .await
            .unwrap_err();
        assert!(err.is_decode_error());
    }

    #[tokio::test]
    async fn test_no_content_ignores_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/v1/projects/1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/projects/2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&mock_server)
            .await;

        let client = Scheduler0Client::new(&mock_server.uri(), "v1").unwrap();
        for endpoint in ["/projects/1", "/projects/2"] {
            let request = client
                .build_bodyless(crate::RestMethod::Delete, endpoint, &Default::default())
                .unwrap();
            client.execute::<NoContent>(request).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_transport_error() {
        // Port 1 is reserved and refuses connections.
        let client = Scheduler0Client::new("http://127.0.0.1:1", "v1").unwrap();
        let err = client
            .execute::<NoContent>(get(&client, "/healthcheck"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_error_status_is_logged() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/jobs/1"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&mock_server)
            .await;

        let client = Scheduler0Client::new(&mock_server.uri(), "v1").unwrap();
        let _ = client
            .execute::<NoContent>(get(&client, "/jobs/1"))
            .await;

        assert!(logs_contain("Scheduler0 API returned an error status"));
        assert!(logs_contain("status=403"));
    }

    #[test]
    fn test_builder_defaults() {
        let client = Scheduler0Client::builder("https://scheduler0.test").build().unwrap();
        let config = client.config();
        assert_eq!(config.version, DEFAULT_API_VERSION);
        assert_eq!(config.credentials, Credentials::default());
        assert_eq!(config.account_id, None);
        assert_eq!(config.timeout, None);
        assert_eq!(client.base_url().as_str(), "https://scheduler0.test/");
    }

    #[test]
    fn test_convenience_constructors() {
        let client =
            Scheduler0Client::with_api_key_and_account("https://x.test", "v1", "k", "s", "42")
                .unwrap();
        assert_eq!(client.config().credentials, Credentials::api_key("k", "s"));
        assert_eq!(client.config().account_id.as_deref(), Some("42"));

        let peer = Scheduler0Client::with_basic_auth("https://x.test", "v1", "node", "pw").unwrap();
        assert_eq!(peer.config().credentials, Credentials::basic("node", "pw"));
    }

    #[test]
    fn test_empty_default_account_is_unset() {
        let client = Scheduler0Client::builder("https://x.test")
            .account_id("")
            .build()
            .unwrap();
        assert_eq!(client.config().account_id, None);
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Scheduler0Client::new("not a url", "v1").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_clones_share_config() {
        let client = Scheduler0Client::builder("https://x.test")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.config, &clone.config));
        assert_eq!(clone.config().timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_injected_http_client() {
        let http = reqwest::Client::builder().build().unwrap();
        let client = Scheduler0Client::builder("https://x.test")
            .http_client(http)
            .build()
            .unwrap();
        assert_eq!(client.base_url().host_str(), Some("x.test"));
    }
}
