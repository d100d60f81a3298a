//! Outgoing request construction.
//!
//! Every authenticated call goes through [`Scheduler0Client::build_request`]:
//! the URL is composed under `/api/<version>`, the body is encoded as JSON,
//! the authentication mode is applied and the `X-Account-ID` header is
//! resolved from the per-call override, the body and the client default.

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::Scheduler0Client;
use crate::account::{resolve_account_id, AccountScoped, ACCOUNT_ID_HEADER};
use crate::endpoint::{compose_url, QueryParams};
use crate::error::{ClientError, ConfigError, Result};
use crate::method::RestMethod;
use crate::response::{JsonFormat, NoContent};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Per-call options: an account-id override and query parameters.
///
/// The default sends no override and no query string.
///
/// ## Examples
///
/// ```rust
/// use scheduler0_api::RequestOptions;
///
/// let options = RequestOptions::new().account("42").query("limit", 10);
/// assert_eq!(options.account_id.as_deref(), Some("42"));
/// assert_eq!(options.query["limit"], "10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Account id for this call only. Empty counts as unset.
    pub account_id: Option<String>,
    /// Query parameters, form-encoded into the URL.
    pub query: QueryParams,
}

impl RequestOptions {
    /// Options with no override and no query parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the account id for this call.
    #[must_use]
    pub fn account(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Overrides the account id when one is given.
    #[must_use]
    pub fn maybe_account(self, account_id: Option<&str>) -> Self {
        match account_id {
            Some(id) => self.account(id),
            None => self,
        }
    }

    /// Adds a query parameter, replacing an earlier value for `key`.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(key.into(), value.to_string());
        self
    }

    /// Adds a query parameter only when `value` is non-empty.
    #[must_use]
    pub(crate) fn query_non_empty(self, key: &str, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.query(key, value)
        }
    }

    /// Adds a query parameter only when `value` is positive.
    #[must_use]
    pub(crate) fn query_positive(self, key: &str, value: i64) -> Self {
        if value > 0 {
            self.query(key, value)
        } else {
            self
        }
    }

    /// Overrides the account id only when `account_id` is positive.
    #[must_use]
    pub(crate) fn account_positive(self, account_id: i64) -> Self {
        if account_id > 0 {
            self.account(account_id.to_string())
        } else {
            self
        }
    }
}

impl Scheduler0Client {
    /// Builds an authenticated request.
    ///
    /// The body, when present, is serialized to JSON and scanned for an
    /// account id through [`AccountScoped`].
    ///
    /// ## Errors
    ///
    /// Returns [`ClientError::Encode`] if the body cannot be serialized, or
    /// [`ClientError::Config`] if the resolved account id is not a valid
    /// header value. Nothing is sent in either case.
    pub fn build_request<B>(
        &self,
        method: RestMethod,
        endpoint: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<reqwest::Request>
    where
        B: Serialize + AccountScoped + ?Sized,
    {
        debug_assert!(
            body.is_none() || method.has_body(),
            "{method} requests must not carry a body"
        );

        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(ClientError::Encode)?;

        let mut request = self.base_request(method, endpoint, Some(&options.query));

        let auth = self.config.credentials.mode();
        debug!(auth_mode = %auth, endpoint, "applying authentication");
        request = auth.apply(request);

        match resolve_account_id(
            options.account_id.as_deref(),
            body,
            self.config.account_id.as_deref(),
        ) {
            Some(account) => {
                debug!(source = %account.source, endpoint, "resolved account id");
                let value = HeaderValue::from_str(&account.value)
                    .map_err(|e| ConfigError::invalid_header(ACCOUNT_ID_HEADER, e.to_string()))?;
                request = request.header(ACCOUNT_ID_HEADER, value);
            }
            None => debug!(source = "none", endpoint, "no account id for request"),
        }

        if let Some(payload) = payload {
            request = request.body(payload);
        }

        Ok(request.build()?)
    }

    /// Builds an authenticated request without a body.
    pub fn build_bodyless(
        &self,
        method: RestMethod,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<reqwest::Request> {
        self.build_request::<()>(method, endpoint, None, options)
    }

    /// Builds a request that carries only `Content-Type`: no authentication
    /// headers and no account id.
    pub fn build_unauthenticated(
        &self,
        method: RestMethod,
        endpoint: &str,
    ) -> Result<reqwest::Request> {
        Ok(self.base_request(method, endpoint, None).build()?)
    }

    fn base_request(
        &self,
        method: RestMethod,
        endpoint: &str,
        query: Option<&QueryParams>,
    ) -> reqwest::RequestBuilder {
        let url = compose_url(&self.config.base_url, &self.config.version, endpoint, query);
        let request = self
            .http
            .request(method.to_reqwest(), url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        match self.config.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    /// Sends a bodyless call and decodes the JSON answer into `T`.
    pub async fn fetch<T>(
        &self,
        method: RestMethod,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = self.build_bodyless(method, endpoint, &options)?;
        self.execute::<JsonFormat<T>>(request).await
    }

    /// Sends a bodyless call whose answer carries nothing of interest.
    pub async fn fetch_empty(
        &self,
        method: RestMethod,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<()> {
        let request = self.build_bodyless(method, endpoint, &options)?;
        self.execute::<NoContent>(request).await
    }

    /// Sends `body` as JSON and decodes the JSON answer into `T`.
    pub async fn send<B, T>(
        &self,
        method: RestMethod,
        endpoint: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T>
    where
        B: Serialize + AccountScoped + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build_request(method, endpoint, Some(body), &options)?;
        self.execute::<JsonFormat<T>>(request).await
    }

    /// Sends `body` as JSON; the answer body is not read.
    pub async fn send_empty<B>(
        &self,
        method: RestMethod,
        endpoint: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<()>
    where
        B: Serialize + AccountScoped + ?Sized,
    {
        let request = self.build_request(method, endpoint, Some(body), &options)?;
        self.execute::<NoContent>(request).await
    }
}
