//! Typed async client for the Scheduler0 job-scheduling HTTP API.
//!
//! The crate wraps every Scheduler0 resource (accounts, credentials,
//! executions, executors, features, jobs, projects, async tasks, cluster
//! backups, prompts and the healthcheck) in thin methods on
//! [`Scheduler0Client`], sharing one request-construction layer.
//!
//! ## Features
//!
//! - **Two authentication modes**: API key/secret headers for external
//!   traffic, HTTP basic plus `X-Peer: cmd` for peer traffic
//! - **Account scoping**: `X-Account-ID` resolved from a per-call override,
//!   the request body, or the client default
//! - **Layered error handling**: configuration, encoding, transport, API
//!   status and decoding failures are distinct [`ClientError`] variants
//! - **Tracing**: every call runs in an OpenTelemetry-style span
//!
//! ## Example
//!
//! ```rust,ignore
//! use scheduler0_api::Scheduler0Client;
//! use scheduler0_api::resources::jobs::{JobRequest, ListJobsParams};
//!
//! let client = Scheduler0Client::with_api_key_and_account(
//!     "https://scheduler0.example.com",
//!     "v1",
//!     "api-key",
//!     "api-secret",
//!     "42",
//! )?;
//!
//! let request_id = client
//!     .create_job(&JobRequest::new(7, "UTC", "ops").spec("@every 1h"), None)
//!     .await?
//!     .data;
//! let page = client.list_jobs(&ListJobsParams::new(10, 0)).await?.data;
//! println!("{request_id}: {} jobs", page.total);
//! ```

pub mod account;
pub mod auth;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod resources;
pub mod response;

// Re-exports for convenience
pub use account::{AccountScoped, ACCOUNT_ID_HEADER};
pub use auth::{AuthMode, Credentials};
pub use client::{ClientBuilder, RequestOptions, Scheduler0Client};
pub use config::ClientConfig;
pub use endpoint::QueryParams;
pub use error::{ClientError, ConfigError, Result};
pub use method::RestMethod;
pub use response::{Envelope, JsonFormat, NoContent, Page, ResponseFormat};
