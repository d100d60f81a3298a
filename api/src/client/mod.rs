//! HTTP client for the Scheduler0 API.
//!
//! - [`Scheduler0Client`] - sends requests and decodes answers
//! - [`ClientBuilder`] - fluent configuration
//! - [`RequestOptions`] - per-call account override and query string

mod executor;
mod request;

pub use executor::{ClientBuilder, Scheduler0Client};
pub use request::RequestOptions;
