//! Scheduler0 resources.
//!
//! Each module holds the request and response types of one remote resource
//! and adds its calls to [`Scheduler0Client`](crate::Scheduler0Client).
//! Request bodies that may name an account keep the id out of the JSON
//! payload and expose it through [`AccountScoped`](crate::AccountScoped), so
//! it travels in the `X-Account-ID` header instead.

pub mod accounts;
pub mod async_tasks;
pub mod backups;
pub mod credentials;
pub mod executions;
pub mod executors;
pub mod features;
pub mod healthcheck;
pub mod jobs;
pub mod projects;
pub mod prompts;
