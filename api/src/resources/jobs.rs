//! Scheduled jobs.
//!
//! Jobs are always created in batches: the server queues them and answers
//! `202 Accepted` with the id of an async task that tracks the insert (see
//! [`Scheduler0Client::get_async_task`]).

use serde::{Deserialize, Serialize};

use crate::client::{RequestOptions, Scheduler0Client};
use crate::error::Result;
use crate::method::RestMethod;
use crate::response::{Envelope, Page};

/// A scheduled job as stored by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    pub id: i64,
    pub account_id: i64,
    pub project_id: i64,
    pub executor_id: Option<i64>,
    pub data: String,
    /// Cron expression or `@every` interval.
    pub spec: String,
    pub start_date: String,
    pub end_date: String,
    pub last_execution_date: String,
    pub timezone: String,
    pub timezone_offset: i64,
    pub retry_max: i64,
    pub execution_id: String,
    pub status: String,
    pub date_created: String,
    pub date_modified: Option<String>,
    pub created_by: String,
    pub modified_by: Option<String>,
    pub deleted_by: Option<String>,
}

/// One job in a [`Scheduler0Client::batch_create_jobs`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    #[serde(skip)]
    pub account_id: Option<i64>,
    pub project_id: i64,
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executor_id: Option<i64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub data: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub spec: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub start_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub end_date: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub timezone_offset: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub retry_max: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    pub created_by: String,
}

impl JobRequest {
    /// Creates a job for `project_id` evaluated in `timezone`.
    pub fn new(project_id: i64, timezone: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            project_id,
            timezone: timezone.into(),
            created_by: created_by.into(),
            ..Self::default()
        }
    }

    /// Sets the schedule (cron expression or `@every` interval).
    #[must_use]
    pub fn spec(mut self, spec: impl Into<String>) -> Self {
        self.spec = spec.into();
        self
    }

    /// Sets the payload handed to the executor.
    #[must_use]
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    /// Runs the job on a specific executor.
    #[must_use]
    pub fn executor(mut self, executor_id: i64) -> Self {
        self.executor_id = Some(executor_id);
        self
    }

    /// Scopes the job to an account.
    #[must_use]
    pub fn account(mut self, account_id: i64) -> Self {
        self.account_id = Some(account_id);
        self
    }
}

/// Body of [`Scheduler0Client::update_job`]. Empty fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdateRequest {
    #[serde(skip)]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "is_zero")]
    pub project_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executor_id: Option<i64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub data: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub spec: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub start_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub end_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timezone: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub timezone_offset: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub retry_max: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    pub modified_by: String,
}

/// Body of [`Scheduler0Client::delete_job`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDeleteRequest {
    #[serde(skip)]
    pub account_id: Option<i64>,
    pub deleted_by: String,
}

crate::account::account_scoped!(JobRequest, JobUpdateRequest, JobDeleteRequest);

fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// Filters for [`Scheduler0Client::list_jobs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListJobsParams {
    /// Project to filter by. Empty lists jobs of every project.
    pub project_id: String,
    /// Account override for this call.
    pub account_id: Option<String>,
    pub limit: i64,
    pub offset: i64,
    pub order_by: String,
    pub order_by_direction: String,
}

impl ListJobsParams {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit,
            offset,
            ..Self::default()
        }
    }

    fn to_options(&self) -> RequestOptions {
        RequestOptions::new()
            .query("limit", self.limit)
            .query("offset", self.offset)
            .query_non_empty("projectId", &self.project_id)
            .query_non_empty("orderBy", &self.order_by)
            .query_non_empty("orderByDirection", &self.order_by_direction)
            .maybe_account(self.account_id.as_deref())
    }
}

impl Scheduler0Client {
    /// Queues a batch of jobs and returns the async request id.
    ///
    /// Without an override, the first job carrying an account id scopes
    /// the whole batch.
    pub async fn batch_create_jobs(
        &self,
        jobs: &[JobRequest],
        account_id: Option<&str>,
    ) -> Result<Envelope<String>> {
        self.send(
            RestMethod::Post,
            "/jobs",
            jobs,
            RequestOptions::new().maybe_account(account_id),
        )
        .await
    }

    /// Queues a single job as a batch of one.
    pub async fn create_job(
        &self,
        job: &JobRequest,
        account_id: Option<&str>,
    ) -> Result<Envelope<String>> {
        self.batch_create_jobs(std::slice::from_ref(job), account_id)
            .await
    }

    /// Fetches a job by id.
    pub async fn get_job(&self, id: &str, account_id: Option<&str>) -> Result<Envelope<Job>> {
        self.fetch(
            RestMethod::Get,
            &format!("/jobs/{id}"),
            RequestOptions::new().maybe_account(account_id),
        )
        .await
    }

    /// Lists jobs page by page.
    pub async fn list_jobs(&self, params: &ListJobsParams) -> Result<Envelope<Page<Job>>> {
        self.fetch(RestMethod::Get, "/jobs", params.to_options())
            .await
    }

    /// Updates a job.
    pub async fn update_job(
        &self,
        id: &str,
        body: &JobUpdateRequest,
        account_id: Option<&str>,
    ) -> Result<Envelope<Job>> {
        self.send(
            RestMethod::Put,
            &format!("/jobs/{id}"),
            body,
            RequestOptions::new().maybe_account(account_id),
        )
        .await
    }

    /// Deletes a job.
    pub async fn delete_job(
        &self,
        id: &str,
        body: &JobDeleteRequest,
        account_id: Option<&str>,
    ) -> Result<()> {
        self.send_empty(
            RestMethod::Delete,
            &format!("/jobs/{id}"),
            body,
            RequestOptions::new().maybe_account(account_id),
        )
        .await
    }
}
