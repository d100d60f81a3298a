//! Job execution logs and their aggregates.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{RequestOptions, Scheduler0Client};
use crate::error::Result;
use crate::method::RestMethod;
use crate::response::{Envelope, Page};

/// One recorded run of a job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Execution {
    pub id: i64,
    pub account_id: i64,
    pub unique_id: String,
    pub state: i64,
    pub node_id: i64,
    pub job_id: i64,
    pub last_execution_datetime: String,
    pub next_execution_datetime: String,
    pub job_queue_version: i64,
    pub execution_version: i64,
    pub date_created: String,
    pub date_modified: Option<String>,
}

/// Filters for [`Scheduler0Client::list_executions`].
///
/// String filters are sent only when non-empty and numeric filters only
/// when positive. `account_id > 0` scopes the call to that account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListExecutionsParams {
    pub limit: i64,
    pub offset: i64,
    pub start_date: String,
    pub end_date: String,
    pub project_id: i64,
    pub job_id: i64,
    pub state: String,
    pub order_by: String,
    pub order_direction: String,
    pub account_id: i64,
}

impl ListExecutionsParams {
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
            .query_non_empty("startDate", &self.start_date)
            .query_non_empty("endDate", &self.end_date)
            .query_positive("projectId", self.project_id)
            .query_positive("jobId", self.job_id)
            .query_non_empty("state", &self.state)
            .query_non_empty("orderBy", &self.order_by)
            .query_non_empty("orderDirection", &self.order_direction)
            .account_positive(self.account_id)
    }
}

/// Window for [`Scheduler0Client::get_date_range_analytics`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeAnalyticsParams {
    pub start_date: String,
    pub start_time: String,
    /// Scopes the call to this account when positive.
    pub account_id: i64,
}

impl DateRangeAnalyticsParams {
    fn to_options(&self) -> RequestOptions {
        RequestOptions::new()
            .query("startDate", &self.start_date)
            .query("startTime", &self.start_time)
            .account_positive(self.account_id)
    }
}

impl Scheduler0Client {
    /// Lists executions matching `params`.
    pub async fn list_executions(
        &self,
        params: &ListExecutionsParams,
    ) -> Result<Envelope<Page<Execution>>> {
        self.fetch(RestMethod::Get, "/executions", params.to_options())
            .await
    }

    /// Fetches execution analytics for a date window.
    ///
    /// The payload shape is owned by the server and returned untyped.
    pub async fn get_date_range_analytics(
        &self,
        params: &DateRangeAnalyticsParams,
    ) -> Result<Envelope<Value>> {
        self.fetch(RestMethod::Get, "/executions-summary", params.to_options())
            .await
    }

    /// Fetches execution totals, scoped to `account_id` when positive.
    ///
    /// The payload shape is owned by the server and returned untyped.
    pub async fn get_execution_totals(&self, account_id: i64) -> Result<Envelope<Value>> {
        self.fetch(
            RestMethod::Get,
            "/executions-totals",
            RequestOptions::new().account_positive(account_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options_only_send_set_filters() {
        let params = ListExecutionsParams {
            start_date: "2025-01-01".to_string(),
            job_id: 9,
            project_id: 0,
            account_id: 12,
            ..ListExecutionsParams::new(50, 0)
        };
        let options = params.to_options();

        let keys: Vec<&str> = options.query.keys().map(String::as_str).collect();
        assert_eq!(keys, ["jobId", "limit", "offset", "startDate"]);
        assert_eq!(options.account_id.as_deref(), Some("12"));
    }

    #[test]
    fn test_zero_account_is_no_override() {
        assert_eq!(ListExecutionsParams::new(10, 0).to_options().account_id, None);
    }

    #[test]
    fn test_analytics_always_sends_window() {
        let options = DateRangeAnalyticsParams::default().to_options();
        assert_eq!(options.query["startDate"], "");
        assert_eq!(options.query["startTime"], "");
    }
}
