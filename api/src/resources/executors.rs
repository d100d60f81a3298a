//! Executors: the cloud functions or webhooks that run job payloads.

use serde::{Deserialize, Serialize};

use crate::client::{RequestOptions, Scheduler0Client};
use crate::error::Result;
use crate::method::RestMethod;
use crate::response::{Envelope, Page};

/// A configured executor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Executor {
    pub id: i64,
    pub account_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub region: String,
    pub cloud_provider: String,
    pub cloud_resource_url: String,
    pub cloud_api_key: String,
    pub cloud_api_secret: String,
    pub webhook_url: String,
    pub webhook_secret: String,
    pub webhook_method: String,
    pub date_created: String,
    pub date_modified: Option<String>,
    pub date_deleted: Option<String>,
    pub created_by: String,
    pub modified_by: Option<String>,
    pub deleted_by: Option<String>,
}

/// Body of [`Scheduler0Client::create_executor`].
///
/// Cloud and webhook settings are omitted from the payload when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorRequest {
    #[serde(skip)]
    pub account_id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub region: String,
    pub cloud_provider: String,
    pub cloud_resource_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cloud_api_key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cloud_api_secret: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_secret: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_method: String,
    pub created_by: String,
}

/// Body of [`Scheduler0Client::update_executor`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorUpdateRequest {
    #[serde(skip)]
    pub account_id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub region: String,
    pub cloud_provider: String,
    pub cloud_resource_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cloud_api_key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cloud_api_secret: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_secret: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_method: String,
    pub modified_by: String,
}

/// Body of [`Scheduler0Client::delete_executor`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorDeleteRequest {
    #[serde(skip)]
    pub account_id: Option<i64>,
    pub deleted_by: String,
}

crate::account::account_scoped!(ExecutorRequest, ExecutorUpdateRequest, ExecutorDeleteRequest);

/// Paging for [`Scheduler0Client::list_executors`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListExecutorsParams {
    /// Scopes the call to this account when positive.
    pub account_id: i64,
    pub limit: i64,
    pub offset: i64,
    pub order_by: String,
    pub order_by_direction: String,
}

impl ListExecutorsParams {
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
            .query_non_empty("orderBy", &self.order_by)
            .query_non_empty("orderByDirection", &self.order_by_direction)
            .account_positive(self.account_id)
    }
}

impl Scheduler0Client {
    /// Lists executors page by page.
    pub async fn list_executors(
        &self,
        params: &ListExecutorsParams,
    ) -> Result<Envelope<Page<Executor>>> {
        self.fetch(RestMethod::Get, "/executors", params.to_options())
            .await
    }

    /// Registers an executor.
    pub async fn create_executor(&self, body: &ExecutorRequest) -> Result<Envelope<Executor>> {
        self.send(RestMethod::Post, "/executors", body, RequestOptions::new())
            .await
    }

    /// Fetches an executor by id.
    pub async fn get_executor(&self, id: &str) -> Result<Envelope<Executor>> {
        self.fetch(
            RestMethod::Get,
            &format!("/executors/{id}"),
            RequestOptions::new(),
        )
        .await
    }

    /// Updates an executor.
    pub async fn update_executor(
        &self,
        id: &str,
        body: &ExecutorUpdateRequest,
    ) -> Result<Envelope<Executor>> {
        self.send(
            RestMethod::Put,
            &format!("/executors/{id}"),
            body,
            RequestOptions::new(),
        )
        .await
    }

    /// Deletes an executor.
    pub async fn delete_executor(&self, id: &str, body: &ExecutorDeleteRequest) -> Result<()> {
        self.send_empty(
            RestMethod::Delete,
            &format!("/executors/{id}"),
            body,
            RequestOptions::new(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_empty_optional_settings() {
        let body = ExecutorRequest {
            account_id: Some(5),
            name: "lambda".to_string(),
            kind: "cloud_function".to_string(),
            region: "eu-west-1".to_string(),
            cloud_provider: "aws".to_string(),
            cloud_resource_url: "arn:aws:lambda:fn".to_string(),
            created_by: "ops".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "name": "lambda",
                "type": "cloud_function",
                "region": "eu-west-1",
                "cloudProvider": "aws",
                "cloudResourceUrl": "arn:aws:lambda:fn",
                "createdBy": "ops"
            })
        );
    }

    #[test]
    fn test_executor_type_field_decodes() {
        let executor: Executor =
            serde_json::from_str(r#"{"id": 1, "type": "webhook_url", "webhookUrl": "https://h.test"}"#)
                .unwrap();
        assert_eq!(executor.kind, "webhook_url");
        assert_eq!(executor.webhook_url, "https://h.test");
    }
}
