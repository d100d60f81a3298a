//! Job drafts generated from a natural-language prompt.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::account::AccountScoped;
use crate::client::{RequestOptions, Scheduler0Client};
use crate::error::Result;
use crate::method::RestMethod;

/// Body of [`Scheduler0Client::create_job_from_prompt`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptJobRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub purposes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timezone: String,
}

impl PromptJobRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }
}

impl AccountScoped for PromptJobRequest {}

/// A job configuration drafted from a prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptJob {
    pub kind: String,
    pub purpose: String,
    pub subject: String,
    pub next_run_at: Option<String>,
    pub recurrence: String,
    pub event: String,
    pub delivery: String,
    pub cron_expression: String,
    pub channel: String,
    pub recipients: Vec<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub timezone: String,
    pub metadata: Map<String, Value>,
}

impl Scheduler0Client {
    /// Drafts jobs from a prompt.
    ///
    /// Unlike other calls the answer is a bare JSON array, not an envelope.
    pub async fn create_job_from_prompt(&self, body: &PromptJobRequest) -> Result<Vec<PromptJob>> {
        self.send(RestMethod::Post, "/prompt", body, RequestOptions::new())
            .await
    }
}
