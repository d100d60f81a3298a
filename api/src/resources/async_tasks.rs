//! Async tasks track work the server accepted but has not finished, such as
//! batch job creation.

use serde::{Deserialize, Serialize};

use crate::client::{RequestOptions, Scheduler0Client};
use crate::error::Result;
use crate::method::RestMethod;
use crate::response::Envelope;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AsyncTask {
    pub id: i64,
    pub request_id: String,
    pub input: String,
    pub output: String,
    pub service: String,
    pub state: i64,
    pub date_created: String,
}

impl Scheduler0Client {
    /// Fetches the task created for `request_id`.
    pub async fn get_async_task(&self, request_id: &str) -> Result<Envelope<AsyncTask>> {
        self.fetch(
            RestMethod::Get,
            &format!("/async-tasks/{request_id}"),
            RequestOptions::new(),
        )
        .await
    }
}
