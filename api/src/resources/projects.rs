//! Projects group jobs within an account.

use serde::{Deserialize, Serialize};

use crate::client::{RequestOptions, Scheduler0Client};
use crate::error::Result;
use crate::method::RestMethod;
use crate::response::{Envelope, Page};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: i64,
    pub account_id: i64,
    pub name: String,
    pub description: String,
    pub date_created: String,
    pub date_modified: Option<String>,
    pub created_by: String,
    pub modified_by: Option<String>,
    pub deleted_by: Option<String>,
}

/// Body of [`Scheduler0Client::create_project`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    #[serde(skip)]
    pub account_id: Option<i64>,
    pub name: String,
    pub description: String,
    pub created_by: String,
}

/// Body of [`Scheduler0Client::update_project`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdateRequest {
    #[serde(skip)]
    pub account_id: Option<i64>,
    pub description: String,
    pub modified_by: String,
}

/// Body of [`Scheduler0Client::delete_project`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDeleteRequest {
    #[serde(skip)]
    pub account_id: Option<i64>,
    pub deleted_by: String,
}

crate::account::account_scoped!(ProjectRequest, ProjectUpdateRequest, ProjectDeleteRequest);

/// Paging for [`Scheduler0Client::list_projects`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProjectsParams {
    /// Scopes the call to this account when positive.
    pub account_id: i64,
    pub limit: i64,
    pub offset: i64,
    pub order_by: String,
    pub order_by_direction: String,
}

impl ListProjectsParams {
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
    /// Lists projects page by page.
    pub async fn list_projects(
        &self,
        params: &ListProjectsParams,
    ) -> Result<Envelope<Page<Project>>> {
        self.fetch(RestMethod::Get, "/projects", params.to_options())
            .await
    }

    /// Creates a project.
    pub async fn create_project(&self, body: &ProjectRequest) -> Result<Envelope<Project>> {
        self.send(RestMethod::Post, "/projects", body, RequestOptions::new())
            .await
    }

    /// Fetches a project by id.
    pub async fn get_project(&self, id: i64) -> Result<Envelope<Project>> {
        self.fetch(
            RestMethod::Get,
            &format!("/projects/{id}"),
            RequestOptions::new(),
        )
        .await
    }

    /// Updates a project's description.
    pub async fn update_project(
        &self,
        id: i64,
        body: &ProjectUpdateRequest,
    ) -> Result<Envelope<Project>> {
        self.send(
            RestMethod::Put,
            &format!("/projects/{id}"),
            body,
            RequestOptions::new(),
        )
        .await
    }

    /// Deletes a project.
    pub async fn delete_project(&self, id: i64, body: &ProjectDeleteRequest) -> Result<()> {
        self.send_empty(
            RestMethod::Delete,
            &format!("/projects/{id}"),
            body,
            RequestOptions::new(),
        )
        .await
    }
}
