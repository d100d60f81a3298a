//! API credentials issued to an account.

use serde::{Deserialize, Serialize};

use crate::client::{RequestOptions, Scheduler0Client};
use crate::error::Result;
use crate::method::RestMethod;
use crate::response::{Envelope, Page};

/// An API key/secret pair owned by an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Credential {
    pub id: i64,
    pub account_id: i64,
    pub archived: bool,
    pub api_key: String,
    pub api_secret: String,
    pub date_created: String,
    pub date_modified: Option<String>,
    pub date_deleted: Option<String>,
    pub created_by: String,
    pub modified_by: Option<String>,
    pub deleted_by: Option<String>,
    pub archived_by: Option<String>,
}

/// Paging and ordering for [`Scheduler0Client::list_credentials`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCredentialsParams {
    pub limit: i64,
    pub offset: i64,
    /// Column to order by, e.g. `date_created`. Empty leaves the server default.
    pub order_by: String,
    /// `asc` or `desc`. Empty leaves the server default.
    pub order_by_direction: String,
}

impl ListCredentialsParams {
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
    }
}

/// Body of [`Scheduler0Client::create_credential`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialCreateRequest {
    #[serde(skip)]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub archived: bool,
    pub created_by: String,
}

/// Body of [`Scheduler0Client::update_credential`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialUpdateRequest {
    #[serde(skip)]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub archived: bool,
    pub modified_by: String,
}

/// Body of [`Scheduler0Client::delete_credential`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDeleteRequest {
    #[serde(skip)]
    pub account_id: Option<i64>,
    pub deleted_by: String,
}

/// Body of [`Scheduler0Client::archive_credential`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialArchiveRequest {
    #[serde(skip)]
    pub account_id: Option<i64>,
    pub archived_by: String,
}

crate::account::account_scoped!(
    CredentialCreateRequest,
    CredentialUpdateRequest,
    CredentialDeleteRequest,
    CredentialArchiveRequest,
);

impl Scheduler0Client {
    /// Lists credentials page by page.
    pub async fn list_credentials(
        &self,
        params: &ListCredentialsParams,
    ) -> Result<Envelope<Page<Credential>>> {
        self.fetch(RestMethod::Get, "/credentials", params.to_options())
            .await
    }

    /// Issues a new credential.
    pub async fn create_credential(
        &self,
        body: &CredentialCreateRequest,
    ) -> Result<Envelope<Credential>> {
        self.send(RestMethod::Post, "/credentials", body, RequestOptions::new())
            .await
    }

    /// Fetches a credential by id.
    pub async fn get_credential(&self, id: &str) -> Result<Envelope<Credential>> {
        self.fetch(
            RestMethod::Get,
            &format!("/credentials/{id}"),
            RequestOptions::new(),
        )
        .await
    }

    /// Updates a credential.
    pub async fn update_credential(
        &self,
        id: &str,
        body: &CredentialUpdateRequest,
    ) -> Result<Envelope<Credential>> {
        self.send(
            RestMethod::Put,
            &format!("/credentials/{id}"),
            body,
            RequestOptions::new(),
        )
        .await
    }

    /// Deletes a credential.
    pub async fn delete_credential(&self, id: &str, body: &CredentialDeleteRequest) -> Result<()> {
        self.send_empty(
            RestMethod::Delete,
            &format!("/credentials/{id}"),
            body,
            RequestOptions::new(),
        )
        .await
    }

    /// Archives a credential on behalf of `archived_by`.
    pub async fn archive_credential(
        &self,
        id: &str,
        archived_by: &str,
        account_id: Option<&str>,
    ) -> Result<()> {
        let body = CredentialArchiveRequest {
            account_id: None,
            archived_by: archived_by.to_string(),
        };
        self.send_empty(
            RestMethod::Post,
            &format!("/credentials/{id}/archive"),
            &body,
            RequestOptions::new().maybe_account(account_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_options_skip_empty_ordering() {
        let options = ListCredentialsParams::new(20, 40).to_options();
        assert_eq!(options.query.len(), 2);
        assert_eq!(options.query["limit"], "20");
        assert_eq!(options.query["offset"], "40");
        assert_eq!(options.account_id, None);
    }

    #[test]
    fn test_archived_flag_omitted_when_false() {
        let body = CredentialCreateRequest {
            account_id: Some(3),
            archived: false,
            created_by: "ops".to_string(),
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"createdBy": "ops"}));

        let body = CredentialUpdateRequest {
            archived: true,
            modified_by: "ops".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"archived": true, "modifiedBy": "ops"})
        );
    }
}
