//! Accounts, their execution quota and feature grants.
//!
//! Every per-account call scopes itself to the account in its path by
//! sending the same id as the `X-Account-ID` override.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::features::FeatureRequest;
use crate::account::AccountScoped;
use crate::client::{RequestOptions, Scheduler0Client};
use crate::error::Result;
use crate::method::RestMethod;
use crate::response::{nullable_vec, Envelope};

/// A tenant account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "nullable_vec")]
    pub features: Vec<AccountFeature>,
    pub date_created: String,
    pub date_modified: Option<String>,
}

/// A feature granted to an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountFeature {
    pub account_id: i64,
    pub feature_id: i64,
    pub feature: String,
}

/// Body of [`Scheduler0Client::create_account`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccountCreateRequest {
    pub name: String,
}

impl AccountCreateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl AccountScoped for AccountCreateRequest {}

/// Body of [`Scheduler0Client::increase_account_execution_count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct ExecutionCountIncrease {
    count: u64,
}

impl AccountScoped for ExecutionCountIncrease {}

impl Scheduler0Client {
    /// Creates an account.
    pub async fn create_account(
        &self,
        body: &AccountCreateRequest,
    ) -> Result<Envelope<Account>> {
        self.send(RestMethod::Post, "/accounts", body, RequestOptions::new())
            .await
    }

    /// Fetches an account by id.
    pub async fn get_account(&self, id: &str) -> Result<Envelope<Account>> {
        self.fetch(RestMethod::Get, &format!("/accounts/{id}"), RequestOptions::new())
            .await
    }

    /// Reads the execution counter of an account.
    ///
    /// The payload shape is owned by the server and returned untyped.
    pub async fn get_account_execution_count(&self, account_id: &str) -> Result<Envelope<Value>> {
        self.fetch(
            RestMethod::Get,
            &format!("/accounts/{account_id}/execution-count"),
            RequestOptions::new().account(account_id),
        )
        .await
    }

    /// Raises the execution counter of an account by `count`.
    pub async fn increase_account_execution_count(
        &self,
        account_id: &str,
        count: u64,
    ) -> Result<Envelope<Value>> {
        self.send(
            RestMethod::Put,
            &format!("/accounts/{account_id}/execution-count"),
            &ExecutionCountIncrease { count },
            RequestOptions::new().account(account_id),
        )
        .await
    }

    /// Grants one feature to an account.
    pub async fn add_feature_to_account(
        &self,
        account_id: &str,
        body: &FeatureRequest,
    ) -> Result<Envelope<FeatureRequest>> {
        self.send(
            RestMethod::Put,
            &format!("/accounts/{account_id}/feature"),
            body,
            RequestOptions::new().account(account_id),
        )
        .await
    }

    /// Revokes one feature from an account.
    pub async fn remove_feature_from_account(
        &self,
        account_id: &str,
        body: &FeatureRequest,
    ) -> Result<()> {
        self.send_empty(
            RestMethod::Delete,
            &format!("/accounts/{account_id}/feature"),
            body,
            RequestOptions::new().account(account_id),
        )
        .await
    }

    /// Grants every known feature to an account.
    pub async fn add_all_features_to_account(&self, account_id: &str) -> Result<()> {
        self.fetch_empty(
            RestMethod::Put,
            &format!("/accounts/{account_id}/features/all"),
            RequestOptions::new().account(account_id),
        )
        .await
    }

    /// Revokes every feature from an account.
    pub async fn remove_all_features_from_account(&self, account_id: &str) -> Result<()> {
        self.fetch_empty(
            RestMethod::Delete,
            &format!("/accounts/{account_id}/features/all"),
            RequestOptions::new().account(account_id),
        )
        .await
    }
}
