//! Feature catalogue.

use serde::{Deserialize, Serialize};

use crate::client::{RequestOptions, Scheduler0Client};
use crate::error::Result;
use crate::method::RestMethod;
use crate::response::Envelope;

/// A feature that can be granted to an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feature {
    pub id: i64,
    pub name: String,
    pub date_created: String,
    pub date_modified: Option<String>,
}

/// Grants or revokes one feature for an account.
///
/// Also returned by the server when a grant succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRequest {
    /// Account the grant belongs to. Sent as `X-Account-ID`, not in the body.
    #[serde(skip)]
    pub account_id: Option<i64>,
    pub feature_id: i64,
}

impl FeatureRequest {
    /// Creates a request for `feature_id`.
    pub fn new(feature_id: i64) -> Self {
        Self {
            account_id: None,
            feature_id,
        }
    }
}

crate::account::account_scoped!(FeatureRequest);

impl Scheduler0Client {
    /// Lists every feature the server knows about.
    pub async fn list_features(&self) -> Result<Envelope<Vec<Feature>>> {
        self.fetch(RestMethod::Get, "/features", RequestOptions::new())
            .await
    }
}
