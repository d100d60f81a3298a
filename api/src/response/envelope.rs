//! The `{success, data}` wrapper used by every Scheduler0 response.

use serde::{Deserialize, Deserializer, Serialize};

/// Single-payload response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the server reports the call as successful.
    pub success: bool,
    /// The call-specific payload.
    pub data: T,
}

impl<T> Envelope<T> {
    /// Discards the wrapper and returns the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// One page of a collection endpoint.
///
/// The server names the item array after the resource (`jobs`,
/// `projects`, ...); every known name is accepted and exposed as `items`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Total number of matching items on the server.
    pub total: i64,
    /// Offset of the first item in this page.
    pub offset: i64,
    /// Page size requested.
    pub limit: i64,
    /// Items in this page.
    #[serde(
        alias = "credentials",
        alias = "executions",
        alias = "executors",
        alias = "jobs",
        alias = "projects",
        default = "Vec::new",
        deserialize_with = "nullable_vec"
    )]
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Returns `true` if another page follows this one.
    pub fn has_more(&self) -> bool {
        self.offset + (self.items.len() as i64) < self.total
    }

    /// Offset to request for the following page.
    pub fn next_offset(&self) -> i64 {
        self.offset + self.items.len() as i64
    }
}

/// Decodes a JSON array that the server may send as `null` when empty.
pub(crate) fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
