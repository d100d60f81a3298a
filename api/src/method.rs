//! HTTP verbs used by the Scheduler0 API.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods accepted by the Scheduler0 API.
///
/// The service only routes these four verbs; everything else is rejected
/// before a request is ever built.
///
/// ## Examples
///
/// ```rust
/// use scheduler0_api::RestMethod;
///
/// let method: RestMethod = "PUT".parse().unwrap();
/// assert_eq!(method, RestMethod::Put);
/// assert!(method.has_body());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// Read a resource or collection.
    Get,
    /// Create a resource or trigger a cluster action.
    Post,
    /// Update a resource.
    Put,
    /// Remove a resource. The API expects an audit body (`deletedBy`) here.
    Delete,
}

impl RestMethod {
    /// Returns `true` if requests with this method may carry a JSON body.
    ///
    /// `DELETE` is included because every delete endpoint takes a body naming
    /// the actor performing the deletion.
    pub fn has_body(&self) -> bool {
        !matches!(self, Self::Get)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
