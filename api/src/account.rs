//! Account-id resolution for outgoing requests.
//!
//! Most Scheduler0 endpoints are scoped to an account through the
//! `X-Account-ID` header. The value is chosen by precedence:
//!
//! 1. an explicit per-call override, when non-empty
//! 2. an account id carried by the request body, when present
//! 3. the client's default account id
//!
//! When all three are empty the header is omitted.
//!
//! Request bodies expose their account id through the [`AccountScoped`]
//! capability instead of being inspected at runtime. Batch bodies (slices and
//! vectors) yield the first element that carries an id.

use serde_json::Value;
use strum::Display;

/// Header carrying the resolved account id.
pub const ACCOUNT_ID_HEADER: &str = "X-Account-ID";

/// JSON key scanned in untyped (`serde_json::Value`) bodies.
pub const ACCOUNT_ID_FIELD: &str = "accountId";

/// A request body that may name the account it belongs to.
///
/// The default implementation reports no account id, so body types without
/// such a field implement the trait with an empty `impl` block.
///
/// ## Examples
///
/// ```rust
/// use scheduler0_api::account::{AccountScoped, numeric_account_id};
///
/// struct Body {
///     account_id: Option<i64>,
/// }
///
/// impl AccountScoped for Body {
///     fn account_id(&self) -> Option<String> {
///         numeric_account_id(self.account_id)
///     }
/// }
///
/// let batch = vec![Body { account_id: Some(0) }, Body { account_id: Some(9) }];
/// assert_eq!(batch.account_id().as_deref(), Some("9"));
/// ```
pub trait AccountScoped {
    /// Returns the account id carried by this value, if any.
    fn account_id(&self) -> Option<String> {
        None
    }
}

/// Normalizes a numeric account id; `None` and `0` are absent.
pub fn numeric_account_id(id: Option<i64>) -> Option<String> {
    id.filter(|id| *id != 0).map(|id| id.to_string())
}

/// Normalizes a textual account id; `None` and `""` are absent.
pub fn text_account_id(id: Option<&str>) -> Option<String> {
    id.filter(|id| !id.is_empty()).map(str::to_string)
}

impl AccountScoped for () {}

impl AccountScoped for str {}

impl AccountScoped for String {}

impl<T: AccountScoped + ?Sized> AccountScoped for &T {
    fn account_id(&self) -> Option<String> {
        (**self).account_id()
    }
}

impl<T: AccountScoped + ?Sized> AccountScoped for Box<T> {
    fn account_id(&self) -> Option<String> {
        (**self).account_id()
    }
}

impl<T: AccountScoped> AccountScoped for Option<T> {
    fn account_id(&self) -> Option<String> {
        self.as_ref().and_then(T::account_id)
    }
}

impl<T: AccountScoped> AccountScoped for [T] {
    fn account_id(&self) -> Option<String> {
        self.iter().find_map(T::account_id)
    }
}

impl<T: AccountScoped> AccountScoped for Vec<T> {
    fn account_id(&self) -> Option<String> {
        self.as_slice().account_id()
    }
}

impl AccountScoped for Value {
    /// Reads a top-level `"accountId"` key of an object, or of the first
    /// array element that has one. Strings must be non-empty and numbers
    /// non-zero.
    fn account_id(&self) -> Option<String> {
        match self {
            Value::Object(map) => match map.get(ACCOUNT_ID_FIELD)? {
                Value::String(s) => text_account_id(Some(s)),
                Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
                _ => None,
            },
            Value::Array(items) => items.iter().find_map(Value::account_id),
            _ => None,
        }
    }
}

/// Implements [`AccountScoped`] for body types holding an
/// `account_id: Option<i64>` field.
macro_rules! account_scoped {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::account::AccountScoped for $ty {
                fn account_id(&self) -> Option<String> {
                    $crate::account::numeric_account_id(self.account_id)
                }
            }
        )+
    };
}

pub(crate) use account_scoped;

/// Which precedence rule produced a resolved account id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum AccountIdSource {
    /// Per-call override.
    Override,
    /// Field carried by the request body.
    Body,
    /// The client's configured default.
    ClientDefault,
}

/// An account id chosen for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAccountId {
    /// The value sent in `X-Account-ID`.
    pub value: String,
    /// The rule that selected it.
    pub source: AccountIdSource,
}

/// Resolves the account id for a request.
///
/// Returns `None` when the override, the body, and the client default are
/// all empty, meaning no `X-Account-ID` header is sent.
pub fn resolve_account_id<B>(
    override_id: Option<&str>,
    body: Option<&B>,
    client_default: Option<&str>,
) -> Option<ResolvedAccountId>
where
    B: AccountScoped + ?Sized,
{
    let resolved = |value: String, source| ResolvedAccountId { value, source };

    if let Some(value) = text_account_id(override_id) {
        return Some(resolved(value, AccountIdSource::Override));
    }
    if let Some(value) = body.and_then(AccountScoped::account_id) {
        return Some(resolved(value, AccountIdSource::Body));
    }
    text_account_id(client_default).map(|value| resolved(value, AccountIdSource::ClientDefault))
}
