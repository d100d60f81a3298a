//! Absolute URL composition for versioned API endpoints.
//!
//! Every Scheduler0 call lives under `<base-path>/api/<version>/<endpoint>`.
//! Segments are joined with path-join semantics: empty segments (from
//! duplicate or leading slashes) and `.` are dropped and `..` removes the
//! previous segment, so `"/jobs"` and `"jobs"` compose to the same URL.

use std::collections::BTreeMap;

use url::Url;

/// Query parameters for a request, keyed by parameter name.
pub type QueryParams = BTreeMap<String, String>;

/// Fixed path segment between the base path and the API version.
const API_PREFIX: &str = "api";

/// Composes the absolute URL for `endpoint` under `base` and `version`.
///
/// Any query string or fragment already present on `base` is discarded.
/// When `query` is given and non-empty its pairs are form-encoded into the
/// query string.
///
/// ## Examples
///
/// ```rust
/// use scheduler0_api::endpoint::compose_url;
/// use url::Url;
///
/// let base = Url::parse("https://x.test/").unwrap();
/// let url = compose_url(&base, "v1", "/jobs", None);
/// assert_eq!(url.as_str(), "https://x.test/api/v1/jobs");
/// ```
pub fn compose_url(base: &Url, version: &str, endpoint: &str, query: Option<&QueryParams>) -> Url {
    let mut segments: Vec<&str> = Vec::new();
    let raw = base
        .path()
        .split('/')
        .chain([API_PREFIX])
        .chain(version.split('/'))
        .chain(endpoint.split('/'));

    for segment in raw {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut url = base.clone();
    url.set_path(&format!("/{}", segments.join("/")));
    url.set_query(None);
    url.set_fragment(None);

    if let Some(query) = query.filter(|q| !q.is_empty()) {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_leading_slash_is_irrelevant() {
        let b = base("https://x.test/");
        let with = compose_url(&b, "v1", "/jobs", None);
        let without = compose_url(&b, "v1", "jobs", None);
        assert_eq!(with, without);
        assert_eq!(with.as_str(), "https://x.test/api/v1/jobs");
    }

    #[test]
    fn test_base_path_is_kept() {
        let b = base("https://x.test/scheduler/");
        let url = compose_url(&b, "v1", "/projects/7", None);
        assert_eq!(url.path(), "/scheduler/api/v1/projects/7");
    }

    #[test]
    fn test_duplicate_slashes_collapse() {
        let b = base("https://x.test//root//");
        let url = compose_url(&b, "v1", "//accounts//12/", None);
        assert_eq!(url.path(), "/root/api/v1/accounts/12");
    }

    #[test]
    fn test_dot_segments_resolve() {
        let b = base("https://x.test/");
        let url = compose_url(&b, "v1", "/jobs/./../projects", None);
        assert_eq!(url.path(), "/api/v1/projects");
    }

    #[test]
    fn test_query_round_trip() {
        let b = base("https://x.test/");
        let mut query = QueryParams::new();
        query.insert("limit".to_string(), "10".to_string());
        query.insert("offset".to_string(), "0".to_string());

        let url = compose_url(&b, "v1", "/jobs", Some(&query));
        let parsed: QueryParams = url.query_pairs().into_owned().collect();
        assert_eq!(parsed, query);
    }

    #[test]
    fn test_query_values_are_encoded() {
        let b = base("https://x.test/");
        let mut query = QueryParams::new();
        query.insert("startDate".to_string(), "2025-01-01 00:00&x".to_string());

        let url = compose_url(&b, "v1", "/executions", Some(&query));
        assert_eq!(url.query(), Some("startDate=2025-01-01+00%3A00%26x"));
        let (_, value) = url.query_pairs().next().unwrap();
        assert_eq!(value, "2025-01-01 00:00&x");
    }

    #[test]
    fn test_base_query_is_replaced() {
        let b = base("https://x.test/?token=abc#frag");
        let mut query = QueryParams::new();
        query.insert("limit".to_string(), "5".to_string());

        let url = compose_url(&b, "v1", "/jobs", Some(&query));
        assert_eq!(url.as_str(), "https://x.test/api/v1/jobs?limit=5");
    }

    #[test]
    fn test_empty_query_leaves_no_question_mark() {
        let b = base("https://x.test/?stale=1");
        let url = compose_url(&b, "v1", "/jobs", Some(&QueryParams::new()));
        assert_eq!(url.query(), None);
        assert_eq!(url.as_str(), "https://x.test/api/v1/jobs");
    }

    #[test]
    fn test_port_and_host_preserved() {
        let b = base("http://127.0.0.1:7070");
        let url = compose_url(&b, "v2", "healthcheck", None);
        assert_eq!(url.as_str(), "http://127.0.0.1:7070/api/v2/healthcheck");
    }
}
