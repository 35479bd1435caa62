//! HTTP request handlers.

pub(crate) mod docs;
pub(crate) mod pages;
pub(crate) mod search;

use axum::http::{HeaderMap, header};
use md5::{Digest, Md5};

/// Split a captured wildcard path into slug segments.
///
/// Empty segments (from trailing or doubled slashes) are dropped.
pub(crate) fn slug_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Compute `ETag` from version and content.
///
/// MD5 truncated to 64 bits (16 hex chars).
pub(crate) fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

/// Whether the request's `If-None-Match` header matches `etag`.
pub(crate) fn is_not_modified(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get(header::IF_NONE_MATCH)
        .is_some_and(|value| value.as_bytes() == etag.as_bytes())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_slug_segments() {
        assert_eq!(slug_segments("guides/install"), vec!["guides", "install"]);
        assert_eq!(slug_segments("guides/"), vec!["guides"]);
        assert_eq!(slug_segments("a//b"), vec!["a", "b"]);
        assert!(slug_segments("").is_empty());
    }

    #[test]
    fn test_compute_etag_includes_version() {
        assert_ne!(compute_etag("1.0.0", "content"), compute_etag("1.0.1", "content"));
    }

    #[test]
    fn test_compute_etag_includes_content() {
        assert_ne!(compute_etag("1.0.0", "content1"), compute_etag("1.0.0", "content2"));
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", "content");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        // 16 hex chars + 2 quotes
        assert_eq!(etag.len(), 18);
    }

    #[test]
    fn test_is_not_modified() {
        let etag = compute_etag("1", "x");
        let mut headers = HeaderMap::new();
        assert!(!is_not_modified(&headers, &etag));

        headers.insert(header::IF_NONE_MATCH, HeaderValue::from_str(&etag).unwrap());
        assert!(is_not_modified(&headers, &etag));

        headers.insert(header::IF_NONE_MATCH, HeaderValue::from_static("\"other\""));
        assert!(!is_not_modified(&headers, &etag));
    }
}
