//! Response hardening headers.
//!
//! Rendered pages are static markup produced by the HTML shell: no scripts,
//! no inline styles, and no frames. Page bodies may embed remote images from
//! Markdown, and clients may call the JSON APIs on the same origin. The
//! Content-Security-Policy is assembled from exactly those needs.

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::{self, HeaderName};
use tower_http::set_header::SetResponseHeaderLayer;

/// Content-Security-Policy directives for rendered pages.
const CSP_DIRECTIVES: &[(&str, &str)] = &[
    ("default-src", "'self'"),
    ("script-src", "'none'"),
    ("style-src", "'self'"),
    ("img-src", "'self' data: https:"),
    ("connect-src", "'self'"),
    ("base-uri", "'none'"),
    ("form-action", "'none'"),
    ("frame-ancestors", "'none'"),
];

/// Join [`CSP_DIRECTIVES`] into a header value.
fn content_security_policy() -> String {
    CSP_DIRECTIVES
        .iter()
        .map(|(directive, sources)| format!("{directive} {sources}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Header name/value pairs set on every response.
fn security_headers() -> Vec<(HeaderName, HeaderValue)> {
    let mut headers = vec![
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        (
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ),
    ];
    match HeaderValue::from_str(&content_security_policy()) {
        Ok(csp) => headers.push((header::CONTENT_SECURITY_POLICY, csp)),
        Err(err) => tracing::error!(error = %err, "Invalid Content-Security-Policy"),
    }
    headers
}

/// Apply the hardening headers to every route of `router`.
pub(crate) fn with_security_headers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    security_headers()
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(name, value))
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_csp_forbids_scripts_and_framing() {
        let csp = content_security_policy();

        assert!(csp.starts_with("default-src 'self'; "));
        assert!(csp.contains("script-src 'none'"));
        assert!(csp.contains("img-src 'self' data: https:"));
        assert!(csp.ends_with("frame-ancestors 'none'"));
        assert!(!csp.contains("unsafe-inline"));
    }

    #[test]
    fn test_security_headers_include_csp() {
        let names: Vec<HeaderName> = security_headers().into_iter().map(|(n, _)| n).collect();

        assert_eq!(
            names,
            vec![
                header::X_CONTENT_TYPE_OPTIONS,
                header::X_FRAME_OPTIONS,
                header::REFERRER_POLICY,
                header::CONTENT_SECURITY_POLICY,
            ]
        );
    }
}
