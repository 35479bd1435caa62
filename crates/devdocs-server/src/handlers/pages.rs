//! Pages API endpoint.
//!
//! Returns the page shell and head metadata as JSON, for clients that render
//! the layout themselves.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use devdocs_site::{PageMetadata, PageShell};
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::{compute_etag, is_not_modified, slug_segments};
use crate::state::AppState;

/// Response for GET /api/pages/{path}.
#[derive(Serialize)]
struct PageResponse {
    /// Canonical page URL.
    url: String,
    /// Head metadata.
    meta: PageMetadata,
    /// Page shell.
    page: PageShell,
}

/// Handle GET /api/pages/ (root page).
pub(crate) async fn get_root_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    get_page_impl(&[], &state, &headers)
}

/// Handle GET /api/pages/{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    get_page_impl(&slug_segments(&path), &state, &headers)
}

fn get_page_impl(
    slugs: &[String],
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Response, ServerError> {
    let page = state.site.resolve(Some(slugs))?;
    let response = PageResponse {
        url: page.url.clone(),
        meta: PageMetadata::from(page),
        page: state.renderer.render(page),
    };
    let json = serde_json::to_string(&response)?;

    let etag = compute_etag(&state.version, &json);
    if is_not_modified(headers, &etag) {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
            (header::CONTENT_TYPE, "application/json".to_owned()),
        ],
        json,
    )
        .into_response())
}
