//! Rendered documentation pages.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use devdocs_site::{PageMetadata, render_document};

use crate::error::ServerError;
use crate::handlers::{compute_etag, is_not_modified, slug_segments};
use crate::state::AppState;

/// Handle GET on the docs root.
pub(crate) async fn get_root_doc(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    render_doc(&[], &state, &headers)
}

/// Handle GET on a docs page.
pub(crate) async fn get_doc(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    render_doc(&slug_segments(&path), &state, &headers)
}

fn render_doc(
    slugs: &[String],
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Response, ServerError> {
    let page = state.site.resolve(Some(slugs))?;
    let html = render_document(&PageMetadata::from(page), &state.renderer.render(page));

    let etag = compute_etag(&state.version, &html);
    if is_not_modified(headers, &etag) {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "public, max-age=60".to_owned()),
        ],
        Html(html),
    )
        .into_response())
}
