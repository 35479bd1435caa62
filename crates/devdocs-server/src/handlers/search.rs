//! Search API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use devdocs_search::SearchResult;
use serde::Deserialize;

use crate::state::AppState;

/// Query parameters for GET /api/search.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchParams {
    /// Search text. Missing means no results.
    query: Option<String>,
}

/// Handle GET /api/search.
pub(crate) async fn get_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<SearchResult>> {
    let query = params.query.unwrap_or_default();
    let results = state.search.search(&query);
    tracing::debug!(query = %query, results = results.len(), "Search");
    Json(results)
}
