//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// Docs pages are mounted under `state.base_url`.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/search", get(handlers::search::get_search))
        .route("/api/pages/", get(handlers::pages::get_root_page))
        .route("/api/pages/{*path}", get(handlers::pages::get_page));

    let base = state.base_url.trim_end_matches('/');
    let root = if base.is_empty() { "/" } else { base };
    let doc_routes = Router::new()
        .route(root, get(handlers::docs::get_root_doc))
        .route(&format!("{base}/{{*path}}"), get(handlers::docs::get_doc));

    let router = Router::new().merge(api_routes).merge(doc_routes);
    security::with_security_headers(router)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
