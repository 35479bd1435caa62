//! Application state.
//!
//! Shared state for all request handlers.

use devdocs_search::SearchApi;
use devdocs_site::{PageRenderer, Site};

/// Application state shared across all handlers.
///
/// Built once at startup; never mutated afterwards.
pub struct AppState {
    /// Page resolver over the loaded content.
    pub site: Site,
    /// Page shell renderer.
    pub renderer: PageRenderer,
    /// Search handler over the page index.
    pub search: SearchApi,
    /// URL prefix of documentation pages.
    pub base_url: String,
    /// Application version for `ETag` invalidation.
    pub version: String,
}
