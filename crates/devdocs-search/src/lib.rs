//! Search index building and query serving for devdocs.
//!
//! Two steps, both run once at startup:
//! - [`build_indexes`] derives one [`IndexEntry`] per page (`id` = page URL)
//! - [`create_search_api`] wraps the entries in a [`SearchApi`] handler
//!
//! The index is never updated in place; a fresh index means a fresh process.
//!
//! # Example
//!
//! ```
//! use devdocs_search::{SearchMode, build_indexes, create_search_api};
//! use devdocs_source::{Page, PageData};
//!
//! let pages = vec![Page::new("/docs", vec!["intro".to_owned()], "intro.mdx", PageData::new("Intro"))];
//! let api = create_search_api(SearchMode::Advanced, build_indexes(&pages));
//!
//! let results = api.search("intro");
//! assert_eq!(results[0].url, "/docs/intro");
//! ```

mod api;
mod index;

pub use api::{DEFAULT_LIMIT, ResultKind, SearchApi, SearchMode, SearchResult, create_search_api};
pub use index::{IndexEntry, build_indexes};
