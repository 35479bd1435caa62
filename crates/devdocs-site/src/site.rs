//! Page resolution.
//!
//! [`Site`] answers the three questions a router asks about the content
//! tree: which page a slug path names, which slug paths exist at all, and
//! what metadata a page exposes. The route set is closed: a slug path that
//! the source does not know is [`SiteError::PageNotFound`], never rendered
//! on demand. Directory paths without an explicit index page are not found
//! either; there is no redirect to a child page.

use std::sync::Arc;

use devdocs_source::{Page, Source};
use serde::Serialize;

/// Error returned by page resolution.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SiteError {
    /// No page has the requested slug path.
    #[error("Page not found: /{0}")]
    PageNotFound(String),
}

/// Title and description exposed to the document head.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    /// Page title.
    pub title: String,
    /// Page description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Page> for PageMetadata {
    fn from(page: &Page) -> Self {
        Self {
            title: page.data.title.clone(),
            description: page.data.description.clone(),
        }
    }
}

/// Resolver over a shared, immutable page source.
#[derive(Clone, Debug)]
pub struct Site {
    source: Arc<Source>,
}

impl Site {
    /// Create a resolver over `source`.
    #[must_use]
    pub fn new(source: Arc<Source>) -> Self {
        Self { source }
    }

    /// The underlying page source.
    #[must_use]
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Find the page whose slugs equal `slug_path` exactly.
    ///
    /// `None` and an empty path both address the root page.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::PageNotFound`] if no page matches.
    pub fn resolve<S: AsRef<str>>(&self, slug_path: Option<&[S]>) -> Result<&Page, SiteError> {
        self.source
            .page(slug_path)
            .ok_or_else(|| not_found(slug_path))
    }

    /// Every routable slug path, one per page, in page order.
    #[must_use]
    pub fn list_all_slug_paths(&self) -> Vec<Vec<String>> {
        self.source
            .pages()
            .iter()
            .map(|page| page.slugs.clone())
            .collect()
    }

    /// Title and description of the page at `slug_path`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::PageNotFound`] if no page matches.
    pub fn metadata_for<S: AsRef<str>>(
        &self,
        slug_path: Option<&[S]>,
    ) -> Result<PageMetadata, SiteError> {
        self.resolve(slug_path).map(PageMetadata::from)
    }
}

fn not_found<S: AsRef<str>>(slug_path: Option<&[S]>) -> SiteError {
    let joined = slug_path
        .unwrap_or_default()
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join("/");
    SiteError::PageNotFound(joined)
}
