//! Static site export.
//!
//! Writes every routable page as `<out_dir>/<url>/index.html` and the search
//! entries as `<out_dir>/api/search-index.json`, so the output can be served
//! by any static file host.

use std::fs;
use std::path::{Path, PathBuf};

use devdocs_search::IndexEntry;

use crate::html::render_document;
use crate::renderer::PageRenderer;
use crate::site::{PageMetadata, Site, SiteError};

/// Relative location of the exported search index.
pub const SEARCH_INDEX_PATH: &str = "api/search-index.json";

/// Error returned by [`export_site`].
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Filesystem write failed.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Path being written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Search index serialization failed.
    #[error("Failed to serialize search index: {0}")]
    Json(#[from] serde_json::Error),
    /// A listed slug path did not resolve.
    #[error(transparent)]
    Site(#[from] SiteError),
}

/// Outcome of a successful export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of pages written.
    pub pages: usize,
    /// Output directory.
    pub out_dir: PathBuf,
}

/// Render every page of `site` and the search index into `out_dir`.
///
/// # Errors
///
/// Returns [`ExportError`] if a file cannot be written or the index cannot
/// be serialized.
pub fn export_site(
    site: &Site,
    renderer: &PageRenderer,
    indexes: &[IndexEntry],
    out_dir: &Path,
) -> Result<ExportSummary, ExportError> {
    let slug_paths = site.list_all_slug_paths();

    for slugs in &slug_paths {
        let page = site.resolve(Some(slugs.as_slice()))?;
        let html = render_document(&PageMetadata::from(page), &renderer.render(page));
        let target = page_output_path(out_dir, &page.url);
        write_file(&target, html.as_bytes())?;
        tracing::debug!(url = %page.url, path = %target.display(), "Exported page");
    }

    let json = serde_json::to_vec(indexes)?;
    write_file(&out_dir.join(SEARCH_INDEX_PATH), &json)?;

    tracing::info!(
        pages = slug_paths.len(),
        out_dir = %out_dir.display(),
        "Exported site"
    );

    Ok(ExportSummary {
        pages: slug_paths.len(),
        out_dir: out_dir.to_path_buf(),
    })
}

/// Map a page URL to its `index.html` under `out_dir`.
fn page_output_path(out_dir: &Path, url: &str) -> PathBuf {
    let mut path = out_dir.to_path_buf();
    for segment in url.split('/').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push("index.html");
    path
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use devdocs_search::build_indexes;
    use devdocs_source::{Page, PageData, Source};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn site() -> Site {
        let pages = vec![
            Page::new("/docs", Vec::new(), "index.mdx", PageData::new("Home")),
            Page::new(
                "/docs",
                vec!["guides".to_owned(), "install".to_owned()],
                "guides/install.mdx",
                PageData::new("Install"),
            ),
        ];
        Site::new(Arc::new(Source::from_pages(pages).unwrap()))
    }

    #[test]
    fn test_export_writes_pages_and_index() {
        let temp = TempDir::new().unwrap();
        let site = site();
        let indexes = build_indexes(site.source().pages());

        let summary =
            export_site(&site, &PageRenderer::default(), &indexes, temp.path()).unwrap();

        assert_eq!(summary.pages, 2);
        let home = fs::read_to_string(temp.path().join("docs/index.html")).unwrap();
        assert!(home.contains("<title>Home</title>"));
        let install =
            fs::read_to_string(temp.path().join("docs/guides/install/index.html")).unwrap();
        assert!(install.contains("content/docs/guides/install.mdx"));

        let json = fs::read_to_string(temp.path().join(SEARCH_INDEX_PATH)).unwrap();
        let entries: Vec<IndexEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(entries, indexes);
    }

    #[test]
    fn test_page_output_path() {
        let out = Path::new("/out");

        assert_eq!(
            page_output_path(out, "/docs/a/b"),
            PathBuf::from("/out/docs/a/b/index.html")
        );
        assert_eq!(page_output_path(out, "/"), PathBuf::from("/out/index.html"));
    }

    #[test]
    fn test_export_into_unwritable_target() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = export_site(&site(), &PageRenderer::default(), &[], &blocker).unwrap_err();

        assert!(matches!(err, ExportError::Io { .. }));
    }
}
