//! The page source: every documentation page, indexed by slug path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::loader;
use crate::page::Page;

/// Error returned while building a [`Source`].
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Content root does not exist or is not a directory.
    #[error("Content directory not found: {}", .0.display())]
    MissingRoot(PathBuf),
    /// Content file could not be read.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Directory walk failed.
    #[error("Failed to walk content directory: {0}")]
    Walk(#[from] ignore::Error),
    /// Frontmatter is not valid YAML.
    #[error("Invalid frontmatter in {path}: {message}")]
    Frontmatter {
        /// Content-relative file path.
        path: String,
        /// Parser message.
        message: String,
    },
    /// Two files map to the same slug path (e.g. `a.md` and `a/index.md`).
    #[error("Duplicate slug path /{slugs}: {first} and {second}")]
    DuplicateSlugs {
        /// Joined slug path.
        slugs: String,
        /// File of the page seen first.
        first: String,
        /// File of the conflicting page.
        second: String,
    },
    /// Two pages share a URL.
    #[error("Duplicate page url {url}: {first} and {second}")]
    DuplicateUrl {
        /// Conflicting URL.
        url: String,
        /// File of the page seen first.
        first: String,
        /// File of the conflicting page.
        second: String,
    },
}

/// Read-only collection of all documentation pages.
///
/// Built once and shared behind an `Arc`; nothing mutates it afterwards.
/// Page order is the load order and is preserved by [`Source::pages`].
#[derive(Debug, Default)]
pub struct Source {
    pages: Vec<Page>,
    slug_index: HashMap<Vec<String>, usize>,
}

impl Source {
    /// Build a source from in-memory pages.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::DuplicateSlugs`] or [`SourceError::DuplicateUrl`]
    /// if two pages collide.
    pub fn from_pages(pages: Vec<Page>) -> Result<Self, SourceError> {
        let mut slug_index = HashMap::with_capacity(pages.len());
        let mut url_index: HashMap<&str, usize> = HashMap::with_capacity(pages.len());

        for (i, page) in pages.iter().enumerate() {
            if let Some(&first) = slug_index.get(&page.slugs) {
                let first: &Page = &pages[first];
                return Err(SourceError::DuplicateSlugs {
                    slugs: page.slugs.join("/"),
                    first: first.file.path.clone(),
                    second: page.file.path.clone(),
                });
            }
            if let Some(&first) = url_index.get(page.url.as_str()) {
                let first: &Page = &pages[first];
                return Err(SourceError::DuplicateUrl {
                    url: page.url.clone(),
                    first: first.file.path.clone(),
                    second: page.file.path.clone(),
                });
            }
            slug_index.insert(page.slugs.clone(), i);
            url_index.insert(page.url.as_str(), i);
        }

        Ok(Self { pages, slug_index })
    }

    /// Load every `.md`/`.mdx` document under `source_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is missing, a file cannot be read,
    /// frontmatter is malformed, or two files produce the same slug path.
    pub fn load(source_dir: &Path, base_url: &str) -> Result<Self, SourceError> {
        let pages = loader::load_pages(source_dir, base_url)?;
        let source = Self::from_pages(pages)?;
        tracing::info!(
            pages = source.len(),
            dir = %source_dir.display(),
            "Loaded content"
        );
        Ok(source)
    }

    /// All pages, in load order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Look up the page whose slugs equal `slugs` exactly.
    ///
    /// `None` and an empty slice both address the root page.
    #[must_use]
    pub fn page<S: AsRef<str>>(&self, slugs: Option<&[S]>) -> Option<&Page> {
        let key: Vec<String> = slugs
            .unwrap_or_default()
            .iter()
            .map(|s| s.as_ref().to_owned())
            .collect();
        self.slug_index.get(&key).map(|&i| &self.pages[i])
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the source has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::page::PageData;

    fn page(slugs: &[&str], file: &str, title: &str) -> Page {
        Page::new(
            "/docs",
            slugs.iter().map(|s| (*s).to_owned()).collect(),
            file,
            PageData::new(title),
        )
    }

    #[test]
    fn test_lookup_exact_match() {
        let source = Source::from_pages(vec![
            page(&["guides"], "guides/index.mdx", "Guides"),
            page(&["guides", "install"], "guides/install.mdx", "Install"),
        ])
        .unwrap();

        let found = source.page(Some(&["guides", "install"][..])).unwrap();
        assert_eq!(found.url, "/docs/guides/install");
    }

    #[test]
    fn test_lookup_is_order_sensitive() {
        let source =
            Source::from_pages(vec![page(&["a", "b"], "a/b.md", "B")]).unwrap();

        assert!(source.page(Some(&["b", "a"][..])).is_none());
    }

    #[test]
    fn test_lookup_no_prefix_match() {
        let source =
            Source::from_pages(vec![page(&["guides", "install"], "guides/install.md", "I")])
                .unwrap();

        assert!(source.page(Some(&["guides"][..])).is_none());
        assert!(
            source
                .page(Some(&["guides", "install", "extra"][..]))
                .is_none()
        );
    }

    #[test]
    fn test_lookup_root_absent_or_empty() {
        let source = Source::from_pages(vec![page(&[], "index.mdx", "Home")]).unwrap();

        assert_eq!(source.page::<&str>(None).unwrap().data.title, "Home");
        assert_eq!(source.page::<String>(Some(&[][..])).unwrap().data.title, "Home");
    }

    #[test]
    fn test_duplicate_slugs_rejected() {
        let err = Source::from_pages(vec![
            page(&["a"], "a.md", "A"),
            page(&["a"], "a/index.md", "A again"),
        ])
        .unwrap_err();

        assert!(matches!(err, SourceError::DuplicateSlugs { .. }));
        assert!(err.to_string().contains("a.md"));
        assert!(err.to_string().contains("a/index.md"));
    }

    #[test]
    fn test_duplicate_url_rejected() {
        let mut second = page(&["b"], "b.md", "B");
        second.url = "/docs/a".to_owned();
        let err = Source::from_pages(vec![page(&["a"], "a.md", "A"), second]).unwrap_err();

        assert!(matches!(err, SourceError::DuplicateUrl { .. }));
    }

    #[test]
    fn test_pages_preserve_order() {
        let source = Source::from_pages(vec![
            page(&["z"], "z.md", "Z"),
            page(&["a"], "a.md", "A"),
        ])
        .unwrap();

        let titles: Vec<&str> = source.pages().iter().map(|p| p.data.title.as_str()).collect();
        assert_eq!(titles, vec!["Z", "A"]);
        assert_eq!(source.len(), 2);
        assert!(!source.is_empty());
    }
}
