//! Page data model.
//!
//! A [`Page`] is one document of the content tree: its routed URL, the slug
//! path that identifies it, display metadata, and the compiled exports
//! (body, table of contents, structured data for search).

use serde::{Deserialize, Serialize};

/// One documentation document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Canonical site-relative URL (e.g. "/docs/guides/install").
    pub url: String,
    /// Path segments identifying the page in the content tree.
    pub slugs: Vec<String>,
    /// Display metadata and compiled exports.
    pub data: PageData,
    /// Source file information.
    pub file: FileInfo,
}

impl Page {
    /// Create a page, deriving its URL from `base_url` and `slugs`.
    #[must_use]
    pub fn new(
        base_url: &str,
        slugs: Vec<String>,
        file_path: impl Into<String>,
        data: PageData,
    ) -> Self {
        Self {
            url: url_for(base_url, &slugs),
            slugs,
            data,
            file: FileInfo {
                path: file_path.into(),
            },
        }
    }
}

/// Source file information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    /// Path relative to the content root, `/`-separated (e.g. "guides/install.mdx").
    pub path: String,
}

/// Page metadata and compiled exports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageData {
    /// Display title.
    pub title: String,
    /// Optional summary shown under the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Full-width layout (no table of contents column).
    pub full: bool,
    /// Compiled document exports.
    pub exports: PageExports,
}

impl PageData {
    /// Create page data with a title and empty exports.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            full: false,
            exports: PageExports::default(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the full-width layout flag.
    #[must_use]
    pub fn with_full(mut self, full: bool) -> Self {
        self.full = full;
        self
    }

    /// Set the compiled exports.
    #[must_use]
    pub fn with_exports(mut self, exports: PageExports) -> Self {
        self.exports = exports;
        self
    }
}

/// What a compiled document exports.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageExports {
    /// The renderable content (the document's default export).
    #[serde(rename = "default")]
    pub body: CompiledBody,
    /// Table of contents (H2 and deeper).
    pub toc: Vec<TocItem>,
    /// Search payload. Absent for pages that were not structured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<StructuredData>,
}

/// Compiled document body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompiledBody(String);

impl CompiledBody {
    /// Wrap already-rendered HTML.
    #[must_use]
    pub fn from_html(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Produce the body markup.
    #[must_use]
    pub fn render(&self) -> &str {
        &self.0
    }
}

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
    /// Heading text.
    pub title: String,
    /// Fragment link to the heading (e.g. "#installation").
    pub url: String,
    /// Heading level (2-6).
    pub depth: u8,
}

/// Search payload extracted from a document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredData {
    /// Every heading of the document, in order.
    pub headings: Vec<StructuredHeading>,
    /// Text blocks, each attached to the closest preceding heading.
    pub contents: Vec<StructuredContent>,
}

/// Heading entry of [`StructuredData`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredHeading {
    /// Anchor id.
    pub id: String,
    /// Heading text.
    pub content: String,
}

/// Text block entry of [`StructuredData`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredContent {
    /// Anchor id of the enclosing heading; `None` before the first heading.
    pub heading: Option<String>,
    /// Plain text of the block.
    pub content: String,
}

/// Build the URL of a page from the base URL and its slugs.
///
/// The root page (no slugs) lives at the base URL itself.
///
/// ```
/// use devdocs_source::url_for;
///
/// assert_eq!(url_for("/docs", &[]), "/docs");
/// assert_eq!(url_for("/docs", &["guides".to_owned(), "install".to_owned()]), "/docs/guides/install");
/// assert_eq!(url_for("/", &["intro".to_owned()]), "/intro");
/// ```
#[must_use]
pub fn url_for(base_url: &str, slugs: &[String]) -> String {
    let base = base_url.trim_end_matches('/');
    if slugs.is_empty() {
        if base.is_empty() {
            "/".to_owned()
        } else {
            base.to_owned()
        }
    } else {
        format!("{base}/{}", slugs.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn slugs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_url_for_root() {
        assert_eq!(url_for("/docs", &[]), "/docs");
        assert_eq!(url_for("/", &[]), "/");
    }

    #[test]
    fn test_url_for_nested() {
        assert_eq!(url_for("/docs", &slugs(&["a", "b"])), "/docs/a/b");
        assert_eq!(url_for("/", &slugs(&["a"])), "/a");
    }

    #[test]
    fn test_page_new_derives_url() {
        let page = Page::new("/docs", slugs(&["intro"]), "intro.mdx", PageData::new("Intro"));
        assert_eq!(page.url, "/docs/intro");
        assert_eq!(page.file.path, "intro.mdx");
        assert_eq!(page.data.title, "Intro");
        assert!(!page.data.full);
    }

    #[test]
    fn test_exports_serialization() {
        let exports = PageExports {
            body: CompiledBody::from_html("<p>Hi</p>"),
            toc: vec![TocItem {
                title: "Setup".to_owned(),
                url: "#setup".to_owned(),
                depth: 2,
            }],
            structured_data: None,
        };

        let json = serde_json::to_value(&exports).unwrap();

        assert_eq!(json["default"], "<p>Hi</p>");
        assert_eq!(json["toc"][0]["url"], "#setup");
        assert!(json.get("structuredData").is_none());
    }
}
