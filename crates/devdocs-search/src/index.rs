//! Search index entries derived from the page source.

use devdocs_source::{Page, StructuredData};
use serde::{Deserialize, Serialize};

/// One searchable document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    /// Page title.
    pub title: String,
    /// Headings and text blocks, forwarded as-is from the page.
    pub structured_data: Option<StructuredData>,
    /// Entry identifier; always the page URL.
    pub id: String,
    /// Page URL.
    pub url: String,
}

impl From<&Page> for IndexEntry {
    fn from(page: &Page) -> Self {
        Self {
            title: page.data.title.clone(),
            structured_data: page.data.exports.structured_data.clone(),
            id: page.url.clone(),
            url: page.url.clone(),
        }
    }
}

/// Build one entry per page, in page order.
///
/// Pages without structured data still produce an entry.
pub fn build_indexes(pages: &[Page]) -> Vec<IndexEntry> {
    pages.iter().map(IndexEntry::from).collect()
}

#[cfg(test)]
mod tests {
    use devdocs_source::{PageData, PageExports, StructuredHeading};
    use pretty_assertions::assert_eq;

    use super::*;

    fn page(slug: &str, title: &str, structured: Option<StructuredData>) -> Page {
        let data = PageData::new(title).with_exports(PageExports {
            structured_data: structured,
            ..PageExports::default()
        });
        Page::new("/docs", vec![slug.to_owned()], format!("{slug}.mdx"), data)
    }

    #[test]
    fn test_entry_count_and_order_match_pages() {
        let pages = vec![
            page("zeta", "Zeta", None),
            page("alpha", "Alpha", None),
            page("mid", "Mid", None),
        ];

        let entries = build_indexes(&pages);

        assert_eq!(entries.len(), pages.len());
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_entry_id_equals_url() {
        let entries = build_indexes(&[page("intro", "Intro", None)]);

        assert_eq!(entries[0].id, "/docs/intro");
        assert_eq!(entries[0].url, "/docs/intro");
    }

    #[test]
    fn test_entry_without_structured_data_is_kept() {
        let entries = build_indexes(&[page("bare", "Bare", None)]);

        assert_eq!(
            entries,
            vec![IndexEntry {
                title: "Bare".to_owned(),
                structured_data: None,
                id: "/docs/bare".to_owned(),
                url: "/docs/bare".to_owned(),
            }]
        );
    }

    #[test]
    fn test_entry_forwards_structured_data() {
        let structured = StructuredData {
            headings: vec![StructuredHeading {
                id: "setup".to_owned(),
                content: "Setup".to_owned(),
            }],
            contents: Vec::new(),
        };
        let entries = build_indexes(&[page("guide", "Guide", Some(structured.clone()))]);

        assert_eq!(entries[0].structured_data, Some(structured));
    }

    #[test]
    fn test_entry_serialization() {
        let entries = build_indexes(&[page("intro", "Intro", None)]);
        let json = serde_json::to_value(&entries[0]).unwrap();

        assert_eq!(json["title"], "Intro");
        assert_eq!(json["id"], "/docs/intro");
        assert!(json["structuredData"].is_null());
    }
}
