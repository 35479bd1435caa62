//! Query serving over a fixed set of index entries.
//!
//! Matching is a case-insensitive substring test. Results come back in index
//! order: there is no relevance ranking.

use serde::{Deserialize, Serialize};

use crate::index::IndexEntry;

/// Default maximum number of results per query.
pub const DEFAULT_LIMIT: usize = 60;

/// What the index matches against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Titles only; one result per page.
    Simple,
    /// Titles, headings and text blocks.
    #[default]
    Advanced,
}

/// Kind of a search hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// The page itself.
    Page,
    /// A heading within the page.
    Heading,
    /// A text block within the page.
    Text,
}

/// One search hit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Unique result id.
    pub id: String,
    /// Hit kind.
    #[serde(rename = "type")]
    pub kind: ResultKind,
    /// Matched text.
    pub content: String,
    /// Link target, with a heading fragment for heading/text hits.
    pub url: String,
}

/// Search handler built once from the index entries.
///
/// The entries are fixed for the lifetime of the handler.
#[derive(Debug)]
pub struct SearchApi {
    mode: SearchMode,
    indexes: Vec<IndexEntry>,
    limit: usize,
}

/// Create a search handler for `indexes`.
pub fn create_search_api(mode: SearchMode, indexes: Vec<IndexEntry>) -> SearchApi {
    tracing::debug!(entries = indexes.len(), mode = ?mode, "Built search index");
    SearchApi {
        mode,
        indexes,
        limit: DEFAULT_LIMIT,
    }
}

impl SearchApi {
    /// Cap the number of results per query.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Index flavour.
    #[must_use]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// The entries this handler searches.
    #[must_use]
    pub fn indexes(&self) -> &[IndexEntry] {
        &self.indexes
    }

    /// Run a query. A blank query returns no results.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        for entry in &self.indexes {
            match self.mode {
                SearchMode::Simple => {
                    if contains(&entry.title, &needle) {
                        results.push(page_result(entry));
                    }
                }
                SearchMode::Advanced => collect_advanced(entry, &needle, &mut results),
            }
            if results.len() >= self.limit {
                results.truncate(self.limit);
                break;
            }
        }
        results
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn page_result(entry: &IndexEntry) -> SearchResult {
    SearchResult {
        id: entry.id.clone(),
        kind: ResultKind::Page,
        content: entry.title.clone(),
        url: entry.url.clone(),
    }
}

fn anchored(url: &str, heading: Option<&str>) -> String {
    match heading {
        Some(id) => format!("{url}#{id}"),
        None => url.to_owned(),
    }
}

/// Emit the page hit followed by its matching headings and text blocks.
fn collect_advanced(entry: &IndexEntry, needle: &str, results: &mut Vec<SearchResult>) {
    let mut hits = Vec::new();

    if let Some(data) = &entry.structured_data {
        for heading in &data.headings {
            if contains(&heading.content, needle) {
                hits.push((
                    ResultKind::Heading,
                    heading.content.clone(),
                    anchored(&entry.url, Some(&heading.id)),
                ));
            }
        }
        for block in &data.contents {
            if contains(&block.content, needle) {
                hits.push((
                    ResultKind::Text,
                    block.content.clone(),
                    anchored(&entry.url, block.heading.as_deref()),
                ));
            }
        }
    }

    if hits.is_empty() && !contains(&entry.title, needle) {
        return;
    }

    results.push(page_result(entry));
    for (n, (kind, content, url)) in hits.into_iter().enumerate() {
        results.push(SearchResult {
            id: format!("{}-{n}", entry.id),
            kind,
            content,
            url,
        });
    }
}
