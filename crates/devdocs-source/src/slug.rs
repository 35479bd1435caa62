//! Slug generation for file paths and heading anchors.

use std::collections::{HashMap, HashSet};
use std::path::{Component, Path};

/// Compute the slug path of a content file relative to the content root.
///
/// The extension is dropped and a trailing `index` segment is removed, so
/// `index.mdx` maps to the root (`[]`) and `guides/index.mdx` to `["guides"]`.
pub(crate) fn slugs_for_file(relative: &Path) -> Vec<String> {
    let mut slugs: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if let Some(last) = slugs.last_mut() {
        if let Some(stem) = Path::new(last.as_str()).file_stem() {
            *last = stem.to_string_lossy().into_owned();
        }
        if last == "index" {
            slugs.pop();
        }
    }

    slugs
}

/// Convert a relative path to the `/`-separated form stored in `file.path`.
pub(crate) fn display_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Id used for headings whose text has no alphanumeric characters.
const FALLBACK_HEADING_ID: &str = "section";

/// Generates unique heading anchor ids within one document.
///
/// Ids are lowercased, keep alphanumerics, `-` and `_`, turn whitespace into
/// `-`, and drop everything else. Repeated ids get a `-1`, `-2`, ... suffix.
/// Explicit ids (`{#custom}`) win over generated ones; a repeated explicit id
/// is suffixed like any other duplicate.
#[derive(Debug, Default)]
pub(crate) struct HeadingSlugger {
    /// Ids already handed out.
    seen: HashSet<String>,
    /// Explicit ids known from a pre-pass over the document.
    reserved: HashSet<String>,
    /// Last suffix tried per base id.
    suffixes: HashMap<String, usize>,
}

impl HeadingSlugger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register an explicit id ahead of time so generated ids avoid it.
    pub(crate) fn reserve(&mut self, id: &str) {
        self.reserved.insert(id.to_owned());
    }

    /// Claim an explicit id, suffixing it if an earlier heading already has it.
    pub(crate) fn explicit(&mut self, id: &str) -> String {
        if self.seen.contains(id) {
            return self.next_free(id);
        }
        self.seen.insert(id.to_owned());
        id.to_owned()
    }

    /// Produce the next unique id for the heading text.
    pub(crate) fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        if self.is_taken(&base) {
            return self.next_free(&base);
        }
        self.seen.insert(base.clone());
        base
    }

    fn is_taken(&self, id: &str) -> bool {
        self.seen.contains(id) || self.reserved.contains(id)
    }

    fn next_free(&mut self, base: &str) -> String {
        loop {
            let count = self.suffixes.entry(base.to_owned()).or_insert(0);
            *count += 1;
            let candidate = format!("{base}-{count}");
            if !self.is_taken(&candidate) {
                self.seen.insert(candidate.clone());
                return candidate;
            }
        }
    }
}

fn slugify(text: &str) -> String {
    let slug: String = text
        .trim()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c.to_lowercase().collect::<String>())
            } else if c.is_whitespace() {
                Some("-".to_owned())
            } else {
                None
            }
        })
        .collect();

    if slug.chars().any(char::is_alphanumeric) {
        slug
    } else {
        FALLBACK_HEADING_ID.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_slugs_for_root_index() {
        assert!(slugs_for_file(Path::new("index.mdx")).is_empty());
    }

    #[test]
    fn test_slugs_for_nested_index() {
        assert_eq!(slugs_for_file(Path::new("guides/index.md")), vec!["guides"]);
    }

    #[test]
    fn test_slugs_for_nested_page() {
        assert_eq!(
            slugs_for_file(Path::new("guides/setup/install.mdx")),
            vec!["guides", "setup", "install"]
        );
    }

    #[test]
    fn test_slugs_keep_index_directory_name() {
        assert_eq!(
            slugs_for_file(Path::new("index/overview.md")),
            vec!["index", "overview"]
        );
    }

    #[test]
    fn test_display_path_uses_forward_slashes() {
        let path: std::path::PathBuf = ["guides", "install.mdx"].iter().collect();
        assert_eq!(display_path(&path), "guides/install.mdx");
    }

    #[test]
    fn test_heading_slug_basic() {
        let mut slugger = HeadingSlugger::new();
        assert_eq!(slugger.slug("Getting Started"), "getting-started");
        assert_eq!(slugger.slug("What's new?"), "whats-new");
        assert_eq!(slugger.slug("snake_case & more"), "snake_case--more");
    }

    #[test]
    fn test_heading_slug_duplicates() {
        let mut slugger = HeadingSlugger::new();
        assert_eq!(slugger.slug("Usage"), "usage");
        assert_eq!(slugger.slug("Usage"), "usage-1");
        assert_eq!(slugger.slug("Usage"), "usage-2");
    }

    #[test]
    fn test_heading_slug_avoids_reserved() {
        let mut slugger = HeadingSlugger::new();
        slugger.reserve("usage");
        assert_eq!(slugger.slug("Usage"), "usage-1");
    }

    #[test]
    fn test_heading_slug_without_alphanumerics() {
        let mut slugger = HeadingSlugger::new();
        assert_eq!(slugger.slug("!!!"), "section");
        assert_eq!(slugger.slug("- -"), "section-1");
        assert_eq!(slugger.slug(""), "section-2");
    }

    #[test]
    fn test_repeated_explicit_id_is_suffixed() {
        let mut slugger = HeadingSlugger::new();
        slugger.reserve("a");
        assert_eq!(slugger.explicit("a"), "a");
        assert_eq!(slugger.explicit("a"), "a-1");
        assert_eq!(slugger.slug("A"), "a-2");
    }

    #[test]
    fn test_generated_id_before_explicit_owner() {
        let mut slugger = HeadingSlugger::new();
        slugger.reserve("usage");
        assert_eq!(slugger.slug("Usage"), "usage-1");
        assert_eq!(slugger.explicit("usage"), "usage");
    }
}
