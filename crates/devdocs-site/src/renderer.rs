//! Page shell assembly.
//!
//! [`PageRenderer`] turns a resolved [`Page`] into a [`PageShell`]: the
//! configuration the shell template needs (TOC, layout, edit link, header
//! text) plus the compiled body. It only accepts a `&Page`, so callers must
//! have handled the not-found case already.

use devdocs_source::{Page, TocItem};
use serde::Serialize;

/// Repository coordinates for "Edit on GitHub" links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditTarget {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Branch or commit reference.
    pub sha: String,
    /// Repository-relative directory of the content tree.
    pub content_prefix: String,
}

impl Default for EditTarget {
    fn default() -> Self {
        Self {
            owner: "FyraLabs".to_owned(),
            repo: "developer".to_owned(),
            sha: "main".to_owned(),
            content_prefix: "content/docs".to_owned(),
        }
    }
}

/// Static configuration applied to every rendered page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Table of contents presentation style.
    pub toc_style: String,
    /// Edit link coordinates.
    pub edit: EditTarget,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            toc_style: "clerk".to_owned(),
            edit: EditTarget::default(),
        }
    }
}

/// Table of contents presentation options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocOptions {
    /// Presentation style.
    pub style: String,
}

/// "Edit on GitHub" link for one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EditOnGithub {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Branch or commit reference.
    pub sha: String,
    /// Repository-relative path of the source file.
    pub path: String,
}

impl EditOnGithub {
    /// Browser URL of the source file.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "https://github.com/{}/{}/blob/{}/{}",
            self.owner, self.repo, self.sha, self.path
        )
    }
}

/// Everything the shell template needs to render one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageShell {
    /// Table of contents, as exported by the page.
    pub toc: Vec<TocItem>,
    /// Table of contents presentation.
    pub table_of_content: TocOptions,
    /// Full-width layout.
    pub full: bool,
    /// Edit link target.
    pub edit_on_github: EditOnGithub,
    /// Page title.
    pub title: String,
    /// Page description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Rendered body markup.
    pub body: String,
}

/// Assembles page shells from resolved pages.
#[derive(Clone, Debug, Default)]
pub struct PageRenderer {
    config: ShellConfig,
}

impl PageRenderer {
    /// Create a renderer with the given shell configuration.
    #[must_use]
    pub fn new(config: ShellConfig) -> Self {
        Self { config }
    }

    /// Assemble the shell for `page`.
    #[must_use]
    pub fn render(&self, page: &Page) -> PageShell {
        let edit = &self.config.edit;
        PageShell {
            toc: page.data.exports.toc.clone(),
            table_of_content: TocOptions {
                style: self.config.toc_style.clone(),
            },
            full: page.data.full,
            edit_on_github: EditOnGithub {
                owner: edit.owner.clone(),
                repo: edit.repo.clone(),
                sha: edit.sha.clone(),
                path: source_path(&edit.content_prefix, &page.file.path),
            },
            title: page.data.title.clone(),
            description: page.data.description.clone(),
            body: page.data.exports.body.render().to_owned(),
        }
    }
}

/// Join the content prefix and the content-relative file path.
fn source_path(prefix: &str, file_path: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        file_path.to_owned()
    } else {
        format!("{prefix}/{file_path}")
    }
}
