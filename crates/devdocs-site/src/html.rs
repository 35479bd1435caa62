//! HTML document shell for rendered pages.

use std::fmt::Write;

use devdocs_source::TocItem;

use crate::renderer::PageShell;
use crate::site::PageMetadata;

/// Render a complete HTML document for one page.
///
/// `meta` fills the document head; `shell` fills the body layout.
pub fn render_document(meta: &PageMetadata, shell: &PageShell) -> String {
    let mut html = String::with_capacity(4096 + shell.body.len());

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&meta.title));
    if let Some(description) = &meta.description {
        let _ = writeln!(
            html,
            "<meta name=\"description\" content=\"{}\">",
            escape_html(description)
        );
    }
    html.push_str("</head>\n<body>\n");

    let layout = if shell.full {
        "docs-page docs-page-full"
    } else {
        "docs-page"
    };
    let _ = writeln!(html, "<div class=\"{layout}\">");

    html.push_str("<article class=\"docs-content\">\n");
    let _ = writeln!(
        html,
        "<h1 class=\"docs-title\">{}</h1>",
        escape_html(&shell.title)
    );
    if let Some(description) = &shell.description {
        let _ = writeln!(
            html,
            "<p class=\"docs-description\">{}</p>",
            escape_html(description)
        );
    }
    html.push_str("<div class=\"docs-body\">\n");
    html.push_str(&shell.body);
    if !shell.body.ends_with('\n') {
        html.push('\n');
    }
    html.push_str("</div>\n");
    let _ = writeln!(
        html,
        "<a class=\"docs-edit\" href=\"{}\" rel=\"noreferrer noopener\" target=\"_blank\">Edit on GitHub</a>",
        escape_html(&shell.edit_on_github.url())
    );
    html.push_str("</article>\n");

    render_toc(&mut html, &shell.toc, &shell.table_of_content.style);

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_toc(html: &mut String, toc: &[TocItem], style: &str) {
    if toc.is_empty() {
        return;
    }

    let _ = writeln!(
        html,
        "<aside class=\"docs-toc docs-toc-{}\">",
        escape_html(style)
    );
    html.push_str("<p class=\"docs-toc-title\">On this page</p>\n<ul>\n");
    for item in toc {
        let _ = writeln!(
            html,
            "<li class=\"docs-toc-depth-{}\"><a href=\"{}\">{}</a></li>",
            item.depth,
            escape_html(&item.url),
            escape_html(&item.title)
        );
    }
    html.push_str("</ul>\n</aside>\n");
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use crate::renderer::{EditOnGithub, TocOptions};

    use super::*;

    fn shell(toc: Vec<TocItem>, full: bool) -> PageShell {
        PageShell {
            toc,
            table_of_content: TocOptions {
                style: "clerk".to_owned(),
            },
            full,
            edit_on_github: EditOnGithub {
                owner: "FyraLabs".to_owned(),
                repo: "developer".to_owned(),
                sha: "main".to_owned(),
                path: "content/docs/intro.mdx".to_owned(),
            },
            title: "Intro".to_owned(),
            description: Some("Getting started".to_owned()),
            body: "<p>Hello</p>".to_owned(),
        }
    }

    fn meta() -> PageMetadata {
        PageMetadata {
            title: "Intro".to_owned(),
            description: Some("Getting started".to_owned()),
        }
    }

    #[test]
    fn test_document_head() {
        let html = render_document(&meta(), &shell(Vec::new(), false));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Intro</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"Getting started\">"));
    }

    #[test]
    fn test_document_body_and_edit_link() {
        let html = render_document(&meta(), &shell(Vec::new(), false));

        assert!(html.contains("<div class=\"docs-body\">\n<p>Hello</p>\n</div>"));
        assert!(html.contains(
            "href=\"https://github.com/FyraLabs/developer/blob/main/content/docs/intro.mdx\""
        ));
        assert!(html.contains("<p class=\"docs-description\">Getting started</p>"));
    }

    #[test]
    fn test_document_without_toc_has_no_aside() {
        let html = render_document(&meta(), &shell(Vec::new(), false));

        assert!(!html.contains("<aside"));
        assert!(html.contains("<div class=\"docs-page\">"));
    }

    #[test]
    fn test_document_toc_and_full_layout() {
        let toc = vec![TocItem {
            title: "Setup & run".to_owned(),
            url: "#setup--run".to_owned(),
            depth: 3,
        }];
        let html = render_document(&meta(), &shell(toc, true));

        assert!(html.contains("<div class=\"docs-page docs-page-full\">"));
        assert!(html.contains("<aside class=\"docs-toc docs-toc-clerk\">"));
        assert!(html.contains(
            "<li class=\"docs-toc-depth-3\"><a href=\"#setup--run\">Setup &amp; run</a></li>"
        ));
    }

    #[test]
    fn test_document_without_description() {
        let meta = PageMetadata {
            title: "Bare".to_owned(),
            description: None,
        };
        let mut shell = shell(Vec::new(), false);
        shell.description = None;

        let html = render_document(&meta, &shell);

        assert!(!html.contains("name=\"description\""));
        assert!(!html.contains("docs-description"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("\"hi\""), "&quot;hi&quot;");
    }
}
