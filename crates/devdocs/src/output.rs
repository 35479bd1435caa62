//! Terminal status output for devdocs commands.
//!
//! Everything goes to stderr so `devdocs build` output can be piped.

use std::fmt::Display;

use console::{Style, Term};
use devdocs_site::ExportSummary;

/// Width of the label column in [`Output::field`] lines.
const LABEL_WIDTH: usize = 8;

/// Status line printer.
pub(crate) struct Output {
    term: Term,
    label: Style,
    link: Style,
    ok: Style,
    fail: Style,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            label: Style::new().dim(),
            link: Style::new().cyan().bold(),
            ok: Style::new().green(),
            fail: Style::new().red(),
        }
    }

    /// Print an aligned `label value` line.
    pub(crate) fn field(&self, label: &str, value: impl Display) {
        let label = format!("{label:<LABEL_WIDTH$}");
        self.line(&format!("{} {value}", self.label.apply_to(label)));
    }

    /// Print where the docs are served.
    pub(crate) fn serving(&self, host: &str, port: u16, base_url: &str) {
        let url = docs_url(host, port, base_url);
        self.field("Docs", self.link.apply_to(url));
    }

    /// Print the result of a static export.
    pub(crate) fn built(&self, summary: &ExportSummary) {
        self.line(&self.ok.apply_to(built_message(summary)).to_string());
    }

    /// Print a fatal command error.
    pub(crate) fn failure(&self, err: &dyn Display) {
        self.line(&self.fail.apply_to(format!("Error: {err}")).to_string());
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }
}

/// Browser URL of the docs root.
fn docs_url(host: &str, port: u16, base_url: &str) -> String {
    let host = if host.contains(':') {
        format!("[{host}]")
    } else {
        host.to_owned()
    };
    format!("http://{host}:{port}{base_url}")
}

fn built_message(summary: &ExportSummary) -> String {
    let noun = if summary.pages == 1 { "page" } else { "pages" };
    format!(
        "Built {} {noun} to {}",
        summary.pages,
        summary.out_dir.display()
    )
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_docs_url() {
        assert_eq!(
            docs_url("127.0.0.1", 7979, "/docs"),
            "http://127.0.0.1:7979/docs"
        );
        assert_eq!(docs_url("::1", 80, "/"), "http://[::1]:80/");
    }

    #[test]
    fn test_built_message() {
        let summary = |pages| ExportSummary {
            pages,
            out_dir: PathBuf::from("out"),
        };

        assert_eq!(built_message(&summary(1)), "Built 1 page to out");
        assert_eq!(built_message(&summary(12)), "Built 12 pages to out");
    }
}
