//! Page resolution, page shell rendering and static export for devdocs.
//!
//! - [`Site`] resolves slug paths against the page source. The route set is
//!   closed: anything the source does not list is [`SiteError::PageNotFound`].
//! - [`PageRenderer`] assembles a [`PageShell`] (TOC, layout, edit link,
//!   header text, body) for a resolved page.
//! - [`render_document`] turns metadata and shell into an HTML document.
//! - [`export_site`] writes every page plus the search index to disk.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use devdocs_site::{PageRenderer, Site};
//! use devdocs_source::{Page, PageData, Source};
//!
//! let pages = vec![Page::new("/docs", vec!["intro".to_owned()], "intro.mdx", PageData::new("Intro"))];
//! let site = Site::new(Arc::new(Source::from_pages(pages).unwrap()));
//!
//! let page = site.resolve(Some(&["intro"][..])).unwrap();
//! let shell = PageRenderer::default().render(page);
//! assert_eq!(shell.edit_on_github.path, "content/docs/intro.mdx");
//! assert!(site.resolve(Some(&["missing"][..])).is_err());
//! ```

mod export;
mod html;
mod renderer;
mod site;

pub use export::{ExportError, ExportSummary, SEARCH_INDEX_PATH, export_site};
pub use html::{escape_html, render_document};
pub use renderer::{EditOnGithub, EditTarget, PageRenderer, PageShell, ShellConfig, TocOptions};
pub use site::{PageMetadata, Site, SiteError};
