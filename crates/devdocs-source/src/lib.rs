//! Content tree loading and page source for devdocs.
//!
//! This crate turns a directory of Markdown/MDX documents into a [`Source`]:
//! an immutable, ordered collection of [`Page`]s addressed by slug path.
//!
//! # Content Tree Convention
//!
//! File paths map to slug paths relative to the content root:
//! - `index.mdx` - root page (`[]`)
//! - `intro.mdx` - `["intro"]`
//! - `guides/index.md` - `["guides"]`
//! - `guides/install.mdx` - `["guides", "install"]`
//!
//! A document may start with YAML frontmatter (`title`, `description`, `full`).
//! Bodies are compiled with `pulldown-cmark`; MDX components are not evaluated.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use devdocs_source::Source;
//!
//! let source = Source::load(Path::new("content/docs"), "/docs")?;
//! for page in source.pages() {
//!     println!("{} -> {}", page.url, page.data.title);
//! }
//! let intro = source.page(Some(&["intro"][..]));
//! # Ok(())
//! # }
//! ```

mod compile;
mod frontmatter;
mod loader;
mod page;
mod slug;
mod source;

pub use page::{
    CompiledBody, FileInfo, Page, PageData, PageExports, StructuredContent, StructuredData,
    StructuredHeading, TocItem, url_for,
};
pub use source::{Source, SourceError};
