//! Content tree loading.
//!
//! Loading runs in two phases, like a scanner feeding a builder:
//! 1. Walk the content root and collect `.md`/`.mdx` files (hidden entries skipped)
//! 2. Read, split frontmatter and compile each file in parallel
//!
//! The resulting pages are sorted so the order does not depend on the
//! filesystem or on thread scheduling.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;

use crate::compile::compile;
use crate::frontmatter;
use crate::page::{CompiledBody, Page, PageData, PageExports};
use crate::slug::{display_path, slugs_for_file};
use crate::source::SourceError;

/// Extensions recognised as documents.
const DOCUMENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// A discovered content file.
#[derive(Debug)]
struct ContentFile {
    absolute: PathBuf,
    relative: PathBuf,
}

/// Walk `source_dir` and compile every document into a [`Page`].
pub(crate) fn load_pages(source_dir: &Path, base_url: &str) -> Result<Vec<Page>, SourceError> {
    if !source_dir.is_dir() {
        return Err(SourceError::MissingRoot(source_dir.to_path_buf()));
    }

    let files = discover(source_dir)?;
    tracing::debug!(files = files.len(), "Discovered content files");

    let mut pages = files
        .par_iter()
        .map(|file| load_page(file, base_url))
        .collect::<Result<Vec<_>, _>>()?;

    pages.sort_by(|a, b| compare_file_paths(&a.file.path, &b.file.path));
    Ok(pages)
}

fn discover(source_dir: &Path) -> Result<Vec<ContentFile>, SourceError> {
    let walker = WalkBuilder::new(source_dir)
        .standard_filters(false)
        .hidden(true)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        let is_document = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| DOCUMENT_EXTENSIONS.contains(&e));
        if !is_document {
            continue;
        }
        let Ok(relative) = path.strip_prefix(source_dir) else {
            continue;
        };
        files.push(ContentFile {
            absolute: path.to_path_buf(),
            relative: relative.to_path_buf(),
        });
    }
    Ok(files)
}

fn load_page(file: &ContentFile, base_url: &str) -> Result<Page, SourceError> {
    let text = std::fs::read_to_string(&file.absolute).map_err(|source| SourceError::Io {
        path: file.absolute.clone(),
        source,
    })?;
    let file_path = display_path(&file.relative);

    let (yaml, body) = frontmatter::split(&text);
    let meta = match yaml {
        Some(yaml) => frontmatter::parse(yaml).map_err(|e| SourceError::Frontmatter {
            path: file_path.clone(),
            message: e.to_string(),
        })?,
        None => frontmatter::Frontmatter::default(),
    };

    let compiled = compile(body);
    let slugs = slugs_for_file(&file.relative);

    let title = meta
        .title
        .or(compiled.title)
        .unwrap_or_else(|| title_from_slugs(&slugs, &file.relative));

    let mut data = PageData::new(title)
        .with_full(meta.full)
        .with_exports(PageExports {
            body: CompiledBody::from_html(compiled.html),
            toc: compiled.toc,
            structured_data: Some(compiled.structured_data),
        });
    if let Some(description) = meta.description {
        data = data.with_description(description);
    }

    Ok(Page::new(base_url, slugs, file_path, data))
}

/// Fallback title: last slug, or the file stem for the root page.
fn title_from_slugs(slugs: &[String], relative: &Path) -> String {
    slugs.last().cloned().unwrap_or_else(|| {
        relative
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    })
}

/// Order files directory by directory, `index` documents first.
fn compare_file_paths(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

fn sort_key(path: &str) -> (&str, bool, &str) {
    let (dir, name) = path.rsplit_once('/').unwrap_or(("", path));
    let is_index = name.starts_with("index.");
    (dir, !is_index, name)
}
