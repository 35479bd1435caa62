//! Markdown compilation.
//!
//! Turns a document body into HTML while collecting what the page shell and
//! the search index need: the first H1 as a title candidate, H2+ headings as
//! table of contents, and heading/paragraph text as structured data.
//!
//! Heading anchors are injected into the event stream before HTML output, so
//! the ids in the markup, the TOC links and the structured data always agree.

use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

use crate::page::{StructuredContent, StructuredData, StructuredHeading, TocItem};
use crate::slug::HeadingSlugger;

/// Output of compiling one document body.
#[derive(Debug)]
pub(crate) struct Compiled {
    pub html: String,
    /// Text of the first H1 heading.
    pub title: Option<String>,
    pub toc: Vec<TocItem>,
    pub structured_data: StructuredData,
}

/// Per-event action, computed before the event vector is mutated.
enum Step {
    OpenHeading(HeadingLevel, Option<String>),
    CloseHeading,
    OpenBlock,
    CloseBlock,
    Text(String),
    Space,
    Skip,
}

struct OpenHeading {
    index: usize,
    level: HeadingLevel,
    explicit_id: Option<String>,
    text: String,
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
        | Options::ENABLE_GFM
}

fn classify(event: &Event<'_>) -> Step {
    match event {
        Event::Start(Tag::Heading { level, id, .. }) => {
            Step::OpenHeading(*level, id.as_ref().map(ToString::to_string))
        }
        Event::End(TagEnd::Heading(_)) => Step::CloseHeading,
        Event::Start(Tag::Paragraph | Tag::TableCell) => Step::OpenBlock,
        Event::End(TagEnd::Paragraph | TagEnd::TableCell) => Step::CloseBlock,
        Event::Text(text) | Event::Code(text) => Step::Text(text.to_string()),
        Event::SoftBreak | Event::HardBreak => Step::Space,
        _ => Step::Skip,
    }
}

fn level_to_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Compile a Markdown body.
pub(crate) fn compile(markdown: &str) -> Compiled {
    let mut events: Vec<Event<'_>> = Parser::new_ext(markdown, parser_options()).collect();

    let mut slugger = HeadingSlugger::new();
    for event in &events {
        if let Event::Start(Tag::Heading { id: Some(id), .. }) = event {
            slugger.reserve(id);
        }
    }

    let mut title = None;
    let mut toc = Vec::new();
    let mut structured = StructuredData::default();
    let mut current_heading: Option<String> = None;
    let mut heading: Option<OpenHeading> = None;
    let mut block: Option<String> = None;

    for index in 0..events.len() {
        match classify(&events[index]) {
            Step::OpenHeading(level, explicit_id) => {
                heading = Some(OpenHeading {
                    index,
                    level,
                    explicit_id,
                    text: String::new(),
                });
            }
            Step::CloseHeading => {
                let Some(open) = heading.take() else {
                    continue;
                };
                let text = open.text.trim().to_owned();
                let id = match open.explicit_id {
                    Some(explicit) => slugger.explicit(&explicit),
                    None => slugger.slug(&text),
                };

                if let Event::Start(Tag::Heading { id: slot, .. }) = &mut events[open.index] {
                    *slot = Some(CowStr::from(id.clone()));
                }

                let depth = level_to_depth(open.level);
                if depth == 1 {
                    if title.is_none() {
                        title = Some(text.clone());
                    }
                } else {
                    toc.push(TocItem {
                        title: text.clone(),
                        url: format!("#{id}"),
                        depth,
                    });
                }

                structured.headings.push(StructuredHeading {
                    id: id.clone(),
                    content: text,
                });
                current_heading = Some(id);
            }
            Step::OpenBlock => block = Some(String::new()),
            Step::CloseBlock => {
                if let Some(text) = block.take() {
                    let text = text.trim();
                    if !text.is_empty() {
                        structured.contents.push(StructuredContent {
                            heading: current_heading.clone(),
                            content: text.to_owned(),
                        });
                    }
                }
            }
            Step::Text(text) => {
                if let Some(open) = heading.as_mut() {
                    open.text.push_str(&text);
                } else if let Some(buffer) = block.as_mut() {
                    buffer.push_str(&text);
                }
            }
            Step::Space => {
                if let Some(open) = heading.as_mut() {
                    open.text.push(' ');
                } else if let Some(buffer) = block.as_mut() {
                    buffer.push(' ');
                }
            }
            Step::Skip => {}
        }
    }

    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, events.into_iter());

    Compiled {
        html: html_output,
        title,
        toc,
        structured_data: structured,
    }
}
