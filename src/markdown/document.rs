//! Markdown document parsing: frontmatter, headings, body HTML, excerpt.
//!
//! Everything here is pure; reading files is the site loader's job.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd};
use thiserror::Error;

use crate::model::Heading;

use super::escape::{normalize_whitespace, prune_text, word_count};
use super::frontmatter::{Frontmatter, Split, parse_frontmatter, split_frontmatter};
use super::slugify::{AnchorPolicy, SlugTracker};

/// Knobs for [`parse_document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Headings at this depth are the ones listed in the TOC.
    pub toc_depth: u8,
    pub anchors: AnchorPolicy,
    pub excerpt_length: usize,
    pub words_per_minute: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            toc_depth: 2,
            anchors: AnchorPolicy::Verbatim,
            excerpt_length: 160,
            words_per_minute: 265,
        }
    }
}

/// Why a document could not be parsed.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("frontmatter opened with --- but never closed")]
    UnterminatedFrontmatter,

    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A parsed content document.
#[derive(Debug, Clone)]
pub struct Document {
    pub frontmatter: Frontmatter,
    /// All headings in document order.
    pub headings: Vec<Heading>,
    pub body_html: String,
    pub excerpt: String,
    pub word_count: usize,
    pub time_to_read: u32,
}

fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION
}

/// Parse a content file's text into a [`Document`].
///
/// Body headings get `id` attributes from the same slugging the TOC uses, so
/// TOC links resolve. Headings at `toc_depth` take exactly the anchors
/// [`crate::toc::Toc::build`] gives them; under
/// [`AnchorPolicy::Disambiguate`] every other heading is then numbered
/// around those, so no two body ids collide.
pub fn parse_document(source: &str, options: &ParseOptions) -> Result<Document, DocumentError> {
    let (frontmatter, body) = match split_frontmatter(source) {
        Split::Absent(body) => (Frontmatter::default(), body),
        Split::Present { yaml, body } => (parse_frontmatter(yaml)?, body),
        Split::Unterminated => return Err(DocumentError::UnterminatedFrontmatter),
    };

    let mut events: Vec<Event<'_>> = Parser::new_ext(body, markdown_options()).collect();

    let mut headings = Vec::new();
    let mut heading_starts = Vec::new();
    let mut current: Option<(usize, u8, String)> = None;
    let mut paragraph_depth = 0usize;
    let mut excerpt_text = String::new();
    let mut all_text = String::new();

    for (i, event) in events.iter().enumerate() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((i, *level as u8, String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((start, depth, text)) = current.take() {
                    heading_starts.push(start);
                    headings.push(Heading::new(depth, text.trim()));
                }
                all_text.push(' ');
            }
            Event::Start(Tag::Paragraph) => paragraph_depth += 1,
            Event::End(TagEnd::Paragraph) => {
                paragraph_depth = paragraph_depth.saturating_sub(1);
                excerpt_text.push(' ');
                all_text.push(' ');
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, _, heading)) = current.as_mut() {
                    heading.push_str(text);
                }
                if paragraph_depth > 0 {
                    excerpt_text.push_str(text);
                }
                all_text.push_str(text);
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, _, heading)) = current.as_mut() {
                    heading.push(' ');
                }
                if paragraph_depth > 0 {
                    excerpt_text.push(' ');
                }
                all_text.push(' ');
            }
            Event::End(_) => all_text.push(' '),
            _ => {}
        }
    }

    let mut toc_tracker = SlugTracker::new(options.anchors);
    let toc_anchors: Vec<Option<String>> = headings
        .iter()
        .map(|h| (h.depth == options.toc_depth).then(|| toc_tracker.anchor(&h.value)))
        .collect();

    let mut other_tracker = SlugTracker::new(options.anchors);
    for anchor in toc_anchors.iter().flatten() {
        other_tracker.reserve(anchor);
    }

    for ((&start, heading), toc_anchor) in heading_starts.iter().zip(&headings).zip(toc_anchors) {
        let anchor = toc_anchor.unwrap_or_else(|| other_tracker.anchor(&heading.value));
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[start] {
            *id = Some(CowStr::from(anchor));
        }
    }

    let mut body_html = String::with_capacity(body.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut body_html, events.into_iter());

    let excerpt = prune_text(&normalize_whitespace(&excerpt_text), options.excerpt_length);
    let words = word_count(&all_text);

    Ok(Document {
        frontmatter,
        headings,
        body_html,
        excerpt,
        word_count: words,
        time_to_read: reading_time(words, options.words_per_minute),
    })
}

/// Minutes to read `words` at `words_per_minute`, rounded, never below 1.
pub fn reading_time(words: usize, words_per_minute: u32) -> u32 {
    if words_per_minute == 0 {
        return 1;
    }
    let minutes = (words as f64 / f64::from(words_per_minute)).round() as u32;
    minutes.max(1)
}
