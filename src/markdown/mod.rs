//! Pure Markdown processing for blog content.
//!
//! This module turns a content file's text into the pieces the renderers
//! need. No I/O is performed here:
//!
//! - [`slugify`]: heading text → URL-fragment anchors
//! - [`escape`]: HTML escaping and excerpt pruning
//! - [`frontmatter`]: `---`-fenced YAML metadata
//! - [`document`]: body parsing, heading extraction and body HTML
//!
//! ## Design Notes
//!
//! - **Anchors from text alone**: both the TOC and the body heading ids come
//!   from [`slugify`], so a TOC link always points at the heading it names.
//! - **Smart punctuation**: straight quotes and dashes in the body are
//!   rendered typographically.
//! - **Excerpts** are built from paragraph text only and pruned on a word
//!   boundary.

mod document;
mod escape;
mod frontmatter;
mod slugify;

pub use document::{Document, DocumentError, ParseOptions, parse_document, reading_time};
pub use escape::{escape_html, normalize_whitespace, prune_text, word_count};
pub use frontmatter::{Frontmatter, Split, parse_frontmatter, split_frontmatter};
pub use slugify::{AnchorPolicy, SlugTracker, slugify};
