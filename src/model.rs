//! Core data types shared by the parser, renderers and site builder.

use std::borrow::Cow;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::markdown::escape_html;

/// A document heading, in document order.
///
/// `value` is the heading's plain display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub depth: u8,
    pub value: String,
}

impl Heading {
    pub fn new(depth: u8, value: impl Into<String>) -> Self {
        Self {
            depth,
            value: value.into(),
        }
    }
}

/// A loaded blog post.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// URL path of the post page, e.g. `/hello-world/`.
    pub slug: String,
    /// Content file the post was read from.
    pub source: PathBuf,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDateTime>,
    /// Plain-text opening of the body, pruned to the configured length.
    pub excerpt: String,
    /// Rendered body; headings carry anchor ids.
    pub body_html: String,
    /// Every heading in the body, all depths.
    pub headings: Vec<Heading>,
    /// Estimated reading time in minutes, at least 1.
    pub time_to_read: u32,
}

impl Post {
    /// Title for listings: the frontmatter title, else the slug.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.slug)
    }

    /// Frontmatter description when present, else the excerpt.
    pub fn summary(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.excerpt)
    }

    /// [`summary`](Self::summary) as HTML: the description is markup and
    /// passes through, the excerpt is plain text and is escaped.
    pub fn summary_html(&self) -> Cow<'_, str> {
        match self.description.as_deref() {
            Some(description) => Cow::Borrowed(description),
            None => escape_html(&self.excerpt),
        }
    }

    /// Date in `Month DD, YYYY` form.
    pub fn formatted_date(&self) -> Option<String> {
        self.date.map(|d| d.format("%B %d, %Y").to_string())
    }

    pub fn stub(&self) -> PostStub {
        PostStub {
            slug: self.slug.clone(),
            title: self.display_title().to_string(),
        }
    }
}

/// Link target for previous/next navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostStub {
    pub slug: String,
    pub title: String,
}

impl PostStub {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
        }
    }
}
