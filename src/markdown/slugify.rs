//! Pure slug generation for heading anchors.
//!
//! Anchors are derived from heading text alone, so the table of contents and
//! the rendered body agree without sharing state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Generate an anchor slug from heading text.
///
/// Lower-cases the text, turns each space into a hyphen, then drops every
/// character that is not an ASCII word character (`[A-Za-z0-9_]`) or a hyphen.
/// Runs of hyphens are kept as-is.
///
/// # Examples
///
/// ```
/// use inkpost::markdown::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("Hello, World"), "hello-world");
/// assert_eq!(slugify("C++ & Rust!"), "c--rust");
/// ```
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_ascii_alphanumeric() || c == '_' || c == '-' => Some(c),
            _ => None,
        })
        .collect()
}

/// How repeated heading text is turned into anchors within one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorPolicy {
    /// Every heading gets `slugify(text)`; identical headings share an anchor.
    #[default]
    Verbatim,
    /// Repeats get a numeric suffix: `intro`, `intro-2`, `intro-3`.
    Disambiguate,
}

/// Issues anchors for one document's headings under an [`AnchorPolicy`].
#[derive(Debug, Default)]
pub struct SlugTracker {
    policy: AnchorPolicy,
    issued: HashSet<String>,
}

impl SlugTracker {
    pub fn new(policy: AnchorPolicy) -> Self {
        Self {
            policy,
            issued: HashSet::new(),
        }
    }

    /// Anchor for the next heading with the given text.
    pub fn anchor(&mut self, text: &str) -> String {
        let base = slugify(text);
        if self.policy == AnchorPolicy::Verbatim {
            return base;
        }

        let mut candidate = base.clone();
        let mut n = 2;
        while self.issued.contains(&candidate) {
            candidate = format!("{base}-{n}");
            n += 1;
        }
        self.issued.insert(candidate.clone());
        candidate
    }

    /// Mark an anchor as taken so later headings avoid it.
    pub fn reserve(&mut self, anchor: &str) {
        self.issued.insert(anchor.to_string());
    }
}
