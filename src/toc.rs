//! Table of contents built from a document's headings.
//!
//! The TOC is a flat list in document order. Heading depth is carried by
//! [`Heading`] but never used for nesting; callers pick the level they want
//! with [`headings_at_depth`] before building.

use serde::Serialize;

use crate::markdown::{AnchorPolicy, SlugTracker, escape_html};
use crate::model::Heading;

/// One navigable TOC line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Fragment without the leading `#`.
    pub anchor: String,
    /// Heading display text.
    pub label: String,
}

impl TocEntry {
    pub fn new(anchor: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            label: label.into(),
        }
    }

    /// `#anchor` for use in an `href`.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// An ordered, flat table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Toc {
    pub entries: Vec<TocEntry>,
}

impl Toc {
    /// Build a TOC from headings in document order.
    ///
    /// `None` and an empty slice both give an empty TOC.
    ///
    /// # Examples
    ///
    /// ```
    /// use inkpost::markdown::AnchorPolicy;
    /// use inkpost::toc::{Toc, TocEntry};
    /// use inkpost::Heading;
    ///
    /// let headings = vec![Heading::new(2, "Getting Started")];
    /// let toc = Toc::build(Some(&headings), AnchorPolicy::Verbatim);
    /// assert_eq!(toc.entries, vec![TocEntry::new("getting-started", "Getting Started")]);
    ///
    /// assert!(Toc::build(None, AnchorPolicy::Verbatim).is_empty());
    /// ```
    pub fn build(headings: Option<&[Heading]>, policy: AnchorPolicy) -> Self {
        let Some(headings) = headings else {
            return Self::default();
        };

        let mut tracker = SlugTracker::new(policy);
        let entries = headings
            .iter()
            .map(|h| TocEntry::new(tracker.anchor(&h.value), h.value.clone()))
            .collect();

        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Render the TOC card.
    ///
    /// The container and its "Table of Contents" label are always emitted;
    /// an empty TOC yields an empty `<ul>`.
    pub fn render_html(&self) -> String {
        let mut out = String::from(
            "<div class=\"card toc\">\n<h2 style=\"margin-top: 0\">Table of Contents</h2>\n<ul>\n",
        );
        for entry in &self.entries {
            out.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                escape_html(&entry.href()),
                escape_html(&entry.label)
            ));
        }
        out.push_str("</ul>\n</div>\n");
        out
    }
}

/// Headings at exactly `depth`, order preserved.
pub fn headings_at_depth(headings: &[Heading], depth: u8) -> Vec<Heading> {
    headings
        .iter()
        .filter(|h| h.depth == depth)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h2(text: &str) -> Heading {
        Heading::new(2, text)
    }

    #[test]
    fn test_absent_headings_give_empty_toc() {
        let toc = Toc::build(None, AnchorPolicy::Verbatim);
        assert!(toc.is_empty());
    }

    #[test]
    fn test_empty_headings_give_empty_toc() {
        let toc = Toc::build(Some(&[]), AnchorPolicy::Verbatim);
        assert_eq!(toc, Toc::default());
    }

    #[test]
    fn test_order_is_document_order() {
        let headings = vec![h2("Zeta"), Heading::new(4, "Alpha"), h2("Mid")];
        let toc = Toc::build(Some(&headings), AnchorPolicy::Verbatim);
        let labels: Vec<_> = toc.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_duplicate_text_collides() {
        let headings = vec![h2("Intro"), h2("Body"), h2("Intro")];
        let toc = Toc::build(Some(&headings), AnchorPolicy::Verbatim);
        assert_eq!(toc.entries[0].anchor, "intro");
        assert_eq!(toc.entries[2].anchor, "intro");
    }

    #[test]
    fn test_duplicate_text_disambiguated() {
        let headings = vec![h2("Intro"), h2("Intro")];
        let toc = Toc::build(Some(&headings), AnchorPolicy::Disambiguate);
        assert_eq!(toc.entries[1].anchor, "intro-2");
    }

    #[test]
    fn test_render_entries() {
        let headings = vec![h2("Getting Started"), h2("Q & A")];
        let html = Toc::build(Some(&headings), AnchorPolicy::Verbatim).render_html();
        assert!(html.starts_with("<div class=\"card toc\">"));
        assert!(html.contains("<li><a href=\"#getting-started\">Getting Started</a></li>"));
        assert!(html.contains("<li><a href=\"#q--a\">Q &amp; A</a></li>"));
    }

    #[test]
    fn test_render_empty_keeps_container() {
        let html = Toc::default().render_html();
        assert!(html.contains("Table of Contents"));
        assert!(html.contains("<ul>\n</ul>"));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn test_headings_at_depth() {
        let headings = vec![h2("A"), Heading::new(3, "B"), h2("C")];
        assert_eq!(headings_at_depth(&headings, 2), vec![h2("A"), h2("C")]);
        assert!(headings_at_depth(&headings, 1).is_empty());
    }
}
