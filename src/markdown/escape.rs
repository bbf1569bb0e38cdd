//! Pure HTML escaping and text shaping utilities.

use std::borrow::Cow;

/// Escape text for use in HTML element content or a quoted attribute value.
///
/// Escapes `&`, `<`, `>`, `'` and `"`. Borrows when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use inkpost::markdown::escape_html;
///
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Prune text to at most `max_chars` characters on a word boundary.
///
/// Text that already fits is returned unchanged. Otherwise the cut falls on
/// the last whitespace inside the limit, trailing punctuation is dropped and
/// an ellipsis (`…`) is appended.
///
/// # Examples
///
/// ```
/// use inkpost::markdown::prune_text;
///
/// assert_eq!(prune_text("short", 10), "short");
/// assert_eq!(prune_text("one two, three", 9), "one two…");
/// ```
pub fn prune_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    // Byte offset of the first char past the limit
    let limit = text
        .char_indices()
        .nth(max_chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len());

    // Keep the word straddling the limit out unless the cut is already on a boundary
    let head = &text[..limit];
    let cut = if text[limit..].starts_with(char::is_whitespace) {
        head
    } else {
        match head.rfind(char::is_whitespace) {
            Some(i) => &head[..i],
            None => head,
        }
    };

    let trimmed = cut.trim_end_matches(|c: char| !c.is_alphanumeric());
    format!("{trimmed}…")
}

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_html("it's"), "it&apos;s");
    }

    #[test]
    fn test_escape_borrows_plain_text() {
        assert!(matches!(escape_html("nothing here"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a \n b\t\tc "), "a b c");
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[test]
    fn test_prune_fits() {
        assert_eq!(prune_text("exactly ten", 11), "exactly ten");
        assert_eq!(prune_text("", 5), "");
    }

    #[test]
    fn test_prune_word_boundary() {
        assert_eq!(prune_text("hello wonderful world", 10), "hello…");
    }

    #[test]
    fn test_prune_cut_on_boundary_keeps_word() {
        assert_eq!(prune_text("hello world again", 11), "hello world…");
    }

    #[test]
    fn test_prune_drops_trailing_punctuation() {
        assert_eq!(prune_text("one two, three", 9), "one two…");
    }

    #[test]
    fn test_prune_single_long_word() {
        assert_eq!(prune_text("abcdefghij", 4), "abcd…");
    }

    #[test]
    fn test_prune_multibyte() {
        assert_eq!(prune_text("héllo wörld ünd", 12), "héllo wörld…");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two  three\nfour"), 4);
        assert_eq!(word_count(""), 0);
    }
}
