//! YAML frontmatter splitting and decoding.

use memchr::memmem;
use serde::{Deserialize, Serialize};

/// Metadata block at the top of a content file.
///
/// Unknown keys are ignored so posts can carry fields this crate does not use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    #[serde(default)]
    pub title: Option<String>,
    /// Raw date string, parsed later by the site loader.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Outcome of splitting a document into frontmatter and body.
#[derive(Debug, PartialEq, Eq)]
pub enum Split<'a> {
    /// No leading `---` fence; the whole input is body.
    Absent(&'a str),
    /// Fenced block found.
    Present { yaml: &'a str, body: &'a str },
    /// Opening fence without a closing one.
    Unterminated,
}

/// Split `---`-fenced YAML from the start of a document.
///
/// The opening fence must be the first line; the closing fence is the next
/// line consisting of `---` alone.
pub fn split_frontmatter(source: &str) -> Split<'_> {
    let rest = match source
        .strip_prefix("---\n")
        .or_else(|| source.strip_prefix("---\r\n"))
    {
        Some(rest) => rest,
        None => return Split::Absent(source),
    };

    // Empty block: closing fence immediately
    if let Some(body) = strip_fence_line(rest) {
        return Split::Present { yaml: "", body };
    }

    let finder = memmem::Finder::new(b"\n---");
    let bytes = rest.as_bytes();
    let mut from = 0;
    while let Some(pos) = finder.find(&bytes[from..]) {
        let fence = from + pos + 1;
        if let Some(body) = strip_fence_line(&rest[fence..]) {
            return Split::Present {
                yaml: &rest[..fence],
                body,
            };
        }
        from = fence;
    }

    Split::Unterminated
}

/// If `s` starts with a `---` line, return what follows it.
fn strip_fence_line(s: &str) -> Option<&str> {
    let after = s.strip_prefix("---")?;
    if after.is_empty() {
        return Some(after);
    }
    after
        .strip_prefix('\n')
        .or_else(|| after.strip_prefix("\r\n"))
}

/// Decode a YAML frontmatter block. An empty block yields the default.
pub fn parse_frontmatter(yaml: &str) -> Result<Frontmatter, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    serde_yaml::from_str(yaml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_absent() {
        assert_eq!(split_frontmatter("# Title\n"), Split::Absent("# Title\n"));
    }

    #[test]
    fn test_split_present() {
        let doc = "---\ntitle: Hi\n---\nBody text\n";
        assert_eq!(
            split_frontmatter(doc),
            Split::Present {
                yaml: "title: Hi\n",
                body: "Body text\n"
            }
        );
    }

    #[test]
    fn test_split_crlf() {
        let doc = "---\r\ntitle: Hi\r\n---\r\nBody";
        assert_eq!(
            split_frontmatter(doc),
            Split::Present {
                yaml: "title: Hi\r\n",
                body: "Body"
            }
        );
    }

    #[test]
    fn test_split_empty_block() {
        assert_eq!(
            split_frontmatter("---\n---\nBody"),
            Split::Present { yaml: "", body: "Body" }
        );
    }

    #[test]
    fn test_split_ignores_longer_rule() {
        let doc = "---\ntitle: Hi\n----\nmore: x\n---\n";
        assert_eq!(
            split_frontmatter(doc),
            Split::Present {
                yaml: "title: Hi\n----\nmore: x\n",
                body: ""
            }
        );
    }

    #[test]
    fn test_split_unterminated() {
        assert_eq!(split_frontmatter("---\ntitle: Hi\n"), Split::Unterminated);
    }

    #[test]
    fn test_parse_fields() {
        let fm = parse_frontmatter(
            "title: Hello\ndate: 2020-05-01\ndescription: \"A post\"\ntags: [a]\n",
        )
        .unwrap();
        assert_eq!(fm.title.as_deref(), Some("Hello"));
        assert_eq!(fm.date.as_deref(), Some("2020-05-01"));
        assert_eq!(fm.description.as_deref(), Some("A post"));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_frontmatter("\n").unwrap(), Frontmatter::default());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(parse_frontmatter("title: [unclosed\n").is_err());
    }
}
