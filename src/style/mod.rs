//! Typography scale and CSS serialization.
//!
//! This module contains:
//! - [`Typography`]: the one style-scale value every renderer borrows
//! - [`Rem`], [`FontScale`] and [`InlineStyle`]: CSS values and declaration lists
//! - [`ToCss`]: serialization into a CSS buffer

mod inline;
mod typography;

pub use inline::{InlineStyle, Rule};
pub use typography::{FontScale, Typography};

/// Serialize a value as CSS.
pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

/// A length in `rem`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rem(pub f64);

impl ToCss for Rem {
    fn to_css(&self, buf: &mut String) {
        let n = format_number(self.0);
        buf.push_str(&n);
        if n != "0" {
            buf.push_str("rem");
        }
    }
}

impl ToCss for &str {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl ToCss for String {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl ToCss for f64 {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(&format_number(*self));
    }
}

/// Format a number with at most four decimals and no trailing zeros.
pub(crate) fn format_number(v: f64) -> String {
    if v.abs() < 0.00005 {
        return "0".to_string();
    }
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.51), "1.51");
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.00001), "0");
        assert_eq!(format_number(0.37750), "0.3775");
        assert_eq!(format_number(1.0 / 3.0), "0.3333");
    }

    #[test]
    fn test_rem_to_css() {
        assert_eq!(Rem(1.51).to_css_string(), "1.51rem");
        assert_eq!(Rem(0.0).to_css_string(), "0");
    }
}
