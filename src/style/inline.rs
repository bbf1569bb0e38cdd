//! Declaration lists for `style` attributes and stylesheet rules.

use crate::markdown::escape_html;

use super::{FontScale, ToCss};

/// An ordered list of CSS declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    declarations: Vec<(&'static str, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration.
    pub fn with(mut self, property: &'static str, value: impl ToCss) -> Self {
        self.declarations.push((property, value.to_css_string()));
        self
    }

    /// Append `font-size` and `line-height` from a scale step.
    pub fn with_scale(self, scale: FontScale) -> Self {
        self.with("font-size", scale.font_size)
            .with("line-height", scale.line_height)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// The declarations escaped for a double-quoted `style` attribute.
    pub fn to_attr_value(&self) -> String {
        escape_html(&self.to_css_string()).into_owned()
    }
}

impl ToCss for InlineStyle {
    fn to_css(&self, buf: &mut String) {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                buf.push_str("; ");
            }
            buf.push_str(property);
            buf.push_str(": ");
            buf.push_str(value);
        }
    }
}

/// A stylesheet rule: selector plus declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: &'static str,
    pub style: InlineStyle,
}

impl Rule {
    pub fn new(selector: &'static str, style: InlineStyle) -> Self {
        Self { selector, style }
    }
}

impl ToCss for Rule {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(self.selector);
        buf.push_str(" { ");
        self.style.to_css(buf);
        if !self.style.is_empty() {
            buf.push(';');
        }
        buf.push_str(" }\n");
    }
}
