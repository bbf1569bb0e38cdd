//! Vertical-rhythm typography.
//!
//! A [`Typography`] is built once per site from the config and borrowed by
//! every renderer. `rhythm` gives spacing in multiples of the base line
//! height; `scale` gives a modular font size with a line height snapped to
//! whole rhythm lines.

use serde::{Deserialize, Serialize};

use super::{InlineStyle, Rem, Rule, ToCss};

/// Minimum padding (px) kept above and below glyphs when snapping line heights.
const MIN_LINE_PADDING: f64 = 2.0;

/// A font size with a matching unitless line height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    pub font_size: Rem,
    pub line_height: f64,
}

/// Typography settings and the scale functions derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    /// Root font size in px.
    pub base_font_size: f64,
    /// Unitless body line height.
    pub base_line_height: f64,
    /// Ratio between successive `scale` steps.
    pub scale_ratio: f64,
    pub header_font_family: Vec<String>,
    pub body_font_family: Vec<String>,
    pub header_weight: u16,
    pub text_color: String,
    pub link_color: String,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            base_font_size: 16.0,
            base_line_height: 1.51,
            scale_ratio: 2.0,
            header_font_family: vec!["Montserrat".into(), "sans-serif".into()],
            body_font_family: vec!["Merriweather".into(), "Georgia".into(), "serif".into()],
            header_weight: 700,
            text_color: "#D0D0D1".into(),
            link_color: "#ff483b".into(),
        }
    }
}

impl Typography {
    /// Spacing of `lines` base line heights.
    pub fn rhythm(&self, lines: f64) -> Rem {
        Rem(lines * self.base_line_height)
    }

    /// Font size `scale_ratio ^ value` with its line height snapped to the rhythm.
    pub fn scale(&self, value: f64) -> FontScale {
        let ratio = self.scale_ratio.powf(value);
        let font_px = self.base_font_size * ratio;
        let line_px = self.base_font_size * self.base_line_height;
        let lines = ((font_px + 2.0 * MIN_LINE_PADDING) / line_px).ceil().max(1.0);

        FontScale {
            font_size: Rem(ratio),
            line_height: lines * line_px / font_px,
        }
    }

    /// The site stylesheet: base sizes, fonts, heading scale, colors and links.
    pub fn stylesheet(&self) -> String {
        let block = InlineStyle::new()
            .with("margin", format!("0 0 {} 0", self.rhythm(1.0).to_css_string()));

        let link_background = format!(
            "linear-gradient(to top, rgba(0, 0, 0, 0), rgba(0, 0, 0, 0) 1px, {c} 1px, {c} 2px, rgba(0, 0, 0, 0) 2px)",
            c = self.link_color
        );

        let rules = [
            Rule::new(
                "html",
                InlineStyle::new()
                    .with("font-size", format!("{}%", super::format_number(self.base_font_size / 16.0 * 100.0)))
                    .with("line-height", self.base_line_height)
                    .with("box-sizing", "border-box"),
            ),
            Rule::new(
                "body",
                InlineStyle::new()
                    .with("margin", "0")
                    .with("font-family", font_stack(&self.body_font_family))
                    .with("color", self.text_color.as_str()),
            ),
            Rule::new(
                "h1, h2, h3, h4, h5, h6",
                block
                    .clone()
                    .with("font-family", font_stack(&self.header_font_family))
                    .with("font-weight", f64::from(self.header_weight))
                    .with("color", self.text_color.as_str()),
            ),
            Rule::new("h1", InlineStyle::new().with_scale(self.scale(1.0))),
            Rule::new("h2", InlineStyle::new().with_scale(self.scale(3.0 / 5.0))),
            Rule::new("h3", InlineStyle::new().with_scale(self.scale(2.0 / 5.0))),
            Rule::new("h4", InlineStyle::new().with_scale(self.scale(0.0))),
            Rule::new("h5", InlineStyle::new().with_scale(self.scale(-1.0 / 5.0))),
            Rule::new("h6", InlineStyle::new().with_scale(self.scale(-1.5 / 5.0))),
            Rule::new("p, ul, ol, blockquote, pre, table, hr", block),
            Rule::new(
                "small, em, li, p, footer",
                InlineStyle::new().with("color", self.text_color.as_str()),
            ),
            Rule::new(
                "a",
                InlineStyle::new()
                    .with("color", self.link_color.as_str())
                    .with("text-decoration", "none")
                    .with("text-shadow", "none")
                    .with("background-image", link_background),
            ),
            Rule::new(
                "a:hover, a:active",
                InlineStyle::new()
                    .with("text-shadow", "none")
                    .with("background-image", "none"),
            ),
        ];

        let mut css = String::new();
        for rule in &rules {
            rule.to_css(&mut css);
        }
        css
    }
}

/// Join font names, quoting everything except generic families.
fn font_stack(families: &[String]) -> String {
    families
        .iter()
        .map(|f| match f.as_str() {
            "serif" | "sans-serif" | "monospace" | "cursive" | "fantasy" | "system-ui" => f.clone(),
            _ => format!("'{f}'"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_rhythm() {
        let t = Typography::default();
        assert_eq!(t.rhythm(1.0).to_css_string(), "1.51rem");
        assert_eq!(t.rhythm(2.5).to_css_string(), "3.775rem");
        assert_eq!(t.rhythm(0.25).to_css_string(), "0.3775rem");
        assert_eq!(t.rhythm(0.0).to_css_string(), "0");
    }

    #[test]
    fn test_scale_base_step() {
        let s = Typography::default().scale(0.0);
        assert!(close(s.font_size.0, 1.0));
        assert!(close(s.line_height, 1.51));
    }

    #[test]
    fn test_scale_snaps_to_two_lines() {
        let s = Typography::default().scale(1.0);
        assert!(close(s.font_size.0, 2.0));
        // 32px text needs two 24.16px lines
        assert!(close(s.line_height, 48.32 / 32.0));
    }

    #[test]
    fn test_scale_small_text_gets_one_line() {
        let s = Typography::default().scale(-0.2);
        assert!(s.font_size.0 < 1.0);
        assert!(s.line_height > 1.51);
    }

    #[test]
    fn test_font_stack() {
        let stack = font_stack(&["Merriweather".into(), "Georgia".into(), "serif".into()]);
        assert_eq!(stack, "'Merriweather', 'Georgia', serif");
    }

    #[test]
    fn test_stylesheet_contains_overrides() {
        let css = Typography::default().stylesheet();
        assert!(css.contains("html { font-size: 100%; line-height: 1.51; box-sizing: border-box; }"));
        assert!(css.contains("a { color: #ff483b; text-decoration: none;"));
        assert!(css.contains("a:hover, a:active { text-shadow: none; background-image: none; }"));
        assert!(css.contains("h1 { font-size: 2rem;"));
        assert!(css.contains("small, em, li, p, footer { color: #D0D0D1; }"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let t: Typography = serde_yaml::from_str("base_line_height: 1.75\n").unwrap();
        assert!(close(t.base_line_height, 1.75));
        assert!(close(t.base_font_size, 16.0));
        assert_eq!(t.link_color, "#ff483b");
    }
}
