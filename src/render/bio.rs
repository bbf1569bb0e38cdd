//! Author bio block.

use crate::markdown::escape_html;
use crate::style::InlineStyle;

use super::RenderContext;

pub fn render_bio(ctx: &RenderContext<'_>) -> String {
    let t = ctx.typography();
    let author = &ctx.site.author;

    let container = InlineStyle::new()
        .with("display", "flex")
        .with("margin-bottom", t.rhythm(2.5));

    let mut out = format!("<div style=\"{}\">\n", container.to_attr_value());

    if let Some(href) = ctx.avatar_href {
        let style = InlineStyle::new()
            .with("margin-right", t.rhythm(0.5))
            .with("margin-bottom", 0.0)
            .with("min-width", "50px")
            .with("border-radius", "50%");
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" width=\"50\" height=\"50\" style=\"{}\">\n",
            escape_html(href),
            escape_html(&author.name),
            style.to_attr_value()
        ));
    }

    out.push_str(&format!(
        "<p>Written by <strong>{}</strong> {}",
        escape_html(&author.name),
        escape_html(&author.summary)
    ));
    let handle = ctx.site.social.twitter.as_str();
    if !handle.is_empty() {
        out.push_str(&format!(
            " <a href=\"https://twitter.com/{h}\">Follow @{h} on Twitter</a>",
            h = escape_html(handle)
        ));
    }
    out.push_str("</p>\n</div>\n");
    out
}
