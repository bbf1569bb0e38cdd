//! Document shell shared by every page.

use crate::markdown::escape_html;
use crate::style::{InlineStyle, ToCss};

use super::{RenderContext, Seo};

/// Wrap page content in the full HTML document.
///
/// The root page gets the site title as a large `<h1>`; other pages get a
/// smaller `<h3>`. Both link home.
pub fn render_page(ctx: &RenderContext<'_>, seo: &Seo<'_>, is_root: bool, main: &str) -> String {
    let site = ctx.site;
    let t = ctx.typography();

    let mut out = String::with_capacity(main.len() + 2048);
    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html lang=\"{}\">\n", escape_html(seo.lang(site))));
    out.push_str("<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&seo.head_html(site));
    out.push_str("<link rel=\"stylesheet\" href=\"/styles.css\">\n");
    if ctx.dev {
        out.push_str("<style>\n");
        out.push_str(&t.stylesheet());
        out.push_str("</style>\n");
    }
    out.push_str("</head>\n<body>\n");

    let column = InlineStyle::new()
        .with("margin-left", "auto")
        .with("margin-right", "auto")
        .with("max-width", t.rhythm(24.0))
        .with(
            "padding",
            format!(
                "{} {}",
                t.rhythm(1.5).to_css_string(),
                t.rhythm(3.0 / 4.0).to_css_string()
            ),
        );
    out.push_str(&format!("<div style=\"{}\">\n", column.to_attr_value()));

    let home_link = format!(
        "<a style=\"box-shadow: none; color: inherit\" href=\"/\">{}</a>",
        escape_html(&site.title)
    );
    out.push_str("<header>\n");
    if is_root {
        let style = InlineStyle::new()
            .with_scale(t.scale(1.5))
            .with("margin-bottom", t.rhythm(1.5))
            .with("margin-top", 0.0);
        out.push_str(&format!("<h1 style=\"{}\">{home_link}</h1>\n", style.to_attr_value()));
    } else {
        let family = t.header_font_family.join(", ");
        let style = InlineStyle::new()
            .with("font-family", family)
            .with("margin-top", 0.0);
        out.push_str(&format!(
            "<h3 style=\"{}\">{home_link}</h3>\n",
            style.to_attr_value()
        ));
    }
    out.push_str("</header>\n<main>\n");
    out.push_str(main);
    out.push_str("</main>\n");
    out.push_str(&format!("<footer>\u{a9} {}</footer>\n", ctx.year));
    out.push_str("</div>\n</body>\n</html>\n");
    out
}
