//! Article pages.

use crate::markdown::escape_html;
use crate::model::{Post, PostStub};
use crate::style::InlineStyle;
use crate::toc::{Toc, headings_at_depth};

use super::{RenderContext, Seo, render_bio, render_page};

/// Render a full post page: head tags, TOC, article and sibling navigation.
pub fn render_post(
    ctx: &RenderContext<'_>,
    post: &Post,
    previous: Option<&PostStub>,
    next: Option<&PostStub>,
) -> String {
    let seo = Seo::new(post.display_title()).with_description(post.summary());
    let main = render_article(ctx, post, previous, next);
    render_page(ctx, &seo, false, &main)
}

/// The page body without the document shell.
pub fn render_article(
    ctx: &RenderContext<'_>,
    post: &Post,
    previous: Option<&PostStub>,
    next: Option<&PostStub>,
) -> String {
    let t = ctx.typography();
    let listed = headings_at_depth(&post.headings, ctx.site.toc_depth);
    let toc = Toc::build(Some(&listed), ctx.site.anchors);

    let title_style = InlineStyle::new()
        .with("margin-top", t.rhythm(1.0))
        .with("margin-bottom", 0.0);
    let meta_style = InlineStyle::new()
        .with_scale(t.scale(-1.0 / 5.0))
        .with("display", "block")
        .with("margin-bottom", t.rhythm(1.0))
        .to_attr_value();

    let mut out = toc.render_html();
    out.push_str("<article>\n<header>\n");
    out.push_str(&format!(
        "<h1 style=\"{}\">{}</h1>\n",
        title_style.to_attr_value(),
        escape_html(post.display_title())
    ));
    out.push_str(&format!(
        "<p style=\"{meta_style}\">{}</p>\n",
        escape_html(post.summary())
    ));
    out.push_str(&format!(
        "<p style=\"{meta_style}\">{} minutes</p>\n",
        post.time_to_read
    ));
    out.push_str("</header>\n<section>\n");
    out.push_str(&post.body_html);
    out.push_str("</section>\n");
    out.push_str(&format!(
        "<hr style=\"{}\">\n",
        InlineStyle::new()
            .with("margin-bottom", t.rhythm(1.0))
            .to_attr_value()
    ));
    out.push_str("<footer>\n");
    out.push_str(&render_bio(ctx));
    out.push_str("</footer>\n</article>\n");
    out.push_str(&render_nav(previous, next));
    out
}

/// Previous/next links; an absent sibling leaves its slot empty.
pub fn render_nav(previous: Option<&PostStub>, next: Option<&PostStub>) -> String {
    let list_style = InlineStyle::new()
        .with("display", "flex")
        .with("flex-wrap", "wrap")
        .with("justify-content", "space-between")
        .with("list-style", "none")
        .with("padding", "0");

    let mut out = format!("<nav>\n<ul style=\"{}\">\n<li>", list_style.to_attr_value());
    if let Some(prev) = previous {
        out.push_str(&format!(
            "<a href=\"{}\" rel=\"prev\">\u{2190} {}</a>",
            escape_html(&prev.slug),
            escape_html(&prev.title)
        ));
    }
    out.push_str("</li>\n<li>");
    if let Some(next) = next {
        out.push_str(&format!(
            "<a href=\"{}\" rel=\"next\">{} \u{2192}</a>",
            escape_html(&next.slug),
            escape_html(&next.title)
        ));
    }
    out.push_str("</li>\n</ul>\n</nav>\n");
    out
}
