//! The post listing on the home page.

use crate::markdown::escape_html;
use crate::model::Post;
use crate::style::InlineStyle;

use super::{RenderContext, Seo, render_bio, render_page};

/// Render the home page listing `posts` in the given order.
pub fn render_index(ctx: &RenderContext<'_>, posts: &[Post]) -> String {
    let mut main = render_bio(ctx);
    for post in posts {
        main.push_str(&render_post_summary(ctx, post));
    }
    render_page(ctx, &Seo::new("All posts"), true, &main)
}

/// One listing entry.
///
/// Descriptions are inserted as markup; excerpt fallbacks are escaped.
pub fn render_post_summary(ctx: &RenderContext<'_>, post: &Post) -> String {
    let heading_style = InlineStyle::new().with("margin-bottom", ctx.typography().rhythm(0.25));

    let mut out = String::from("<article>\n<header>\n");
    out.push_str(&format!(
        "<h3 style=\"{}\"><a style=\"box-shadow: none\" href=\"{}\">{}</a></h3>\n",
        heading_style.to_attr_value(),
        escape_html(&post.slug),
        escape_html(post.display_title())
    ));
    if let Some(date) = post.formatted_date() {
        out.push_str(&format!("<small>{date}</small>\n"));
    }
    out.push_str("</header>\n<section>\n");
    out.push_str(&format!("<p>{}</p>\n", post.summary_html()));
    out.push_str("</section>\n</article>\n");
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::NaiveDate;

    use super::*;
    use crate::markdown::{ParseOptions, parse_document};
    use crate::render::test_helpers::site;

    fn post(slug: &str, title: Option<&str>) -> Post {
        Post {
            slug: slug.into(),
            source: PathBuf::from("p.md"),
            title: title.map(String::from),
            description: Some("With <em>markup</em>".into()),
            date: NaiveDate::from_ymd_opt(2021, 3, 7).and_then(|d| d.and_hms_opt(0, 0, 0)),
            excerpt: String::new(),
            body_html: String::new(),
            headings: Vec::new(),
            time_to_read: 1,
        }
    }

    #[test]
    fn test_summary_entry() {
        let s = site();
        let html = render_post_summary(&RenderContext::new(&s, 2024), &post("/a/", Some("A")));
        assert!(html.contains(
            "<h3 style=\"margin-bottom: 0.3775rem\"><a style=\"box-shadow: none\" href=\"/a/\">A</a></h3>"
        ));
        assert!(html.contains("<small>March 07, 2021</small>"));
        assert!(html.contains("<p>With <em>markup</em></p>"));
    }

    #[test]
    fn test_excerpt_summary_is_escaped() {
        let s = site();
        let doc = parse_document("Avoid the `<script>` tag & friends.\n", &ParseOptions::default())
            .unwrap();
        let mut p = post("/code/", Some("Code"));
        p.description = None;
        p.excerpt = doc.excerpt;
        let html = render_post_summary(&RenderContext::new(&s, 2024), &p);
        assert!(html.contains("<p>Avoid the &lt;script&gt; tag &amp; friends.</p>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_title_falls_back_to_slug() {
        let s = site();
        let html = render_post_summary(&RenderContext::new(&s, 2024), &post("/untitled/", None));
        assert!(html.contains(">/untitled/</a></h3>"));
    }

    #[test]
    fn test_index_order_and_chrome() {
        let s = site();
        let posts = vec![post("/new/", Some("New")), post("/old/", Some("Old"))];
        let html = render_index(&RenderContext::new(&s, 2024), &posts);
        assert!(html.contains("<title>All posts | Sean Norwood</title>"));
        assert!(html.contains("Written by <strong>Sean Norwood</strong>"));
        let new_at = html.find(">New</a>").unwrap();
        let old_at = html.find(">Old</a>").unwrap();
        assert!(new_at < old_at);
    }
}
