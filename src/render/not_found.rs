use super::{RenderContext, Seo, render_page};

/// The page served for unknown routes.
pub fn render_not_found(ctx: &RenderContext<'_>) -> String {
    let main = "<h1>Not Found</h1>\n<p>You just hit a route that doesn&#39;t exist... the sadness.</p>\n";
    render_page(ctx, &Seo::new("404: Not Found"), false, main)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_helpers::site;

    #[test]
    fn test_not_found_page() {
        let s = site();
        let html = render_not_found(&RenderContext::new(&s, 2024));
        assert!(html.contains("<title>404: Not Found | Sean Norwood</title>"));
        assert!(html.contains("<h1>Not Found</h1>"));
    }
}
