//! Page renderers.
//!
//! Every renderer is a pure function of its inputs and a borrowed
//! [`RenderContext`]; nothing here touches the filesystem.
//!
//! - [`seo`]: `<title>` and meta tags
//! - [`layout`]: the HTML document shell shared by all pages
//! - [`bio`]: author block
//! - [`post`]: article pages with TOC and sibling navigation
//! - [`index`]: the post listing
//! - [`not_found`]: the 404 page

mod bio;
mod index;
mod layout;
mod not_found;
mod post;
mod seo;

pub use bio::render_bio;
pub use index::{render_index, render_post_summary};
pub use layout::render_page;
pub use not_found::render_not_found;
pub use post::{render_article, render_nav, render_post};
pub use seo::{MetaAttr, MetaTag, Seo};

use crate::config::SiteConfig;
use crate::style::Typography;

/// Everything a renderer may read besides the page's own data.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub site: &'a SiteConfig,
    /// Inline the stylesheet into every page head.
    pub dev: bool,
    /// Year shown in the page footer.
    pub year: i32,
    /// Public URL of the author avatar, if one was published.
    pub avatar_href: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    pub fn new(site: &'a SiteConfig, year: i32) -> Self {
        Self {
            site,
            dev: false,
            year,
            avatar_href: None,
        }
    }

    /// The site's typography scale.
    pub fn typography(&self) -> &'a Typography {
        &self.site.typography
    }

    pub fn with_dev(mut self, dev: bool) -> Self {
        self.dev = dev;
        self
    }

    pub fn with_avatar(mut self, href: Option<&'a str>) -> Self {
        self.avatar_href = href;
        self
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use super::*;
    use crate::config::{Author, Social};

    pub fn site() -> SiteConfig {
        let mut site = SiteConfig::new("Sean Norwood");
        site.description = "A blog about the web.".into();
        site.author = Author {
            name: "Sean Norwood".into(),
            summary: "who blogs about web development".into(),
            avatar: None,
        };
        site.social = Social {
            twitter: "stiforr".into(),
        };
        site
    }
}
