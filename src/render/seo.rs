//! Document head tags for search engines and social cards.

use crate::config::SiteConfig;
use crate::markdown::escape_html;

/// Which attribute names a meta tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaAttr {
    /// `<meta name="…">`
    Name(String),
    /// `<meta property="…">` (Open Graph)
    Property(String),
}

/// One `<meta>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub content: String,
}

impl MetaTag {
    pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Name(name.into()),
            content: content.into(),
        }
    }

    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Property(property.into()),
            content: content.into(),
        }
    }

    pub fn to_html(&self) -> String {
        let (attr, key) = match &self.attr {
            MetaAttr::Name(k) => ("name", k),
            MetaAttr::Property(k) => ("property", k),
        };
        format!(
            "<meta {attr}=\"{}\" content=\"{}\">",
            escape_html(key),
            escape_html(&self.content)
        )
    }
}

/// Page-level SEO overrides.
#[derive(Debug, Clone, Default)]
pub struct Seo<'a> {
    pub title: &'a str,
    /// Falls back to the site description when absent.
    pub description: Option<&'a str>,
    /// Falls back to the site language when absent.
    pub lang: Option<&'a str>,
    /// Appended after the standard tags.
    pub meta: Vec<MetaTag>,
}

impl<'a> Seo<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_lang(mut self, lang: &'a str) -> Self {
        self.lang = Some(lang);
        self
    }

    pub fn with_meta(mut self, tag: MetaTag) -> Self {
        self.meta.push(tag);
        self
    }

    /// `"{title} | {site title}"`.
    pub fn full_title(&self, site: &SiteConfig) -> String {
        format!("{} | {}", self.title, site.title)
    }

    pub fn lang<'s>(&'s self, site: &'s SiteConfig) -> &'s str {
        self.lang.unwrap_or(&site.lang)
    }

    pub fn meta_description<'s>(&'s self, site: &'s SiteConfig) -> &'s str {
        self.description.unwrap_or(&site.description)
    }

    /// The fixed tag set followed by any extra tags.
    pub fn meta_tags(&self, site: &SiteConfig) -> Vec<MetaTag> {
        let description = self.meta_description(site);
        let mut tags = vec![
            MetaTag::name("description", description),
            MetaTag::property("og:title", self.title),
            MetaTag::property("og:description", description),
            MetaTag::property("og:type", "website"),
            MetaTag::name("twitter:card", "summary"),
            MetaTag::name("twitter:creator", site.social.twitter.as_str()),
            MetaTag::name("twitter:title", self.title),
            MetaTag::name("twitter:description", description),
        ];
        tags.extend(self.meta.iter().cloned());
        tags
    }

    /// `<title>` plus meta tags, one per line.
    pub fn head_html(&self, site: &SiteConfig) -> String {
        let mut out = format!("<title>{}</title>\n", escape_html(&self.full_title(site)));
        for tag in self.meta_tags(site) {
            out.push_str(&tag.to_html());
            out.push('\n');
        }
        out
    }
}
