//! # inkpost
//!
//! A small static blog generator: Markdown/MDX posts with YAML frontmatter
//! become HTML pages with a table of contents, SEO head tags, an author bio
//! and previous/next navigation.
//!
//! ## Features
//!
//! - Heading anchors and a flat table of contents per post
//! - Title template and Open Graph / Twitter card meta tags
//! - Home page listing newest first, 404 page
//! - Vertical-rhythm typography with a generated stylesheet
//!
//! ## Quick Start
//!
//! ```no_run
//! use inkpost::{BuildOptions, Site, SiteConfig};
//!
//! let config = SiteConfig::from_path("site.yaml").unwrap();
//! let site = Site::load(config, "content/blog").unwrap();
//! site.build("public", BuildOptions::default()).unwrap();
//! ```
//!
//! ## Tables of Contents
//!
//! Anchors come from heading text alone:
//!
//! ```
//! use inkpost::markdown::{AnchorPolicy, slugify};
//! use inkpost::toc::Toc;
//! use inkpost::Heading;
//!
//! assert_eq!(slugify("Getting Started"), "getting-started");
//!
//! let headings = vec![Heading::new(2, "Intro"), Heading::new(2, "Usage")];
//! let toc = Toc::build(Some(&headings), AnchorPolicy::Verbatim);
//! assert_eq!(toc.entries[1].anchor, "usage");
//! ```

pub mod config;
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
pub mod markdown;
pub mod model;
pub mod render;
pub mod site;
pub mod style;
pub mod toc;
pub(crate) mod util;

pub use config::{Author, SiteConfig, Social};
pub use error::{Error, Result};
pub use model::{Heading, Post, PostStub};
pub use site::{BuildOptions, BuildReport, Site};
pub use style::Typography;
pub use toc::{Toc, TocEntry};
