//! Site loading and static output.
//!
//! [`Site::load`] walks a content directory and parses every Markdown/MDX
//! file into a [`Post`]; [`Site::build`] renders all pages into an output
//! directory.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Utc};
use percent_encoding::percent_decode_str;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::markdown::{ParseOptions, parse_document};
use crate::model::{Post, PostStub};
use crate::render::{RenderContext, render_index, render_not_found, render_post};
use crate::util::{asset_href, decode_text, parse_date, slug_for_path};

/// File extensions treated as posts.
const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Per-build switches.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Inline the stylesheet into every page.
    pub dev: bool,
    /// Year shown in page footers.
    pub year: i32,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            dev: false,
            year: Utc::now().year(),
        }
    }
}

/// What a build wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub posts: usize,
    pub pages: usize,
    pub assets: usize,
}

/// A blog: its config plus posts ordered newest first.
#[derive(Debug)]
pub struct Site {
    config: SiteConfig,
    posts: Vec<Post>,
}

impl Site {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            posts: Vec::new(),
        }
    }

    /// Create a site and load every post under `content_dir`.
    pub fn load(config: SiteConfig, content_dir: impl AsRef<Path>) -> Result<Self> {
        let mut site = Self::new(config);
        site.load_posts(content_dir.as_ref())?;
        Ok(site)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Add a post, keeping date order.
    pub fn add_post(&mut self, post: Post) {
        self.posts.push(post);
        sort_posts(&mut self.posts);
    }

    fn load_posts(&mut self, content_dir: &Path) -> Result<()> {
        if !content_dir.is_dir() {
            return Err(Error::io_at(
                content_dir,
                io::Error::new(io::ErrorKind::NotFound, "content directory not found"),
            ));
        }

        let options = self.config.parse_options();
        let mut sources: HashMap<String, PathBuf> = HashMap::new();
        for entry in WalkDir::new(content_dir).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() || !is_content_file(entry.path()) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(content_dir)
                .unwrap_or(entry.path());
            let post = load_post(entry.path(), relative, &options)?;
            if post.slug == "/" {
                warn!(path = %entry.path().display(), "skipping post that would replace the home page");
                continue;
            }
            if let Some(first) = sources.get(&post.slug) {
                return Err(Error::DuplicateSlug {
                    slug: post.slug,
                    first: first.clone(),
                    second: post.source,
                });
            }
            sources.insert(post.slug.clone(), post.source.clone());
            debug!(slug = %post.slug, headings = post.headings.len(), "loaded post");
            self.posts.push(post);
        }

        sort_posts(&mut self.posts);
        info!(count = self.posts.len(), dir = %content_dir.display(), "loaded posts");
        Ok(())
    }

    /// Previous (older) and next (newer) neighbours of the post at `index`.
    pub fn siblings(&self, index: usize) -> (Option<PostStub>, Option<PostStub>) {
        let previous = self.posts.get(index + 1).map(Post::stub);
        let next = index
            .checked_sub(1)
            .and_then(|i| self.posts.get(i))
            .map(Post::stub);
        (previous, next)
    }

    /// Render every page into `out_dir`.
    pub fn build(&self, out_dir: impl AsRef<Path>, options: BuildOptions) -> Result<BuildReport> {
        let out_dir = out_dir.as_ref();
        create_dir(out_dir)?;

        let typography = &self.config.typography;
        let mut report = BuildReport::default();

        write_file(&out_dir.join("styles.css"), &typography.stylesheet())?;
        report.assets += 1;

        let avatar_href = self.publish_avatar(out_dir)?;
        if avatar_href.is_some() {
            report.assets += 1;
        }

        let ctx = RenderContext::new(&self.config, options.year)
            .with_dev(options.dev)
            .with_avatar(avatar_href.as_deref());

        for (i, post) in self.posts.iter().enumerate() {
            let (previous, next) = self.siblings(i);
            let html = render_post(&ctx, post, previous.as_ref(), next.as_ref());
            let dir = out_dir.join(output_dir_for_slug(&post.slug));
            create_dir(&dir)?;
            write_file(&dir.join("index.html"), &html)?;
            debug!(slug = %post.slug, "rendered post");
            report.posts += 1;
            report.pages += 1;
        }

        write_file(&out_dir.join("index.html"), &render_index(&ctx, &self.posts))?;
        write_file(&out_dir.join("404.html"), &render_not_found(&ctx))?;
        report.pages += 2;

        info!(
            posts = report.posts,
            pages = report.pages,
            dev = options.dev,
            out = %out_dir.display(),
            "site built"
        );
        Ok(report)
    }

    /// Copy the avatar image to the output root and return its URL.
    fn publish_avatar(&self, out_dir: &Path) -> Result<Option<String>> {
        let Some(avatar) = self.config.author.avatar.as_deref() else {
            return Ok(None);
        };
        let Some(name) = avatar.file_name() else {
            warn!(path = %avatar.display(), "avatar path has no file name");
            return Ok(None);
        };
        if !avatar.is_file() {
            warn!(path = %avatar.display(), "avatar not found, rendering bio without it");
            return Ok(None);
        }

        fs::copy(avatar, out_dir.join(name)).map_err(|e| Error::io_at(avatar, e))?;
        Ok(Some(asset_href(&name.to_string_lossy())))
    }
}

/// Order posts newest first; undated posts last, ties by slug.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
}

/// Read and parse one content file.
///
/// `relative` is the path under the content root and determines the slug.
pub fn load_post(path: &Path, relative: &Path, options: &ParseOptions) -> Result<Post> {
    let bytes = fs::read(path).map_err(|e| Error::io_at(path, e))?;
    let text = decode_text(&bytes);

    let doc = parse_document(&text, options).map_err(|e| Error::InvalidFrontmatter {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let date = match doc.frontmatter.date.as_deref() {
        Some(raw) => Some(parse_date(raw).ok_or_else(|| Error::InvalidDate {
            path: path.to_path_buf(),
            value: raw.to_string(),
        })?),
        None => None,
    };

    Ok(Post {
        slug: slug_for_path(relative),
        source: path.to_path_buf(),
        title: doc.frontmatter.title,
        description: doc.frontmatter.description,
        date,
        excerpt: doc.excerpt,
        body_html: doc.body_html,
        headings: doc.headings,
        time_to_read: doc.time_to_read,
    })
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| CONTENT_EXTENSIONS.iter().any(|c| e.eq_ignore_ascii_case(c)))
}

/// Filesystem directory (relative to the output root) for a URL slug.
fn output_dir_for_slug(slug: &str) -> PathBuf {
    slug.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
        .collect()
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io_at(dir, e))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| Error::io_at(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(slug: &str, date: Option<(i32, u32, u32)>) -> Post {
        Post {
            slug: slug.into(),
            source: PathBuf::from("x.md"),
            title: Some(slug.trim_matches('/').to_uppercase()),
            description: None,
            date: date.and_then(|(y, m, d)| {
                NaiveDate::from_ymd_opt(y, m, d).and_then(|d| d.and_hms_opt(0, 0, 0))
            }),
            excerpt: String::new(),
            body_html: String::new(),
            headings: Vec::new(),
            time_to_read: 1,
        }
    }

    #[test]
    fn test_sort_newest_first_undated_last() {
        let mut posts = vec![
            post("/undated/", None),
            post("/old/", Some((2019, 1, 1))),
            post("/new/", Some((2021, 1, 1))),
        ];
        sort_posts(&mut posts);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["/new/", "/old/", "/undated/"]);
    }

    #[test]
    fn test_siblings() {
        let mut site = Site::new(SiteConfig::new("T"));
        site.add_post(post("/a/", Some((2020, 1, 1))));
        site.add_post(post("/b/", Some((2020, 2, 1))));
        site.add_post(post("/c/", Some((2020, 3, 1))));

        // Newest first: c, b, a
        assert_eq!(site.siblings(0), (Some(PostStub::new("/b/", "B")), None));
        assert_eq!(
            site.siblings(1),
            (Some(PostStub::new("/a/", "A")), Some(PostStub::new("/c/", "C")))
        );
        assert_eq!(site.siblings(2), (None, Some(PostStub::new("/b/", "B"))));
    }

    #[test]
    fn test_output_dir_for_slug() {
        assert_eq!(output_dir_for_slug("/hello/"), PathBuf::from("hello"));
        assert_eq!(output_dir_for_slug("/notes/a%20b/"), PathBuf::from("notes").join("a b"));
    }

    #[test]
    fn test_is_content_file() {
        assert!(is_content_file(Path::new("a.md")));
        assert!(is_content_file(Path::new("a.MDX")));
        assert!(!is_content_file(Path::new("a.txt")));
        assert!(!is_content_file(Path::new("README")));
    }

    #[test]
    fn test_missing_content_dir() {
        let err = Site::load(SiteConfig::new("T"), "/nonexistent/content").unwrap_err();
        assert!(matches!(err, Error::IoAt { .. }));
    }
}
