//! Site configuration loaded from YAML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::markdown::{AnchorPolicy, ParseOptions};
use crate::style::Typography;

/// Author shown in the bio block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    /// Avatar image, relative to the config file.
    #[serde(default)]
    pub avatar: Option<PathBuf>,
}

/// Social handles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Social {
    /// Twitter handle without the `@`.
    #[serde(default)]
    pub twitter: String,
}

/// Site-level metadata and build settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub social: Social,
    /// Heading depth listed in each post's TOC.
    #[serde(default = "default_toc_depth")]
    pub toc_depth: u8,
    #[serde(default)]
    pub anchors: AnchorPolicy,
    #[serde(default = "default_excerpt_length")]
    pub excerpt_length: usize,
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,
    #[serde(default)]
    pub typography: Typography,
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_toc_depth() -> u8 {
    2
}

fn default_excerpt_length() -> usize {
    160
}

fn default_words_per_minute() -> u32 {
    265
}

impl SiteConfig {
    /// Minimal config with the given title and defaults elsewhere.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            site_url: None,
            lang: default_lang(),
            author: Author::default(),
            social: Social::default(),
            toc_depth: default_toc_depth(),
            anchors: AnchorPolicy::default(),
            excerpt_length: default_excerpt_length(),
            words_per_minute: default_words_per_minute(),
            typography: Typography::default(),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: SiteConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file. A relative avatar path is resolved against the
    /// file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io_at(path, e))?;
        let mut config = Self::from_yaml_str(&text)?;

        if let Some(avatar) = config.author.avatar.take() {
            let resolved = match path.parent() {
                Some(dir) if avatar.is_relative() => dir.join(avatar),
                _ => avatar,
            };
            config.author.avatar = Some(resolved);
        }
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidConfig("title must not be empty".into()));
        }
        if !(1..=6).contains(&self.toc_depth) {
            return Err(Error::InvalidConfig(format!(
                "toc_depth must be between 1 and 6, got {}",
                self.toc_depth
            )));
        }
        if self.words_per_minute == 0 {
            return Err(Error::InvalidConfig("words_per_minute must be positive".into()));
        }
        let t = &self.typography;
        if t.base_font_size <= 0.0 || t.base_line_height <= 0.0 || t.scale_ratio <= 0.0 {
            return Err(Error::InvalidConfig(
                "typography sizes and ratio must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            toc_depth: self.toc_depth,
            anchors: self.anchors,
            excerpt_length: self.excerpt_length,
            words_per_minute: self.words_per_minute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "
title: Sean Norwood
description: A blog about web development.
site_url: https://blog.example.com/
author:
  name: Sean Norwood
  summary: who blogs about web development
social:
  twitter: stiforr
";

    #[test]
    fn test_parse_with_defaults() {
        let config = SiteConfig::from_yaml_str(SITE).unwrap();
        assert_eq!(config.title, "Sean Norwood");
        assert_eq!(config.social.twitter, "stiforr");
        assert_eq!(config.lang, "en");
        assert_eq!(config.toc_depth, 2);
        assert_eq!(config.excerpt_length, 160);
        assert_eq!(config.anchors, AnchorPolicy::Verbatim);
        assert_eq!(config.typography, Typography::default());
    }

    #[test]
    fn test_anchor_policy_override() {
        let config =
            SiteConfig::from_yaml_str("title: T\nanchors: disambiguate\n").unwrap();
        assert_eq!(config.parse_options().anchors, AnchorPolicy::Disambiguate);
    }

    #[test]
    fn test_missing_title_is_error() {
        assert!(matches!(
            SiteConfig::from_yaml_str("description: x\n"),
            Err(Error::Yaml(_))
        ));
        assert!(matches!(
            SiteConfig::from_yaml_str("title: ''\n"),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bad_toc_depth() {
        assert!(matches!(
            SiteConfig::from_yaml_str("title: T\ntoc_depth: 7\n"),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_path_resolves_avatar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yaml");
        std::fs::write(&path, "title: T\nauthor:\n  name: A\n  avatar: assets/me.jpeg\n").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.author.avatar, Some(dir.path().join("assets/me.jpeg")));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SiteConfig::from_path("/nonexistent/site.yaml").unwrap_err();
        assert!(matches!(err, Error::IoAt { .. }));
    }
}
