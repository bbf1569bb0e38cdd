//! inkpost - static blog generator

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use inkpost::logging::{LogFormat, init_logging};
use inkpost::markdown::ParseOptions;
use inkpost::site::load_post;
use inkpost::toc::{Toc, headings_at_depth};
use inkpost::{BuildOptions, Heading, Post, Site, SiteConfig};

#[derive(Parser)]
#[command(name = "inkpost")]
#[command(version, about = "Static blog generator", long_about = None)]
#[command(after_help = "EXAMPLES:
    inkpost build                          Build ./content/blog into ./public
    inkpost build --dev -v                 Build with inlined styles and info logs
    inkpost info content/blog/hello.md     Show a post's metadata and TOC")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Human, global = true)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Command {
    /// Render the whole site
    Build {
        /// Site config file
        #[arg(short, long, default_value = "site.yaml", env = "INKPOST_CONFIG")]
        config: PathBuf,

        /// Directory holding posts (.md, .mdx)
        #[arg(long, default_value = "content/blog")]
        content: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "public")]
        out: PathBuf,

        /// Inline the stylesheet into every page
        #[arg(long)]
        dev: bool,
    },
    /// Print one post's metadata, headings and TOC as JSON
    Info {
        /// Content file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Site config file (defaults apply when absent)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.verbose, cli.quiet);

    let result = match cli.command {
        Command::Build {
            config,
            content,
            out,
            dev,
        } => build(&config, &content, &out, dev, cli.quiet),
        Command::Info { file, config } => show_info(&file, config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build(config: &Path, content: &Path, out: &Path, dev: bool, quiet: bool) -> inkpost::Result<()> {
    let config = SiteConfig::from_path(config)?;
    let site = Site::load(config, content)?;
    let report = site.build(
        out,
        BuildOptions {
            dev,
            ..BuildOptions::default()
        },
    )?;

    if !quiet {
        println!(
            "Built {} posts ({} pages) into {}",
            report.posts,
            report.pages,
            out.display()
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct PostInfo<'a> {
    slug: &'a str,
    title: Option<&'a str>,
    description: Option<&'a str>,
    date: Option<String>,
    excerpt: &'a str,
    time_to_read: u32,
    headings: &'a [Heading],
    toc: Toc,
}

fn show_info(file: &Path, config: Option<&Path>) -> inkpost::Result<()> {
    let options = match config {
        Some(path) => SiteConfig::from_path(path)?.parse_options(),
        None => ParseOptions::default(),
    };

    let relative = file.file_name().map(Path::new).unwrap_or(file);
    let post = load_post(file, relative, &options)?;

    println!("{}", serde_json::to_string_pretty(&post_info(&post, &options))?);
    Ok(())
}

fn post_info<'a>(post: &'a Post, options: &ParseOptions) -> PostInfo<'a> {
    let listed = headings_at_depth(&post.headings, options.toc_depth);
    PostInfo {
        slug: &post.slug,
        title: post.title.as_deref(),
        description: post.description.as_deref(),
        date: post.formatted_date(),
        excerpt: &post.excerpt,
        time_to_read: post.time_to_read,
        headings: &post.headings,
        toc: Toc::build(Some(&listed), options.anchors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_info_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("hello.md");
        std::fs::write(
            &file,
            "---\ntitle: Hello\ndate: 2020-05-01\n---\nFirst words.\n\n## Setup\n\n### Detail\n",
        )
        .unwrap();

        let options = ParseOptions::default();
        let post = load_post(&file, Path::new("hello.md"), &options).unwrap();
        let json = serde_json::to_value(post_info(&post, &options)).unwrap();

        assert_eq!(json["slug"], "/hello/");
        assert_eq!(json["title"], "Hello");
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["date"], "May 01, 2020");
        assert_eq!(json["excerpt"], "First words.");
        assert_eq!(json["time_to_read"], 1);
        assert_eq!(json["headings"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["headings"][1]["depth"], 3);
        assert_eq!(
            json["toc"]["entries"],
            serde_json::json!([{ "anchor": "setup", "label": "Setup" }])
        );
    }
}
