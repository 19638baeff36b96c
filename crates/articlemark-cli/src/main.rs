//! `articlemark`: dump, outline and browse extended-markdown articles.
//!
//! Usage:
//!   articlemark dump <file> [--format text|html|json]
//!   articlemark toc <file> [--outline] [--max-level N]
//!   articlemark browse [articles-dir]
mod browse;
mod styled;

use anyhow::{Context, Result};
use articlemark_config::Config;
use articlemark_engine::{
    TocItem, TocNode, build_outline, generate_toc, io, parse, render_html, render_text,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "articlemark", version)]
#[command(about = "Parse and view extended-markdown articles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a parsed article
    Dump {
        file: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print an article's table of contents
    Toc {
        file: PathBuf,
        /// Indent entries by nesting instead of by level
        #[arg(long)]
        outline: bool,
        /// Deepest header level listed; defaults to the config value
        #[arg(long)]
        max_level: Option<u8>,
    },
    /// Browse a directory of articles in the terminal
    Browse {
        /// Overrides `articles_path` from the config file
        articles_path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Dump { file, format } => dump(&file, format),
        Command::Toc {
            file,
            outline,
            max_level,
        } => {
            let config = load_config()?;
            let max_level = max_level
                .or(config.as_ref().map(|c| c.toc.max_level))
                .unwrap_or(3);
            toc(&file, outline, max_level)
        }
        Command::Browse { articles_path } => {
            let config = load_config()?;
            let config = resolve_browse_config(articles_path, config)?;
            io::validate_articles_dir(&config.articles_path).with_context(|| {
                format!(
                    "articles path '{}' is invalid",
                    config.articles_path.display()
                )
            })?;
            browse::run(config)
        }
    }
}

fn load_config() -> Result<Option<Config>> {
    let path = Config::config_path();
    log::debug!("config path: {}", path.display());
    Ok(Config::load_from_path(&path)?)
}

/// A path on the command line wins over the config file; theme and TOC
/// settings still come from the file when there is one.
fn resolve_browse_config(cli_path: Option<PathBuf>, config: Option<Config>) -> Result<Config> {
    match (cli_path, config) {
        (Some(path), Some(mut config)) => {
            config.articles_path = path;
            Ok(config)
        }
        (Some(path), None) => Ok(Config::new(path)),
        (None, Some(config)) => Ok(config),
        (None, None) => anyhow::bail!(
            "no articles path given and no config file found; pass a directory or create {}",
            Config::config_path().display()
        ),
    }
}

fn read(file: &Path) -> Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

fn dump(file: &Path, format: Format) -> Result<()> {
    let doc = parse(&read(file)?);
    let out = match format {
        Format::Text => render_text(&doc),
        Format::Html => render_html(&doc),
        Format::Json => serde_json::to_string_pretty(&doc)?,
    };
    println!("{out}");
    Ok(())
}

fn toc(file: &Path, outline: bool, max_level: u8) -> Result<()> {
    let items: Vec<TocItem> = generate_toc(&read(file)?)
        .into_iter()
        .filter(|t| t.level <= max_level)
        .collect();
    if outline {
        print_outline(&build_outline(&items), 0);
    } else {
        for item in &items {
            let indent = "  ".repeat(usize::from(item.level.saturating_sub(1)));
            println!("{indent}{} (#{})", item.title, item.slug);
        }
    }
    Ok(())
}

fn print_outline(nodes: &[TocNode], depth: usize) {
    for node in nodes {
        println!("{}{} (#{})", "  ".repeat(depth), node.item.title, node.item.slug);
        print_outline(&node.children, depth + 1);
    }
}
