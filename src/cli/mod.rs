//! Command-line interface for bookstore.
//!
//! Builds a catalog from the config file (or the demo fixture when the
//! config lists no items) and runs catalog operations against it.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::config::{self, ResolvedConfig};
use crate::library::Catalog;
use crate::literature::{ComicBook, Literature, LiteratureKind, Magazine, Novel, Titled};

/// bookstore - In-memory catalog of novels, comic books and magazines
#[derive(Parser, Debug)]
#[command(name = "bookstore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (searched in .bookstore/ directories if not provided)
    #[arg(short, long, global = true, env = "BOOKSTORE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through every catalog operation
    Demo,

    /// Print item titles
    Titles {
        /// Print titles upper-cased
        #[arg(short, long)]
        upper: bool,

        /// Print titles in alphabetical order
        #[arg(short, long)]
        sorted: bool,

        /// Only print titles containing this text (case-sensitive)
        #[arg(short = 'f', long)]
        containing: Option<String>,

        /// Only print items of this kind (novel, comic_book, magazine)
        #[arg(short, long)]
        kind: Option<LiteratureKind>,
    },

    /// Print the longest title
    Longest,

    /// Count titles containing a word (case-insensitive)
    Count {
        /// Word to look for
        word: String,
    },

    /// List items whose title has exactly this many characters
    Length {
        /// Title length in characters
        length: usize,
    },

    /// Show store info and title statistics
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the novels in the catalog
    Novels,

    /// Encode a novel as a delimited string
    Encode {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        #[arg(long)]
        year: i32,
    },

    /// Decode a delimited string into a novel
    Decode {
        /// Encoded novel, e.g. "Dune&&Frank Herbert&&1965"
        encoded: String,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let cfg = self.resolve_config()?;

        match self.command {
            Commands::Demo => run_demo(&load_catalog(&cfg)?),
            Commands::Titles {
                upper,
                sorted,
                containing,
                kind,
            } => {
                let selection = TitleSelection {
                    upper,
                    sorted,
                    containing,
                    kind,
                };
                print_titles(&load_catalog(&cfg)?, &selection)
            }
            Commands::Longest => show_longest(&load_catalog(&cfg)?),
            Commands::Count { word } => show_count(&load_catalog(&cfg)?, &word),
            Commands::Length { length } => show_length(&load_catalog(&cfg)?, length),
            Commands::Stats { json } => show_stats(&load_catalog(&cfg)?, json),
            Commands::Novels => list_novels(&load_catalog(&cfg)?),
            Commands::Encode {
                title,
                author,
                year,
            } => encode_novel(title, author, year),
            Commands::Decode { encoded } => decode_novel(&encoded),
            Commands::Config => show_config(&cfg),
        }
    }

    fn resolve_config(&self) -> Result<ResolvedConfig> {
        match &self.config {
            Some(path) => config::load_config_from(path),
            None => config::config().cloned(),
        }
    }
}

/// The catalog used when the config file lists no items
pub fn demo_items() -> Result<Vec<Literature>> {
    Ok(vec![
        Novel::new("War and Peace", "Leo Tolstoy", 1867)?.into(),
        ComicBook::new("Spider-Man")?.into(),
        Magazine::new("National Geographic")?.into(),
    ])
}

/// Build the catalog from config, falling back to the demo items
fn load_catalog(cfg: &ResolvedConfig) -> Result<Catalog> {
    let mut catalog = cfg.catalog()?;

    if catalog.is_empty() {
        info!("No items configured, using demo catalog");
        for item in demo_items()? {
            catalog.add(item);
        }
    }

    Ok(catalog)
}

/// Run every catalog operation once
fn run_demo(catalog: &Catalog) -> Result<()> {
    println!("{}", catalog.info());
    println!();

    println!("Titles:");
    catalog.print_titles()?;
    println!();

    println!("Upper-cased:");
    catalog.print_titles_upper()?;
    println!();

    println!("Alphabetical:");
    catalog.print_titles_sorted()?;
    println!();

    println!("Titles containing \"an\":");
    catalog.print_titles_containing("an")?;
    println!();

    match catalog.longest_title() {
        Some(title) => println!("Longest title: {}", title),
        None => println!("Longest title: (none)"),
    }
    println!(
        "Titles containing \"an\" (any case): {}",
        catalog.count_containing("an")
    );

    let ten: Vec<_> = catalog
        .items_with_title_length(10)
        .into_iter()
        .map(Titled::title)
        .collect();
    println!("Titles of length 10: {:?}", ten);

    match catalog.average_title_length() {
        Some(avg) => println!("Average title length: {:.2}", avg),
        None => println!("Average title length: (no items)"),
    }
    println!();

    let mut novels: Vec<&Novel> = Vec::new();
    catalog.collect_novels(&mut novels);
    println!("Novels:");
    for novel in novels {
        println!("  {}", novel);
        println!("  encoded: {}", novel.encode());
    }

    Ok(())
}

/// Which titles `bookstore titles` prints, and how
#[derive(Debug, Clone, Default)]
pub struct TitleSelection {
    pub upper: bool,
    pub sorted: bool,
    pub containing: Option<String>,
    pub kind: Option<LiteratureKind>,
}

/// Print titles; filters apply first, then sorting, then upper-casing
fn print_titles(catalog: &Catalog, selection: &TitleSelection) -> Result<()> {
    write_selected_titles(&mut io::stdout().lock(), catalog, selection)?;
    Ok(())
}

fn write_selected_titles<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    selection: &TitleSelection,
) -> io::Result<()> {
    let mut items = match &selection.containing {
        Some(part) => catalog.titles_containing(part),
        None => catalog.iter().collect(),
    };

    if let Some(kind) = selection.kind {
        items.retain(|item| item.kind() == kind);
    }
    if selection.sorted {
        items.sort_by(|a, b| a.cmp_title(b));
    }

    for item in items {
        if selection.upper {
            writeln!(out, "{}", item.title().to_uppercase())?;
        } else {
            writeln!(out, "{}", item.title())?;
        }
    }

    Ok(())
}

fn show_longest(catalog: &Catalog) -> Result<()> {
    match catalog.longest_title() {
        Some(title) => println!("{}", title),
        None => println!("Catalog is empty"),
    }
    Ok(())
}

fn show_count(catalog: &Catalog, word: &str) -> Result<()> {
    println!("{}", catalog.count_containing(word));
    Ok(())
}

fn show_length(catalog: &Catalog, length: usize) -> Result<()> {
    let items = catalog.items_with_title_length(length);

    if items.is_empty() {
        println!("No titles with {} characters", length);
        return Ok(());
    }

    println!("{:<12} {:<50}", "KIND", "TITLE");
    println!("{}", "-".repeat(62));
    for item in items {
        println!("{:<12} {:<50}", item.kind().to_string(), item.title());
    }

    Ok(())
}

fn show_stats(catalog: &Catalog, json: bool) -> Result<()> {
    let info = catalog.info();
    let stats = catalog.title_stats();

    if json {
        let value = serde_json::json!({
            "info": info,
            "title_stats": stats,
            "average_title_length": catalog.average_title_length(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", info);
    match stats {
        Some(stats) => println!("{}", stats),
        None => println!("No titles to measure"),
    }

    Ok(())
}

fn list_novels(catalog: &Catalog) -> Result<()> {
    let mut novels: Vec<&Novel> = Vec::new();
    catalog.collect_novels(&mut novels);

    if novels.is_empty() {
        println!("No novels in catalog");
        return Ok(());
    }

    for novel in novels {
        println!("{}", novel);
    }
    Ok(())
}

fn encode_novel(title: String, author: String, year: i32) -> Result<()> {
    let novel = Novel::new(title, author, year).context("Invalid novel")?;
    info!(title = novel.title(), "Encoding novel");
    println!("{}", novel.encode());
    Ok(())
}

fn decode_novel(encoded: &str) -> Result<()> {
    let novel = Novel::decode(encoded).map_err(|e| {
        warn!(error = %e, "Rejected encoded novel");
        e
    });
    let novel = novel.with_context(|| format!("Failed to decode novel: {:?}", encoded))?;

    println!("Title:  {}", novel.title());
    println!("Author: {}", novel.author_name());
    println!("Year:   {}", novel.year_published());
    Ok(())
}

fn show_config(cfg: &ResolvedConfig) -> Result<()> {
    let config_file = cfg
        .config_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none - using defaults)".to_string());

    println!("Config file: {}", config_file);
    println!("Store name:  {}", cfg.name);
    println!();
    println!("Configured items:");
    if cfg.items.is_empty() {
        println!("  (none - demo catalog is used)");
    } else {
        for item in &cfg.items {
            println!("  {}", item);
        }
    }

    Ok(())
}
