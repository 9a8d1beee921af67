//! Command-line front-end for loading a book list and timing catalog lookups.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bookshelf::book_csv::{read_books_from_path, read_n_books_from_path};
use bookshelf::timing::{benchmark, time_execution};
use bookshelf::{Catalog, CatalogConfig, KeyStrategy, SearchStrategy, TitleMatch};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Load a CSV book list into a catalog and time lookups against it.
#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file with a header row and Title[,Author] rows
    path: PathBuf,

    /// Lookup strategy: linear, binary or hash-map
    #[arg(short, long, default_value_t = SearchStrategy::Binary)]
    strategy: SearchStrategy,

    /// Key function for the binary strategy: basic or positional
    #[arg(short, long, default_value_t = KeyStrategy::Basic)]
    key: KeyStrategy,

    /// Compare titles case-insensitively (linear strategy only)
    #[arg(long)]
    ignore_case: bool,

    /// Read at most this many books
    #[arg(short, long)]
    limit: Option<usize>,

    /// Number of timed repetitions per lookup
    #[arg(short, long, default_value_t = 1000)]
    repeat: u32,

    /// Titles to look up; defaults to a sample of the shelved titles
    #[arg(short, long)]
    find: Vec<String>,

    /// Print the catalog listing
    #[arg(long)]
    list: bool,
}

/// Up to `count` titles spread evenly across the catalog's storage.
fn sample_titles(catalog: &dyn Catalog, count: usize) -> Vec<String> {
    let books = catalog.books();
    if books.is_empty() {
        return Vec::new();
    }
    let step = (books.len() / count).max(1);
    books
        .iter()
        .step_by(step)
        .take(count)
        .map(|book| book.title().to_string())
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let books = match cli.limit {
        Some(limit) => read_n_books_from_path(&cli.path, limit),
        None => read_books_from_path(&cli.path),
    }
    .with_context(|| format!("Failed to read books from {}", cli.path.display()))?;

    let title_match = if cli.ignore_case {
        TitleMatch::IgnoreCase
    } else {
        TitleMatch::Exact
    };
    let config = CatalogConfig::default()
        .with_strategy(cli.strategy)
        .with_key(cli.key)
        .with_title_match(title_match);

    let (catalog, elapsed) = time_execution(|| config.build(books));
    println!(
        "Built {config} catalog with {} books in {:.6} seconds.",
        catalog.len(),
        elapsed.as_secs_f64()
    );

    if cli.list {
        println!("{}", catalog.render());
    }

    let titles = if cli.find.is_empty() {
        sample_titles(catalog.as_ref(), 5)
    } else {
        cli.find
    };

    for title in &titles {
        match catalog.find(title) {
            Some(book) => println!("\nfound: {book}"),
            None => println!("\nnot found: \"{title}\""),
        }
        let report = benchmark(title, cli.repeat, || catalog.find(title).is_some());
        println!("find {report}");
    }

    Ok(())
}
