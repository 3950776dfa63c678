mod error;
mod models;
mod output;
mod runner;
mod scrapers;

use clap::Parser;
use output::{CsvJobWriter, HeaderLanguage};
use scrapers::{HttpFetcher, IndeedScraper, ScrapeSettings, SearchContext, SelectorConfig};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Scrape Indeed search results into a CSV file
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Search keyword
    #[arg(default_value = "python")]
    term: String,

    /// Output CSV path, overwritten on every run
    #[arg(short, long, default_value = "jobs.csv")]
    output: PathBuf,

    /// Maximum number of result pages fetched at once
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    max_concurrent_requests: u16,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Search endpoint the query parameters are appended to [default: https://kr.indeed.com/jobs]
    #[arg(long)]
    search_url: Option<String>,

    /// Language of the CSV header row
    #[arg(long, value_enum, default_value_t = HeaderLanguage::En)]
    header_language: HeaderLanguage,

    /// Log debug output unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("💼 Job Scout - Indeed Scraper");

    let ctx = match &args.search_url {
        Some(search_url) => SearchContext::with_search_url(&args.term, search_url)?,
        None => SearchContext::new(&args.term)?,
    };
    let settings = ScrapeSettings {
        max_concurrent_requests: usize::from(args.max_concurrent_requests),
    };

    let fetcher = HttpFetcher::new(Duration::from_secs(args.timeout_secs))?;
    let scraper = IndeedScraper::with_config(fetcher, settings, SelectorConfig::default())?;
    let writer = CsvJobWriter::new(args.output).with_language(args.header_language);

    let total = runner::run(&scraper, &writer, &ctx).await?;

    println!("Extracted {} jobs into {}", total, writer.path().display());

    Ok(())
}
