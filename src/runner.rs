use crate::output::JobWriter;
use crate::scrapers::{ScraperTrait, SearchContext};
use anyhow::{Context, Result};
use tracing::info;

/// Scrape every result page for `ctx`, hand the jobs to `writer` and return how many were written.
///
/// Nothing is written when any page fails.
pub async fn run<S, W>(scraper: &S, writer: &W, ctx: &SearchContext) -> Result<usize>
where
    S: ScraperTrait + ?Sized,
    W: JobWriter + ?Sized,
{
    info!("Scraping {} for {:?}", scraper.source_name(), ctx.term());

    let jobs = scraper
        .scrape(ctx)
        .await
        .with_context(|| format!("Failed to scrape {}", scraper.source_name()))?;

    writer
        .write_jobs(ctx, &jobs)
        .context("Failed to save jobs")?;

    Ok(jobs.len())
}
