use crate::error::ScrapeError;
use crate::models::JobRecord;
use crate::scrapers::extract::CompiledSelectors;
use crate::scrapers::traits::{Fetcher, ScraperTrait};
use crate::scrapers::types::{ScrapeSettings, SearchContext, SelectorConfig};
use async_trait::async_trait;
use futures::{stream, StreamExt, TryStreamExt};
use reqwest::Url;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Indeed search result scraper
pub struct IndeedScraper<F> {
    fetcher: F,
    settings: ScrapeSettings,
    selectors: Arc<CompiledSelectors>,
}

impl<F: Fetcher> IndeedScraper<F> {
    /// Create a scraper with default settings and the stock Indeed selectors
    #[cfg(test)]
    pub fn new(fetcher: F) -> Result<Self, ScrapeError> {
        Self::with_config(fetcher, ScrapeSettings::default(), SelectorConfig::default())
    }

    /// Create a scraper with custom settings and selectors.
    ///
    /// Fails if any selector does not compile.
    pub fn with_config(
        fetcher: F,
        settings: ScrapeSettings,
        selectors: SelectorConfig,
    ) -> Result<Self, ScrapeError> {
        let selectors = CompiledSelectors::compile(&selectors)?;

        Ok(Self {
            fetcher,
            settings,
            selectors: Arc::new(selectors),
        })
    }

    /// Count the result pages by looking at the first page's pagination links
    pub async fn discover_page_count(&self, ctx: &SearchContext) -> Result<usize, ScrapeError> {
        let html = self.get_html(ctx.base_url()).await?;

        let selectors = Arc::clone(&self.selectors);
        let pages = parse_blocking(move || selectors.page_count(&html)).await?;

        info!("Found {} result pages", pages);
        Ok(pages)
    }

    /// Fetch one result page and extract a record per job card, in document order
    pub async fn fetch_page(
        &self,
        page_index: usize,
        ctx: &SearchContext,
    ) -> Result<Vec<JobRecord>, ScrapeError> {
        let url = ctx.page_url(page_index);
        info!("Requesting {}", url);

        let html = self.get_html(&url).await?;

        let selectors = Arc::clone(&self.selectors);
        let cards = parse_blocking(move || selectors.listing_cards(&html)).await?;

        debug!("Page {} has {} job cards", page_index, cards.len());

        let mut extractions = JoinSet::new();
        for (card_index, card_html) in cards.into_iter().enumerate() {
            let selectors = Arc::clone(&self.selectors);
            extractions.spawn_blocking(move || (card_index, selectors.extract_fragment(&card_html)));
        }

        let mut records = Vec::with_capacity(extractions.len());
        while let Some(joined) = extractions.join_next().await {
            let record = joined
                .map_err(|e| ScrapeError::parse(format!("card extraction task failed: {}", e)))?;
            records.push(record);
        }

        records.sort_by_key(|(card_index, _)| *card_index);
        Ok(records.into_iter().map(|(_, record)| record).collect())
    }

    async fn get_html(&self, url: &Url) -> Result<String, ScrapeError> {
        let response = self.fetcher.fetch(url.as_str()).await?;

        if !response.is_success() {
            warn!("Indeed returned status {} for {}", response.status, url);
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        Ok(response.body)
    }
}

#[async_trait]
impl<F: Fetcher> ScraperTrait for IndeedScraper<F> {
    async fn scrape(&self, ctx: &SearchContext) -> Result<Vec<JobRecord>, ScrapeError> {
        info!("Starting Indeed scrape for {:?}", ctx.term());

        let total_pages = self.discover_page_count(ctx).await?;
        let max_in_flight = self.settings.max_concurrent_requests.max(1);

        // Dropping the stream on the first error cancels the pages still in flight
        let mut pages: Vec<(usize, Vec<JobRecord>)> = stream::iter(0..total_pages)
            .map(move |page_index| async move {
                self.fetch_page(page_index, ctx)
                    .await
                    .map(|records| (page_index, records))
            })
            .buffer_unordered(max_in_flight)
            .try_collect()
            .await?;

        pages.sort_by_key(|(page_index, _)| *page_index);
        let jobs: Vec<JobRecord> = pages
            .into_iter()
            .flat_map(|(_, records)| records)
            .collect();

        info!("✅ Scraped {} jobs from {} pages", jobs.len(), total_pages);
        Ok(jobs)
    }

    fn source_name(&self) -> &'static str {
        "Indeed"
    }
}

/// Run HTML parsing off the async workers; parsed documents never cross an await
async fn parse_blocking<T, P>(parse: P) -> Result<T, ScrapeError>
where
    T: Send + 'static,
    P: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(parse)
        .await
        .map_err(|e| ScrapeError::parse(format!("parse task failed: {}", e)))
}
