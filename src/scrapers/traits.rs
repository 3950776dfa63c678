use crate::error::ScrapeError;
use crate::models::JobRecord;
use crate::scrapers::types::SearchContext;
use async_trait::async_trait;

/// Common trait for all job board scrapers
#[async_trait]
pub trait ScraperTrait: Send + Sync {
    /// Scrape every result page for the search
    async fn scrape(&self, ctx: &SearchContext) -> Result<Vec<JobRecord>, ScrapeError>;

    /// Get the name of the scraper source
    fn source_name(&self) -> &'static str;
}

/// Raw response of a single GET request
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Transport used by scrapers to download pages
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `url`. Non-200 statuses are returned, not raised.
    async fn fetch(&self, url: &str) -> Result<FetchResponse, ScrapeError>;
}
