use anyhow::{Context, Result};
use reqwest::Url;

/// Results per search page. Indeed paginates with `start` offsets in these steps.
pub const PAGE_SIZE: usize = 50;

/// Default Indeed search endpoint
pub const DEFAULT_SEARCH_URL: &str = "https://kr.indeed.com/jobs";

/// Query configuration for one run, built once and shared read-only by every task
#[derive(Debug, Clone)]
pub struct SearchContext {
    term: String,
    search_url: Url,
    base_url: Url,
}

impl SearchContext {
    /// Build the context for `term` against the default Indeed endpoint
    pub fn new(term: impl Into<String>) -> Result<Self> {
        Self::with_search_url(term, DEFAULT_SEARCH_URL)
    }

    /// Build the context for `term` against a custom search endpoint
    pub fn with_search_url(term: impl Into<String>, search_url: &str) -> Result<Self> {
        let term = term.into();
        let search_url = Url::parse(search_url)
            .with_context(|| format!("Invalid search URL: {}", search_url))?;

        let mut base_url = search_url.clone();
        base_url
            .query_pairs_mut()
            .append_pair("q", &term)
            .append_pair("limit", &PAGE_SIZE.to_string());

        Ok(Self {
            term,
            search_url,
            base_url,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// First result page, without a `start` offset
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the zero-based result page `page_index`
    pub fn page_url(&self, page_index: usize) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("start", &(page_index * PAGE_SIZE).to_string());
        url
    }

    /// Link that opens the listing `job_id` in the search view
    pub fn detail_link(&self, job_id: &str) -> String {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("q", &self.term)
            .append_pair("vjk", job_id);
        url.into()
    }
}

/// Limits applied to a scrape run
#[derive(Debug, Clone)]
pub struct ScrapeSettings {
    /// Maximum number of page requests in flight at once
    pub max_concurrent_requests: usize,
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        Self {
            max_concurrent_requests: 4,
        }
    }
}

/// CSS selectors describing the search result markup
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// One job card per match
    pub card: String,
    /// Attribute on the card holding the listing id
    pub id_attribute: String,
    pub title: String,
    pub location: String,
    pub salary: String,
    pub summary: String,
    /// Pagination control region
    pub pagination: String,
    /// Page links inside the pagination region
    pub pagination_link: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            card: ".jobsearch-SerpJobCard".to_string(),
            id_attribute: "data-jk".to_string(),
            title: ".title > a".to_string(),
            location: ".sjcl > span".to_string(),
            salary: ".salarySnippet > span > span".to_string(),
            summary: ".summary".to_string(),
            pagination: ".pagination".to_string(),
            pagination_link: "a".to_string(),
        }
    }
}
