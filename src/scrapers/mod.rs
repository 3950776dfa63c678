pub mod extract;
pub mod http;
pub mod indeed;
pub mod text;
pub mod traits;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use http::HttpFetcher;
pub use indeed::IndeedScraper;
pub use traits::ScraperTrait;
pub use types::{ScrapeSettings, SearchContext, SelectorConfig};
