use std::path::PathBuf;
use thiserror::Error;

/// Failures that invalidate a whole scrape run.
///
/// A selector that matches nothing is not represented here: missing fields
/// resolve to empty strings during extraction.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} failed with status code {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to parse document: {reason}")]
    Parse { reason: String },

    #[error("Failed to write {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ScrapeError {
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }
}
