pub mod csv_writer;

pub use csv_writer::{CsvJobWriter, HeaderLanguage};

use crate::error::ScrapeError;
use crate::models::JobRecord;
use crate::scrapers::SearchContext;

/// Destination for the records of a finished run
pub trait JobWriter: Send + Sync {
    fn write_jobs(&self, ctx: &SearchContext, jobs: &[JobRecord]) -> Result<(), ScrapeError>;
}
