use crate::error::ScrapeError;
use crate::models::JobRecord;
use crate::output::JobWriter;
use crate::scrapers::SearchContext;
use clap::ValueEnum;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Language of the CSV header row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum HeaderLanguage {
    #[default]
    En,
    Ja,
}

impl HeaderLanguage {
    pub fn labels(self) -> [&'static str; 5] {
        match self {
            Self::En => ["link", "title", "location", "salary", "summary"],
            Self::Ja => ["リンク", "タイトル", "位置", "年収", "備考"],
        }
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    link: String,
    title: &'a str,
    location: &'a str,
    salary: &'a str,
    summary: &'a str,
}

/// Writes jobs as CSV to a fixed path, replacing any previous file
#[derive(Debug, Clone)]
pub struct CsvJobWriter {
    path: PathBuf,
    language: HeaderLanguage,
}

impl CsvJobWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            language: HeaderLanguage::default(),
        }
    }

    pub fn with_language(mut self, language: HeaderLanguage) -> Self {
        self.language = language;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Header row, then one `link,title,location,salary,summary` row per job
    pub fn write_to<W: Write>(
        &self,
        out: W,
        ctx: &SearchContext,
        jobs: &[JobRecord],
    ) -> Result<(), csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(out);
        writer.write_record(self.language.labels())?;

        for job in jobs {
            writer.serialize(CsvRow {
                link: ctx.detail_link(&job.id),
                title: &job.title,
                location: &job.location,
                salary: &job.salary,
                summary: &job.summary,
            })?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl JobWriter for CsvJobWriter {
    fn write_jobs(&self, ctx: &SearchContext, jobs: &[JobRecord]) -> Result<(), ScrapeError> {
        let persistence = |source: csv::Error| ScrapeError::Persistence {
            path: self.path.clone(),
            source,
        };

        let file = File::create(&self.path).map_err(|e| persistence(e.into()))?;
        self.write_to(file, ctx, jobs).map_err(persistence)?;

        info!("💾 Saved {} jobs to {}", jobs.len(), self.path.display());
        Ok(())
    }
}
