use crate::error::ScrapeError;
use crate::models::JobRecord;
use crate::scrapers::http::HttpFetcher;
use crate::scrapers::traits::{FetchResponse, Fetcher};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

/// Fetcher serving canned responses. Unknown URLs get a 404.
#[derive(Default)]
pub struct StaticFetcher {
    responses: HashMap<String, FetchResponse>,
    delays: HashMap<String, Duration>,
    unreachable: HashSet<String>,
    requested: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: String) -> Self {
        self.responses
            .insert(url.to_string(), FetchResponse { status: 200, body });
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(
            url.to_string(),
            FetchResponse {
                status,
                body: String::new(),
            },
        );
        self
    }

    pub fn delayed(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    /// Fail `url` with a real connection error from a closed local port
    pub fn unreachable(mut self, url: &str) -> Self {
        self.unreachable.insert(url.to_string());
        self
    }

    /// URLs fetched so far, in request order
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, ScrapeError> {
        self.requested.lock().unwrap().push(url.to_string());

        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }

        if self.unreachable.contains(url) {
            let http = HttpFetcher::new(Duration::from_secs(5))
                .map_err(|e| ScrapeError::parse(e.to_string()))?;
            return match http.fetch("http://127.0.0.1:1/").await {
                Err(ScrapeError::Transport { source, .. }) => Err(ScrapeError::Transport {
                    url: url.to_string(),
                    source,
                }),
                other => other,
            };
        }

        Ok(self.responses.get(url).cloned().unwrap_or(FetchResponse {
            status: 404,
            body: String::new(),
        }))
    }
}

/// Markup of one job card
pub fn job_card(job: &JobRecord) -> String {
    format!(
        r#"<div class="jobsearch-SerpJobCard" data-jk="{}">
            <h2 class="title"><a href="/rc/clk">{}</a></h2>
            <div class="sjcl"><span class="location">{}</span></div>
            <div class="salarySnippet"><span><span>{}</span></span></div>
            <div class="summary">{}</div>
        </div>"#,
        job.id, job.title, job.location, job.salary, job.summary
    )
}

/// Search result page with `pages` pagination links and the given cards
pub fn results_page_with(pages: usize, cards: &[String]) -> String {
    let pagination = if pages == 0 {
        String::new()
    } else {
        let links: String = (0..pages)
            .map(|i| format!(r#"<li><a href="/jobs?start={}">{}</a></li>"#, i * 50, i + 1))
            .collect();
        format!(r#"<div class="pagination"><ul>{}</ul></div>"#, links)
    };

    format!(
        "<html><head><title>Jobs</title></head><body><div id=\"results\">{}</div>{}</body></html>",
        cards.concat(),
        pagination
    )
}

/// Search result page with one generated card per id
pub fn results_page(pages: usize, ids: &[&str]) -> String {
    let cards: Vec<String> = ids
        .iter()
        .map(|id| {
            job_card(&JobRecord::new(
                *id,
                format!("Job {}", id),
                "Seoul",
                "",
                format!("Summary {}", id),
            ))
        })
        .collect();
    results_page_with(pages, &cards)
}
