use crate::error::ScrapeError;
use crate::models::JobRecord;
use crate::scrapers::text::normalize;
use crate::scrapers::types::SelectorConfig;
use scraper::{ElementRef, Html, Selector};

/// Parsed form of a `SelectorConfig`
pub struct CompiledSelectors {
    card: Selector,
    id_attribute: String,
    title: Selector,
    location: Selector,
    salary: Selector,
    summary: Selector,
    pagination: Selector,
    pagination_link: Selector,
}

impl CompiledSelectors {
    pub fn compile(config: &SelectorConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            card: compile_selector(&config.card)?,
            id_attribute: config.id_attribute.clone(),
            title: compile_selector(&config.title)?,
            location: compile_selector(&config.location)?,
            salary: compile_selector(&config.salary)?,
            summary: compile_selector(&config.summary)?,
            pagination: compile_selector(&config.pagination)?,
            pagination_link: compile_selector(&config.pagination_link)?,
        })
    }

    /// Outer HTML of every job card in a search result page, in document order
    pub fn listing_cards(&self, page_html: &str) -> Vec<String> {
        let document = Html::parse_document(page_html);
        document.select(&self.card).map(|card| card.html()).collect()
    }

    /// Number of page links in the pagination region, 0 when there is none.
    ///
    /// When the page has several regions the last one wins.
    pub fn page_count(&self, page_html: &str) -> usize {
        let document = Html::parse_document(page_html);
        document
            .select(&self.pagination)
            .last()
            .map(|region| region.select(&self.pagination_link).count())
            .unwrap_or(0)
    }

    /// Extract a record from a card's outer HTML as produced by `listing_cards`
    pub fn extract_fragment(&self, card_html: &str) -> JobRecord {
        let fragment = Html::parse_fragment(card_html);
        match fragment.select(&self.card).next() {
            Some(card) => self.extract(card),
            None => self.extract(fragment.root_element()),
        }
    }

    /// Pull the listing fields out of one card.
    ///
    /// Missing nodes and attributes yield empty strings.
    pub fn extract(&self, card: ElementRef<'_>) -> JobRecord {
        JobRecord {
            id: card
                .value()
                .attr(&self.id_attribute)
                .unwrap_or_default()
                .to_string(),
            title: select_text(card, &self.title),
            location: select_text(card, &self.location),
            salary: select_text(card, &self.salary),
            summary: select_text(card, &self.summary),
        }
    }
}

fn compile_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::parse(format!("invalid selector {:?}: {:?}", selector, e)))
}

/// Normalized text of every match, concatenated
fn select_text(card: ElementRef<'_>, selector: &Selector) -> String {
    let text: String = card.select(selector).flat_map(|el| el.text()).collect();
    normalize(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str = r#"
        <div class="jobsearch-SerpJobCard" data-jk="abc123">
            <h2 class="title">
                <a href="/rc/clk?jk=abc123">  Backend
                    Engineer </a>
            </h2>
            <div class="sjcl">
                <span class="company">Acme</span>
                <span class="location">Seoul   Gangnam</span>
            </div>
            <div class="salarySnippet"><span><span>5,000만원 - 7,000만원</span></span></div>
            <div class="summary">
                <ul><li>Build things</li><li>with Rust</li></ul>
            </div>
        </div>"#;

    fn selectors() -> CompiledSelectors {
        CompiledSelectors::compile(&SelectorConfig::default()).unwrap()
    }

    #[test]
    fn extracts_all_fields() {
        let job = selectors().extract_fragment(CARD);
        assert_eq!(job.id, "abc123");
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.location, "AcmeSeoul Gangnam");
        assert_eq!(job.salary, "5,000만원 - 7,000만원");
        assert_eq!(job.summary, "Build thingswith Rust");
    }

    #[test]
    fn empty_card_yields_empty_record() {
        let job = selectors().extract_fragment(r#"<div class="jobsearch-SerpJobCard"></div>"#);
        assert_eq!(job, JobRecord::default());
    }

    #[test]
    fn fragment_without_card_root_still_extracts() {
        let job = selectors().extract_fragment(r#"<div class="summary">Remote ok</div>"#);
        assert_eq!(job.id, "");
        assert_eq!(job.summary, "Remote ok");
    }

    #[test]
    fn listing_cards_in_document_order() {
        let html = r#"<html><body>
            <div class="jobsearch-SerpJobCard" data-jk="1"></div>
            <div class="other"></div>
            <div class="jobsearch-SerpJobCard" data-jk="2"></div>
        </body></html>"#;
        let sel = selectors();
        let cards = sel.listing_cards(html);
        assert_eq!(cards.len(), 2);
        assert_eq!(sel.extract_fragment(&cards[0]).id, "1");
        assert_eq!(sel.extract_fragment(&cards[1]).id, "2");
    }

    #[test]
    fn page_without_cards_has_no_listings() {
        assert!(selectors().listing_cards("<html><body><p>No results</p></body></html>").is_empty());
    }

    #[test]
    fn counts_links_in_last_pagination_region() {
        let html = r#"<div class="pagination"><a>1</a></div>
            <div class="pagination"><a>1</a><a>2</a><a>3</a><b>4</b></div>"#;
        assert_eq!(selectors().page_count(html), 3);
    }

    #[test]
    fn missing_pagination_counts_zero() {
        assert_eq!(selectors().page_count("<html><body></body></html>"), 0);
    }

    #[test]
    fn compiled_selectors_are_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompiledSelectors>();

        let sel = std::sync::Arc::new(selectors());
        let shared = std::sync::Arc::clone(&sel);
        let job = std::thread::spawn(move || {
            shared.extract_fragment(r#"<div class="jobsearch-SerpJobCard" data-jk="z"></div>"#)
        })
        .join()
        .unwrap();
        assert_eq!(job.id, "z");
    }

    #[test]
    fn invalid_selector_is_a_parse_error() {
        let config = SelectorConfig {
            title: "..[".to_string(),
            ..SelectorConfig::default()
        };
        assert!(matches!(
            CompiledSelectors::compile(&config),
            Err(ScrapeError::Parse { .. })
        ));
    }
}
