use crate::domain::model::ListingRecord;
use crate::utils::error::{EtlError, Result};
use scraper::{ElementRef, Html, Selector};

const POST_SELECTOR: &str = "li.wp-block-post";
const HEADING_SELECTOR: &str = "h2.wp-block-post-title";
const LINK_SELECTOR: &str = "a";
const DATE_SELECTOR: &str = "div.wp-block-post-date";
const TIME_SELECTOR: &str = "time";

/// Extracts listing records from a WordPress block-theme archive page.
///
/// Selectors are compiled once and reused for every page.
pub struct ListingParser {
    post: Selector,
    heading: Selector,
    link: Selector,
    date: Selector,
    time: Selector,
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| EtlError::ParseError {
        message: format!("{}: {}", selector, e),
    })
}

impl ListingParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            post: compile(POST_SELECTOR)?,
            heading: compile(HEADING_SELECTOR)?,
            link: compile(LINK_SELECTOR)?,
            date: compile(DATE_SELECTOR)?,
            time: compile(TIME_SELECTOR)?,
        })
    }

    /// Parses every post block in document order. Incomplete blocks are skipped.
    pub fn parse(&self, html: &str) -> Vec<ListingRecord> {
        let document = Html::parse_document(html);
        document
            .select(&self.post)
            .filter_map(|post| self.parse_post(post))
            .collect()
    }

    fn parse_post(&self, post: ElementRef<'_>) -> Option<ListingRecord> {
        let link = post
            .select(&self.heading)
            .next()?
            .select(&self.link)
            .next()?;

        let title = link.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            return None;
        }
        let url = link.value().attr("href")?;

        let date = post
            .select(&self.date)
            .next()?
            .select(&self.time)
            .next()?
            .value()
            .attr("datetime")?;

        Some(ListingRecord::new(title, date, url))
    }
}
