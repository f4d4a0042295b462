use crate::core::parser::ListingParser;
use crate::domain::model::ListingRecord;
use crate::domain::ports::PageSource;
use crate::utils::error::{EtlError, Result};

/// Walks `base`, `base/page/2/`, ... and collects listing records.
pub struct ListingFetcher<S: PageSource> {
    source: S,
    parser: ListingParser,
    base_url: String,
}

impl<S: PageSource> ListingFetcher<S> {
    pub fn new(source: S, base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            source,
            parser: ListingParser::new()?,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Address of page `n`; page 1 is the base listing itself.
    pub fn page_url(&self, page: u32) -> String {
        if page <= 1 {
            return self.base_url.clone();
        }
        let separator = if self.base_url.ends_with('/') { "" } else { "/" };
        format!("{}{}page/{}/", self.base_url, separator, page)
    }

    async fn fetch_and_parse(&self, page: u32) -> Result<Vec<ListingRecord>> {
        let url = self.page_url(page);
        tracing::debug!("GET {}", url);

        let html = self
            .source
            .fetch_page(&url)
            .await
            .map_err(|e| EtlError::FetchError {
                page: if page <= 1 {
                    "main page".to_string()
                } else {
                    format!("page {}", page)
                },
                message: e.to_string(),
            })?;

        Ok(self.parser.parse(&html))
    }

    /// Fetches up to `max_pages` listing pages in order.
    ///
    /// A failed base page ends the walk. A failed later page is skipped; a later
    /// page that parses to nothing marks the end of the listing.
    pub async fn fetch_all(&self, max_pages: u32) -> Vec<ListingRecord> {
        let mut all_actions = Vec::new();
        if max_pages == 0 {
            return all_actions;
        }

        match self.fetch_and_parse(1).await {
            Ok(posts) => {
                all_actions.extend(posts);
                tracing::info!("Processed main page, found {} posts", all_actions.len());
            }
            Err(e) => {
                tracing::error!("Error fetching main page: {}", e);
                return all_actions;
            }
        }

        for page in 2..=max_pages {
            match self.fetch_and_parse(page).await {
                Ok(posts) if posts.is_empty() => {
                    tracing::info!("Page {} has no posts, stopping pagination", page);
                    break;
                }
                Ok(posts) => {
                    tracing::info!("Processed page {}, found {} posts", page, posts.len());
                    all_actions.extend(posts);
                }
                Err(e) => {
                    tracing::warn!("Error fetching page {}: {}", page, e);
                    continue;
                }
            }
        }

        all_actions
    }
}
