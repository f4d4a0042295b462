use crate::adapters::{HttpPageSource, SupabaseSink};
use crate::core::fetcher::ListingFetcher;
use crate::core::persister::Persister;
use crate::core::{ConfigProvider, ListingRecord, PageSource, Pipeline, RecordSink, StoreReport};
use crate::utils::error::Result;

/// Scrape-then-store pipeline: extract walks the listing, load inserts rows.
pub struct ScrapePipeline<S: PageSource, K: RecordSink> {
    fetcher: ListingFetcher<S>,
    persister: Persister<K>,
    max_pages: u32,
}

impl<S: PageSource, K: RecordSink> ScrapePipeline<S, K> {
    pub fn new(fetcher: ListingFetcher<S>, persister: Persister<K>, max_pages: u32) -> Self {
        Self {
            fetcher,
            persister,
            max_pages,
        }
    }
}

impl ScrapePipeline<HttpPageSource, SupabaseSink> {
    /// Builds the live HTTP and PostgREST adapters from configuration.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let source = HttpPageSource::new(config.user_agent())?;
        let sink = SupabaseSink::new(config.store_url(), config.store_key(), config.table());

        Ok(Self::new(
            ListingFetcher::new(source, config.base_url())?,
            Persister::new(sink),
            config.max_pages(),
        ))
    }
}

#[async_trait::async_trait]
impl<S: PageSource, K: RecordSink> Pipeline for ScrapePipeline<S, K> {
    async fn extract(&self) -> Result<Vec<ListingRecord>> {
        tracing::info!(
            "🚀 Scraping {} (max {} pages)",
            self.fetcher.base_url(),
            self.max_pages
        );
        Ok(self.fetcher.fetch_all(self.max_pages).await)
    }

    async fn load(&self, records: Vec<ListingRecord>) -> Result<StoreReport> {
        tracing::debug!("Storing {} records", records.len());
        Ok(self.persister.store(&records).await)
    }
}
