use crate::domain::model::{ListingRecord, StoreReport, TitleMatchRow};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Retrieves one HTML document. Non-2xx responses must be returned as errors.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

/// Inserts one row into the remote table.
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn insert(&self, row: &TitleMatchRow) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn max_pages(&self) -> u32;
    fn user_agent(&self) -> &str;
    fn store_url(&self) -> Option<&str>;
    fn store_key(&self) -> Option<&str>;
    fn table(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<ListingRecord>>;
    async fn load(&self, records: Vec<ListingRecord>) -> Result<StoreReport>;
}
