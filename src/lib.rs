pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{HttpPageSource, SupabaseSink};
pub use crate::core::{
    etl::EtlEngine, fetcher::ListingFetcher, parser::ListingParser, persister::Persister,
    pipeline::ScrapePipeline,
};
pub use domain::model::{ListingRecord, RunSummary, StoreOutcome, StoreReport, TitleMatchRow};
pub use utils::error::{EtlError, Result};
