pub mod etl;
pub mod fetcher;
pub mod parser;
pub mod persister;
pub mod pipeline;

pub use crate::domain::model::{ListingRecord, RunSummary, StoreOutcome, StoreReport};
pub use crate::domain::ports::{ConfigProvider, PageSource, Pipeline, RecordSink};
pub use crate::utils::error::Result;
