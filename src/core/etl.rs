use crate::adapters::export;
use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    dry_run: bool,
    export_csv: Option<PathBuf>,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            dry_run: false,
            export_csv: None,
        }
    }

    /// Skip the load step entirely.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn export_csv(mut self, path: Option<PathBuf>) -> Self {
        self.export_csv = path;
        self
    }

    pub async fn run(&self) -> Result<RunSummary> {
        println!("Starting scrape...");

        let records = self.pipeline.extract().await?;
        println!("Scraped {} actions", records.len());

        let mut summary = RunSummary {
            scraped: records.len(),
            ..RunSummary::default()
        };

        if let Some(path) = &self.export_csv {
            export::write_csv(path, &records).await?;
            println!("CSV saved to: {}", path.display());
        }

        if records.is_empty() {
            tracing::warn!("No actions found, nothing to store");
            return Ok(summary);
        }

        if self.dry_run {
            tracing::info!("Dry run, skipping store");
            return Ok(summary);
        }

        let report = self.pipeline.load(records).await?;
        summary.stored = report.stored_count();
        summary.failed = report.failed_count();

        for failure in report.failures() {
            tracing::debug!("Not stored: {}", failure.title());
        }

        println!("Successfully processed {} actions", summary.scraped);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ListingRecord, StoreOutcome, StoreReport};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticPipeline {
        records: Vec<ListingRecord>,
        loads: AtomicUsize,
    }

    impl StaticPipeline {
        fn new(records: Vec<ListingRecord>) -> Self {
            Self {
                records,
                loads: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl Pipeline for StaticPipeline {
        async fn extract(&self) -> Result<Vec<ListingRecord>> {
            Ok(self.records.clone())
        }

        async fn load(&self, records: Vec<ListingRecord>) -> Result<StoreReport> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            let outcomes = records
                .into_iter()
                .enumerate()
                .map(|(i, r)| {
                    if i == 0 {
                        StoreOutcome::Failed {
                            title: r.title,
                            reason: "409 Conflict".to_string(),
                        }
                    } else {
                        StoreOutcome::Stored { title: r.title }
                    }
                })
                .collect();
            Ok(StoreReport { outcomes })
        }
    }

    fn two_records() -> Vec<ListingRecord> {
        vec![
            ListingRecord::new("a", "2025-01-01", "/a/"),
            ListingRecord::new("b", "2025-01-02", "/b/"),
        ]
    }

    #[tokio::test]
    async fn test_run_summarizes_store_report() {
        let engine = EtlEngine::new(StaticPipeline::new(two_records()));
        let summary = engine.run().await.unwrap();

        assert_eq!(
            summary,
            RunSummary {
                scraped: 2,
                stored: 1,
                failed: 1
            }
        );
        assert_eq!(engine.pipeline.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_skips_load_when_nothing_scraped() {
        let engine = EtlEngine::new(StaticPipeline::new(vec![]));
        let summary = engine.run().await.unwrap();

        assert_eq!(summary, RunSummary::default());
        assert_eq!(engine.pipeline.loads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_dry_run_skips_load() {
        let engine = EtlEngine::new(StaticPipeline::new(two_records())).dry_run(true);
        let summary = engine.run().await.unwrap();

        assert_eq!(summary.scraped, 2);
        assert_eq!(summary.stored, 0);
        assert_eq!(engine.pipeline.loads.load(Ordering::SeqCst), 0);
    }
}
