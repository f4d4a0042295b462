use crate::domain::model::{ListingRecord, StoreOutcome, StoreReport, TitleMatchRow};
use crate::domain::ports::RecordSink;

pub struct Persister<K: RecordSink> {
    sink: K,
}

impl<K: RecordSink> Persister<K> {
    pub fn new(sink: K) -> Self {
        Self { sink }
    }

    /// Inserts each record on its own. A failed insert is logged and recorded,
    /// then the next record is attempted.
    pub async fn store(&self, records: &[ListingRecord]) -> StoreReport {
        let mut report = StoreReport::default();

        for record in records {
            let row = TitleMatchRow::from(record);
            let outcome = match self.sink.insert(&row).await {
                Ok(()) => {
                    tracing::info!("Stored action: {}", record.title);
                    StoreOutcome::Stored {
                        title: record.title.clone(),
                    }
                }
                Err(e) => {
                    tracing::error!("Error storing action '{}': {}", record.title, e);
                    StoreOutcome::Failed {
                        title: record.title.clone(),
                        reason: e.to_string(),
                    }
                }
            };
            report.outcomes.push(outcome);
        }

        report
    }
}
