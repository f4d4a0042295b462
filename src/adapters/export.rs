use crate::domain::model::ListingRecord;
use crate::utils::error::{EtlError, Result};
use std::path::Path;

/// Renders records as CSV with a `title,date,url,match_confidence` header.
pub fn records_to_csv(records: &[ListingRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if records.is_empty() {
        writer.write_record(["title", "date", "url", "match_confidence"])?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}

pub async fn write_csv<P: AsRef<Path>>(path: P, records: &[ListingRecord]) -> Result<()> {
    let data = records_to_csv(records)?;

    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(path, data).await?;
    Ok(())
}
