use serde::{Deserialize, Serialize};

/// One post summary scraped from a listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub title: String,
    /// Machine-readable `datetime` attribute, kept verbatim.
    pub date: String,
    /// `href` of the heading link, kept verbatim (may be relative).
    pub url: String,
    pub match_confidence: f64,
}

impl ListingRecord {
    pub fn new(title: impl Into<String>, date: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            url: url.into(),
            match_confidence: 0.0,
        }
    }
}

/// Row shape of the `title_matches` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleMatchRow {
    pub whitehouse_title: String,
    pub whitehouse_date: String,
    pub whitehouse_url: String,
    pub match_confidence: f64,
}

impl From<&ListingRecord> for TitleMatchRow {
    fn from(record: &ListingRecord) -> Self {
        Self {
            whitehouse_title: record.title.clone(),
            whitehouse_date: record.date.clone(),
            whitehouse_url: record.url.clone(),
            // 由後續比對流程填入
            match_confidence: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreOutcome {
    Stored { title: String },
    Failed { title: String, reason: String },
}

impl StoreOutcome {
    pub fn title(&self) -> &str {
        match self {
            StoreOutcome::Stored { title } | StoreOutcome::Failed { title, .. } => title,
        }
    }

    pub fn is_stored(&self) -> bool {
        matches!(self, StoreOutcome::Stored { .. })
    }
}

/// Per-record results of one `store` call, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreReport {
    pub outcomes: Vec<StoreOutcome>,
}

impl StoreReport {
    pub fn stored_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_stored()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.stored_count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &StoreOutcome> {
        self.outcomes.iter().filter(|o| !o.is_stored())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub scraped: usize,
    pub stored: usize,
    pub failed: usize,
}
