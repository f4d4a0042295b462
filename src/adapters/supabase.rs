use crate::domain::model::TitleMatchRow;
use crate::domain::ports::RecordSink;
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_TABLE: &str = "title_matches";
const CLIENT_INFO: &str = "executive-policy-tracker";

/// Inserts rows through the project's PostgREST endpoint (`/rest/v1/<table>`).
#[derive(Debug, Clone)]
pub struct SupabaseSink {
    client: Client,
    url: String,
    key: String,
    table: String,
}

impl SupabaseSink {
    /// Missing credentials are accepted here and surface on the first insert.
    pub fn new(url: Option<&str>, key: Option<&str>, table: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.unwrap_or_default().trim_end_matches('/').to_string(),
            key: key.unwrap_or_default().to_string(),
            table: table.into(),
        }
    }

    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.url, self.table)
    }
}

#[async_trait]
impl RecordSink for SupabaseSink {
    async fn insert(&self, row: &TitleMatchRow) -> Result<()> {
        let persist_error = |message: String| EtlError::PersistError {
            title: row.whitehouse_title.clone(),
            message,
        };

        let response = self
            .client
            .post(self.table_url())
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
            .header("Prefer", "return=minimal")
            .header("X-Client-Info", CLIENT_INFO)
            .json(row)
            .send()
            .await
            .map_err(|e| persist_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(persist_error(format!("{}: {}", status, body)));
        }

        Ok(())
    }
}
