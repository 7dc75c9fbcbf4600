//! Authenticated query client for the database API.

use std::time::Duration;

use {
    async_trait::async_trait,
    reqwest::Client,
    secrecy::{ExposeSecret, Secret},
    tracing::debug,
};

use remessa_channels::{Error, RecordSource, ResolvedRecord, Result};

use crate::props::QueryResponse;

const DEFAULT_BASE_URL: &str = "https://api.notion.com";
const API_VERSION: &str = "2022-06-28";
const QUERY_TIMEOUT: Duration = Duration::from_secs(15);

/// [`RecordSource`] backed by a Notion database query endpoint.
pub struct NotionRecordSource {
    http: Client,
    base_url: String,
    token: Secret<String>,
    database_id: String,
}

impl NotionRecordSource {
    #[must_use]
    pub fn new(token: Secret<String>, database_id: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            token,
            database_id: database_id.into(),
        }
    }

    /// Override the API base URL (test seam).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl RecordSource for NotionRecordSource {
    async fn latest_record(&self) -> Result<ResolvedRecord> {
        let url = format!(
            "{}/v1/databases/{}/query",
            self.base_url, self.database_id
        );
        debug!(database_id = %self.database_id, "querying record source for latest row");

        // No filter or pagination: the API's default newest-first ordering
        // is trusted as-is, so the first result is the latest row.
        let resp = self
            .http
            .post(&url)
            .bearer_auth(self.token.expose_secret())
            .header("Notion-Version", API_VERSION)
            .header("Content-Type", "application/json")
            .timeout(QUERY_TIMEOUT)
            .send()
            .await
            .map_err(Error::upstream_query)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::upstream_query(format!("HTTP {status}: {body}")));
        }

        let mut parsed: QueryResponse = resp.json().await.map_err(Error::upstream_query)?;
        if parsed.results.is_empty() {
            return Err(Error::upstream_query("empty result set"));
        }
        Ok(parsed.results.remove(0).into_record())
    }
}
