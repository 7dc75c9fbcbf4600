//! Text and document send calls against the Z-API instance endpoints.

use std::time::Duration;

use {
    async_trait::async_trait,
    base64::Engine,
    reqwest::Client,
    secrecy::{ExposeSecret, Secret},
    tracing::debug,
};

use remessa_channels::{DeliverableFile, Error, MessagingChannel, Result};

const DEFAULT_BASE_URL: &str = "https://api.z-api.io";
const TEXT_TIMEOUT: Duration = Duration::from_secs(15);
const DOCUMENT_TIMEOUT: Duration = Duration::from_secs(30);

/// [`MessagingChannel`] backed by a Z-API instance.
///
/// Both endpoints live under `/instances/{id}/token/{token}/` and require
/// the account security token in a `Client-Token` header.
pub struct ZapiMessenger {
    http: Client,
    base_url: String,
    instance_id: String,
    token: Secret<String>,
    security_token: Secret<String>,
}

impl ZapiMessenger {
    #[must_use]
    pub fn new(
        instance_id: impl Into<String>,
        token: Secret<String>,
        security_token: Secret<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            instance_id: instance_id.into(),
            token,
            security_token,
        }
    }

    /// Override the API base URL (test seam).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!(
            "{}/instances/{}/token/{}/{suffix}",
            self.base_url,
            self.instance_id,
            self.token.expose_secret()
        )
    }

    async fn post_checked(
        &self,
        url: String,
        body: serde_json::Value,
        timeout: Duration,
        what: &str,
    ) -> Result<()> {
        let resp = self
            .http
            .post(&url)
            .header("Client-Token", self.security_token.expose_secret())
            .json(&body)
            .timeout(timeout)
            .send()
            .await
            .map_err(Error::messaging)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(Error::messaging(format!("{what}: HTTP {status}: {text}")));
        }
        Ok(())
    }
}

#[async_trait]
impl MessagingChannel for ZapiMessenger {
    async fn send_text(&self, phone: &str, message: &str) -> Result<()> {
        debug!(phone, "sending text message");
        self.post_checked(
            self.endpoint("send-text"),
            serde_json::json!({ "phone": phone, "message": message }),
            TEXT_TIMEOUT,
            "send-text",
        )
        .await
    }

    async fn send_document(&self, phone: &str, file: &DeliverableFile) -> Result<()> {
        debug!(phone, filename = %file.filename, "sending document");
        let encoded = base64::engine::general_purpose::STANDARD.encode(&file.bytes);
        self.post_checked(
            self.endpoint(&format!("send-document/{}", file.extension())),
            serde_json::json!({
                "phone": phone,
                "document": format!("data:application/pdf;base64,{encoded}"),
                "fileName": file.filename,
            }),
            DOCUMENT_TIMEOUT,
            "send-document",
        )
        .await
    }
}
