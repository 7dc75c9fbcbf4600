//! Capability traits for the pipeline's outbound dependencies.
//!
//! The orchestrator only ever talks to these four narrow seams; live
//! adapters (Notion query, HTTP file host, Z-API, SMTP) and test fakes
//! both plug in here.

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{DeliverableFile, ResolvedRecord},
};

/// Source of customer records (the external database-as-a-service table).
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the most recent row and extract its delivery fields.
    ///
    /// Single attempt, no filter or pagination; the source's default
    /// ordering (newest-first) is trusted as-is. Fails with
    /// [`crate::Error::UpstreamQuery`] on a non-success response or an
    /// empty result set.
    async fn latest_record(&self) -> Result<ResolvedRecord>;
}

/// Fetches the bytes behind a catalog URL.
#[async_trait]
pub trait FileFetcher: Send + Sync {
    /// Download the file; fails with [`crate::Error::Download`] on a
    /// non-success response.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Push channel for text and document messages to a phone number.
#[async_trait]
pub trait MessagingChannel: Send + Sync {
    /// Send a plain text message.
    async fn send_text(&self, phone: &str, message: &str) -> Result<()>;

    /// Send a document as a base64 data payload with its filename.
    async fn send_document(&self, phone: &str, file: &DeliverableFile) -> Result<()>;
}

/// Email delivery with a single binary attachment.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send a multipart message (HTML body + attachment) over a fresh
    /// authenticated session.
    async fn send(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
        attachment: &DeliverableFile,
    ) -> Result<()>;
}
