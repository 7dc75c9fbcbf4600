//! Delivery Orchestrator: the linear validate → fetch → send pipeline.

use std::sync::Arc;

use tracing::{debug, info};

use remessa_channels::{
    DeliverableFile, EmailSender, Error, FileFetcher, MessagingChannel, PackageCatalog,
    ResolvedRecord, Result,
};

use crate::message;

/// Success marker returned when every pipeline step completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub package_label: String,
    pub filename: String,
}

/// Runs the delivery sequence for one resolved record.
///
/// Strictly linear with a hard stop at each step. Delivery across the two
/// channels is ordered best-effort: any failure aborts the remaining steps,
/// and steps already completed are not rolled back, so a messaging send
/// followed by an email failure leaves the message delivered.
pub struct DeliveryPipeline {
    catalog: Arc<PackageCatalog>,
    fetcher: Arc<dyn FileFetcher>,
    messaging: Arc<dyn MessagingChannel>,
    email: Arc<dyn EmailSender>,
}

impl DeliveryPipeline {
    #[must_use]
    pub fn new(
        catalog: Arc<PackageCatalog>,
        fetcher: Arc<dyn FileFetcher>,
        messaging: Arc<dyn MessagingChannel>,
        email: Arc<dyn EmailSender>,
    ) -> Self {
        Self {
            catalog,
            fetcher,
            messaging,
            email,
        }
    }

    /// Deliver the package file to the record's phone and email address.
    ///
    /// Validation and catalog lookup run before any network call, so an
    /// invalid record or unknown package label produces no side effects.
    pub async fn deliver(&self, record: &ResolvedRecord) -> Result<DeliveryReceipt> {
        record.validate()?;

        let url = self
            .catalog
            .url_for(&record.package_label)
            .ok_or_else(|| Error::unknown_package(&record.package_label))?;

        debug!(package = %record.package_label, "fetching package file");
        let bytes = self.fetcher.fetch(url).await?;

        let file = DeliverableFile {
            filename: message::attachment_filename(&record.package_label),
            bytes,
        };
        let caption = message::caption(&record.full_name);

        debug!(phone = %record.phone, "sending caption over messaging channel");
        self.messaging.send_text(&record.phone, &caption).await?;
        debug!(phone = %record.phone, filename = %file.filename, "sending document over messaging channel");
        self.messaging.send_document(&record.phone, &file).await?;

        let html = message::email_body_html(&record.full_name, &record.package_label);
        debug!(to = %record.email, "sending email with attachment");
        self.email
            .send(&record.email, message::EMAIL_SUBJECT, &html, &file)
            .await?;

        info!(
            package = %record.package_label,
            to = %record.email,
            phone = %record.phone,
            "delivery completed on both channels"
        );
        Ok(DeliveryReceipt {
            package_label: record.package_label.clone(),
            filename: file.filename,
        })
    }
}
