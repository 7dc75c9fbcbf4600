//! Shared app state: the resolver and pipeline behind the HTTP handlers.

use std::sync::Arc;

use remessa_channels::{IncomingRequest, Result};
use remessa_delivery::{DeliveryPipeline, DeliveryReceipt, RecordResolver};

/// Read-only state shared across requests.
#[derive(Clone)]
pub struct AppState {
    resolver: Arc<RecordResolver>,
    pipeline: Arc<DeliveryPipeline>,
}

impl AppState {
    #[must_use]
    pub fn new(resolver: Arc<RecordResolver>, pipeline: Arc<DeliveryPipeline>) -> Self {
        Self { resolver, pipeline }
    }

    /// Resolve the record for an optional payload and run the pipeline.
    pub async fn run(&self, payload: Option<IncomingRequest>) -> Result<DeliveryReceipt> {
        let record = self.resolver.resolve(payload).await?;
        self.pipeline.deliver(&record).await
    }
}
