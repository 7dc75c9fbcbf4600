//! Record Resolver: explicit payload passthrough or latest-row query.

use std::sync::Arc;

use tracing::debug;

use remessa_channels::{
    FALLBACK_PACKAGE_LABEL, IncomingRequest, RecordSource, ResolvedRecord, Result,
};

/// Resolves the customer record a delivery request is about.
pub struct RecordResolver {
    source: Arc<dyn RecordSource>,
}

impl RecordResolver {
    #[must_use]
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    /// Resolve a record from an optional explicit payload.
    ///
    /// A payload with a non-empty email wins; missing phone and full name
    /// default to empty strings (caught later by validation), a missing
    /// package label defaults to [`FALLBACK_PACKAGE_LABEL`]. Anything else
    /// falls through to the record source's latest row.
    pub async fn resolve(&self, payload: Option<IncomingRequest>) -> Result<ResolvedRecord> {
        if let Some(payload) = payload
            && payload.email.as_deref().is_some_and(|e| !e.is_empty())
        {
            debug!("resolving record from explicit payload");
            return Ok(ResolvedRecord {
                email: payload.email.unwrap_or_default(),
                phone: payload.phone.unwrap_or_default(),
                full_name: payload.full_name.unwrap_or_default(),
                package_label: payload
                    .package_label
                    .filter(|p| !p.is_empty())
                    .unwrap_or_else(|| FALLBACK_PACKAGE_LABEL.to_string()),
            });
        }
        debug!("no usable payload, querying record source for latest row");
        self.source.latest_record().await
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use remessa_channels::Error;

    use super::*;

    struct FixedSource(ResolvedRecord);

    #[async_trait]
    impl RecordSource for FixedSource {
        async fn latest_record(&self) -> Result<ResolvedRecord> {
            Ok(self.0.clone())
        }
    }

    struct EmptySource;

    #[async_trait]
    impl RecordSource for EmptySource {
        async fn latest_record(&self) -> Result<ResolvedRecord> {
            Err(Error::upstream_query("empty result set"))
        }
    }

    fn source_record() -> ResolvedRecord {
        ResolvedRecord {
            email: "row@b.com".into(),
            phone: "5511000000".into(),
            full_name: "Ana Souza".into(),
            package_label: "VIP Anual".into(),
        }
    }

    #[tokio::test]
    async fn payload_with_email_bypasses_source() {
        let resolver = RecordResolver::new(Arc::new(EmptySource));
        let record = resolver
            .resolve(Some(IncomingRequest {
                email: Some("a@b.com".into()),
                phone: Some("551199999999".into()),
                full_name: Some("Maria Silva".into()),
                package_label: Some("Light Trimestral".into()),
            }))
            .await
            .unwrap();
        assert_eq!(record.email, "a@b.com");
        assert_eq!(record.package_label, "Light Trimestral");
    }

    #[tokio::test]
    async fn payload_defaults_missing_fields() {
        let resolver = RecordResolver::new(Arc::new(EmptySource));
        let record = resolver
            .resolve(Some(IncomingRequest {
                email: Some("a@b.com".into()),
                ..IncomingRequest::default()
            }))
            .await
            .unwrap();
        assert_eq!(record.phone, "");
        assert_eq!(record.full_name, "");
        assert_eq!(record.package_label, FALLBACK_PACKAGE_LABEL);
    }

    #[tokio::test]
    async fn payload_without_email_falls_back_to_source() {
        let resolver = RecordResolver::new(Arc::new(FixedSource(source_record())));
        let record = resolver
            .resolve(Some(IncomingRequest {
                phone: Some("551199999999".into()),
                ..IncomingRequest::default()
            }))
            .await
            .unwrap();
        assert_eq!(record, source_record());
    }

    #[tokio::test]
    async fn missing_payload_queries_source() {
        let resolver = RecordResolver::new(Arc::new(FixedSource(source_record())));
        assert_eq!(resolver.resolve(None).await.unwrap(), source_record());
    }

    #[tokio::test]
    async fn source_failure_surfaces_upstream_query_error() {
        let resolver = RecordResolver::new(Arc::new(EmptySource));
        match resolver.resolve(None).await {
            Err(Error::UpstreamQuery { .. }) => {},
            other => panic!("expected upstream query error, got {other:?}"),
        }
    }
}
