//! Request and record data model.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fallback package label when a record carries none.
pub const FALLBACK_PACKAGE_LABEL: &str = "Arquivo";

/// Optional request body for `POST /enviar_pdf`.
///
/// All fields are optional; nothing is validated at this stage. The
/// `pacote` alias keeps the original wire field name working.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomingRequest {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub full_name: Option<String>,
    #[serde(alias = "pacote")]
    pub package_label: Option<String>,
}

/// A customer record ready for delivery.
///
/// Built either by passthrough from an [`IncomingRequest`] or by extraction
/// from the record source's latest row. Fields may still be empty here;
/// [`ResolvedRecord::validate`] is the gate before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRecord {
    pub email: String,
    pub phone: String,
    pub full_name: String,
    pub package_label: String,
}

impl ResolvedRecord {
    /// Require all four fields to be non-empty.
    ///
    /// Returns the first missing field, checked in a fixed order so the
    /// error message is deterministic.
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() {
            return Err(Error::validation("email"));
        }
        if self.phone.is_empty() {
            return Err(Error::validation("phone"));
        }
        if self.full_name.is_empty() {
            return Err(Error::validation("full_name"));
        }
        if self.package_label.is_empty() {
            return Err(Error::validation("package_label"));
        }
        Ok(())
    }
}

/// A downloaded file awaiting delivery. Lives for one request only.
#[derive(Debug, Clone)]
pub struct DeliverableFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl DeliverableFile {
    /// File extension inferred from the filename (used by the
    /// document-send-by-extension messaging endpoint).
    #[must_use]
    pub fn extension(&self) -> &str {
        self.filename.rsplit('.').next().unwrap_or("pdf")
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ResolvedRecord {
        ResolvedRecord {
            email: "a@b.com".into(),
            phone: "551199999999".into(),
            full_name: "Maria Silva".into(),
            package_label: "Light Trimestral".into(),
        }
    }

    #[test]
    fn validate_accepts_complete_record() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn validate_names_first_missing_field() {
        let mut r = record();
        r.phone = String::new();
        match r.validate() {
            Err(Error::Validation { field }) => assert_eq!(field, "phone"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn incoming_request_accepts_pacote_alias() {
        let req: IncomingRequest =
            serde_json::from_str(r#"{"email":"a@b.com","pacote":"VIP Anual"}"#).unwrap();
        assert_eq!(req.package_label.as_deref(), Some("VIP Anual"));
    }

    #[test]
    fn incoming_request_accepts_canonical_field_name() {
        let req: IncomingRequest =
            serde_json::from_str(r#"{"package_label":"VIP Anual"}"#).unwrap();
        assert_eq!(req.package_label.as_deref(), Some("VIP Anual"));
    }

    #[test]
    fn extension_falls_back_to_pdf() {
        let file = DeliverableFile {
            filename: "no-extension".into(),
            bytes: vec![],
        };
        assert_eq!(file.extension(), "no-extension");
        let file = DeliverableFile {
            filename: "Pacote.pdf".into(),
            bytes: vec![],
        };
        assert_eq!(file.extension(), "pdf");
    }
}
