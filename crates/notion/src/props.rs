//! Typed wrappers for the database query response.
//!
//! Notion wraps every property value in a map keyed by field name, with
//! the actual value under a type-specific key (`email`, `rich_text`,
//! `title`, `select`). Only the shapes this service reads are modeled.

use std::collections::HashMap;

use serde::Deserialize;

use remessa_channels::{FALLBACK_PACKAGE_LABEL, ResolvedRecord};

#[derive(Debug, Deserialize)]
pub(crate) struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Page>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Page {
    #[serde(default)]
    pub properties: HashMap<String, Property>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Property {
    pub email: Option<String>,
    pub rich_text: Option<Vec<TextFragment>>,
    pub title: Option<Vec<TextFragment>>,
    pub select: Option<SelectValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TextFragment {
    pub plain_text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SelectValue {
    pub name: Option<String>,
}

impl Page {
    /// Extract the delivery fields from this row.
    ///
    /// Missing phone or name resolve to empty strings (rejected later by
    /// validation); a missing package select falls back to the catalog's
    /// generic label.
    pub(crate) fn into_record(mut self) -> ResolvedRecord {
        let email = self
            .properties
            .remove("Email")
            .and_then(|p| p.email)
            .unwrap_or_default();
        let phone = self
            .properties
            .remove("Telefone")
            .and_then(|p| p.rich_text)
            .and_then(|fragments| fragments.into_iter().next())
            .map(|f| f.plain_text)
            .unwrap_or_default();
        let full_name = self
            .properties
            .remove("Cliente")
            .and_then(|p| p.title)
            .and_then(|fragments| fragments.into_iter().next())
            .map(|f| f.plain_text)
            .unwrap_or_default();
        let package_label = self
            .properties
            .remove("Pacote")
            .and_then(|p| p.select)
            .and_then(|s| s.name)
            .unwrap_or_else(|| FALLBACK_PACKAGE_LABEL.to_string());

        ResolvedRecord {
            email,
            phone,
            full_name,
            package_label,
        }
    }
}
