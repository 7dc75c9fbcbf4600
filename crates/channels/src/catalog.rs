//! Static package catalog.

use std::collections::HashMap;

/// Immutable mapping from package label to download URL.
///
/// Built once at startup and shared read-only across requests. The catalog
/// is a deploy-time artifact; there is no runtime mutation path.
#[derive(Debug, Clone, Default)]
pub struct PackageCatalog {
    entries: HashMap<String, String>,
}

impl PackageCatalog {
    /// The catalog shipped with the service.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries([
            (
                "Light Trimestral",
                "https://www.dropbox.com/scl/fi/q0j1xafp0y30hb4ntyb63/Light-Trimestral.pdf?rlkey=qc63z1mbghtc6q3cjduubdj4y&dl=1",
            ),
            (
                "VIP Anual",
                "https://www.dropbox.com/scl/fi/1fc7t8a84xoinz8zao7ww/VIP-Anual.pdf?rlkey=78zja6dk&dl=1",
            ),
        ])
    }

    /// Build a catalog from explicit entries (deploy-time extension point
    /// and test seam).
    #[must_use]
    pub fn from_entries<L, U>(entries: impl IntoIterator<Item = (L, U)>) -> Self
    where
        L: Into<String>,
        U: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(label, url)| (label.into(), url.into()))
                .collect(),
        }
    }

    /// Download URL for a package label, if known.
    #[must_use]
    pub fn url_for(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
