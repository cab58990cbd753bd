//! Catalog source configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Path to a JSON catalog file. Empty means the bundled seed catalog.
    #[serde(default)]
    pub path: String,
}

impl CatalogConfig {
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !self.path.is_empty()
    }
}
