//! `[listing]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [listing]
//! recent = 5                          # Items in the home page's recent list
//! certifications = "Certifications"   # Class listed on certifications.html
//!
//! [listing.elements]
//! enable = true                       # Write edd-elements.html
//! class = "EDD"
//! type = "elements"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSectionConfig {
    pub recent: usize,
    pub certifications: String,
    pub elements: ElementsListingConfig,
}

/// Specialty listing of one class filtered to one type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementsListingConfig {
    pub enable: bool,
    pub class: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ListingSectionConfig {
    pub const FIELD_RECENT: FieldPath = FieldPath::new("listing.recent");
    pub const FIELD_ELEMENTS_CLASS: FieldPath = FieldPath::new("listing.elements.class");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.recent == 0 {
            diag.error(Self::FIELD_RECENT, "recent must be at least 1");
        }
        if self.elements.enable && self.elements.class.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELD_ELEMENTS_CLASS,
                "elements listing is enabled but no class is set",
                "set `class = \"EDD\"` or disable the listing",
            );
        }
    }
}

impl Default for ListingSectionConfig {
    fn default() -> Self {
        Self {
            recent: 5,
            certifications: "Certifications".into(),
            elements: ElementsListingConfig::default(),
        }
    }
}

impl Default for ElementsListingConfig {
    fn default() -> Self {
        Self {
            enable: true,
            class: "EDD".into(),
            kind: "elements".into(),
        }
    }
}
