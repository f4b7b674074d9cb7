//! `[render]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [render.pdf]
//! zoom = "100"                    # Default `#zoom=` for embeds and "open" links
//! single_page_zoom = "page-width" # Zoom used when a PDF has exactly one page
//! autosize = true                 # Sniff PDF bytes for page size and count
//! height = "80vh"                 # Embed height when no aspect ratio is known
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSectionConfig {
    /// PDF embed settings.
    pub pdf: PdfConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    pub zoom: String,
    pub single_page_zoom: String,
    pub autosize: bool,
    pub height: String,
}

impl PdfConfig {
    pub const FIELD_ZOOM: FieldPath = FieldPath::new("render.pdf.zoom");
    pub const FIELD_SINGLE_PAGE_ZOOM: FieldPath = FieldPath::new("render.pdf.single_page_zoom");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.zoom.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELD_ZOOM,
                "zoom must not be empty",
                "use a percentage like \"100\" or \"page-width\"",
            );
        }
        if self.single_page_zoom.trim().is_empty() {
            diag.error(Self::FIELD_SINGLE_PAGE_ZOOM, "zoom must not be empty");
        }
    }
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            zoom: "100".into(),
            single_page_zoom: "page-width".into(),
            autosize: true,
            height: "80vh".into(),
        }
    }
}
