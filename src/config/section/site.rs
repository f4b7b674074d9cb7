//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Engineering Portfolio"
//! base = "/eng-portfolio/"                        # URL prefix for every link
//! classes = ["DE", "CIM", "EDD", "Certifications"] # Route allowlist (empty = any)
//! resume = "/eng-portfolio/resources/resume.pdf"   # Optional nav link, used as-is
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title, used in page `<title>` suffixes and listing headers.
    pub title: String,

    /// URL base path. Normalized to end with `/` when the config loads.
    pub base: String,

    /// Known classes. Path routes with a class outside this list are rejected.
    pub classes: Vec<String>,

    /// Resume link shown in the navigation bar.
    pub resume: Option<String>,
}

impl SiteSectionConfig {
    pub const FIELD_BASE: FieldPath = FieldPath::new("site.base");
    pub const FIELD_CLASSES: FieldPath = FieldPath::new("site.classes");

    /// Check if a class passes the allowlist.
    pub fn allows_class(&self, cls: &str) -> bool {
        self.classes.is_empty() || self.classes.iter().any(|c| c == cls)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.base.contains(['?', '#']) {
            diag.error_with_hint(
                Self::FIELD_BASE,
                "base must be a plain path",
                "drop the query string or fragment, e.g. \"/eng-portfolio/\"",
            );
        }
        if self.classes.iter().any(|c| c.trim().is_empty() || c.contains('/')) {
            diag.error(
                Self::FIELD_CLASSES,
                "class names must be non-empty and must not contain `/`",
            );
        }
    }
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".into(),
            base: "/".into(),
            classes: Vec::new(),
            resume: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.base, "/");
        assert!(config.site.classes.is_empty());
        assert!(config.site.allows_class("anything"));
        assert_eq!(config.site.resume, None);
    }

    #[test]
    fn test_allowlist() {
        let config = test_parse_config("[site]\nclasses = [\"DE\", \"CIM\"]");
        assert!(config.site.allows_class("DE"));
        assert!(!config.site.allows_class("de"));
        assert!(!config.site.allows_class("EDD"));
    }

    #[test]
    fn test_validate_rejects_query_in_base() {
        let mut config = test_parse_config("[site]\nbase = \"/a/?x=1\"");
        config.site.base = "/a/?x=1".into();
        let mut diag = crate::config::ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.into_result().is_err());
    }
}
