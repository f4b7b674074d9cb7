//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! root = "."          # Site root containing pages/ (relative to config file)
//! output = "public"   # Output directory for generated HTML
//! manifest = true     # Regenerate pages/manifest.json before rendering
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory under the site root holding the manifest and page documents.
pub const PAGES_DIR: &str = "pages";

/// Manifest file name inside [`PAGES_DIR`].
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Site root directory (contains `pages/` and the static assets).
    pub root: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Regenerate the manifest before rendering.
    pub manifest: bool,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
}

impl BuildSectionConfig {
    pub const FIELD_OUTPUT: FieldPath = FieldPath::new("build.output");

    /// `{root}/pages`
    pub fn pages_dir(&self) -> PathBuf {
        self.root.join(PAGES_DIR)
    }

    /// `{root}/pages/manifest.json`
    pub fn manifest_path(&self) -> PathBuf {
        self.pages_dir().join(MANIFEST_FILE)
    }

    /// Output equal to the root or one of its ancestors; cleaning it would
    /// delete the page documents.
    pub fn output_contains_root(&self) -> bool {
        self.root.starts_with(&self.output)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.output_contains_root() {
            diag.error_with_hint(
                Self::FIELD_OUTPUT,
                format!("`{}` contains the site root", self.output.display()),
                "point build.output at a directory inside or beside the site root",
            );
        }
    }
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("public"),
            manifest: true,
            clean: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.root, PathBuf::from("."));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.manifest);
        assert!(!config.build.clean);
    }

    #[test]
    fn test_manifest_path() {
        let config = test_parse_config("[build]\nroot = \"site\"\nmanifest = false");
        assert!(!config.build.manifest);
        assert_eq!(
            config.build.manifest_path(),
            PathBuf::from("site/pages/manifest.json")
        );
    }

    #[test]
    fn test_output_must_not_contain_root() {
        let mut config =
            test_parse_config("[build]\nroot = \"/srv/site\"\noutput = \"/srv/site/public\"");
        assert!(!config.build.output_contains_root());

        for output in ["/srv/site", "/srv", "/"] {
            config.build.output = PathBuf::from(output);
            let mut diag = ConfigDiagnostics::new();
            config.build.validate(&mut diag);
            assert!(diag.into_result().is_err(), "{output} accepted");
        }
    }
}
