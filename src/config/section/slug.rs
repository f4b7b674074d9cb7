//! `[slug]` anchor slug configuration.

use serde::{Deserialize, Serialize};

/// Slug generation mode for section anchors.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Lowercase, every run outside `[a-z0-9]` becomes one `-` (default).
    #[default]
    Full,
    /// Transliterate Unicode to ASCII first, then apply `Full`.
    Ascii,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    pub mode: SlugMode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_mode_parsing() {
        assert_eq!(test_parse_config("").slug.mode, SlugMode::Full);
        for (input, expected) in [("full", SlugMode::Full), ("ascii", SlugMode::Ascii)] {
            let config = test_parse_config(&format!("[slug]\nmode = \"{input}\""));
            assert_eq!(config.slug.mode, expected, "mode failed for {input}");
        }
    }
}
