//! Dotted config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// Path of a config field such as `render.pdf.zoom`.
///
/// Sections declare these as associated constants next to their
/// `validate` method so diagnostics always point at a real key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_str() {
        let field = FieldPath::new("render.pdf.zoom");
        assert_eq!(field.as_str(), "render.pdf.zoom");
        assert!(field.to_string().contains("render.pdf.zoom"));
    }
}
