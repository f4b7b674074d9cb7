//! HTML utility functions.
//!
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `chips()` - class/type chip spans shared by listings, cards and headers

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape(s)
}

// =============================================================================
// Chips
// =============================================================================

/// Class and type chips.
///
/// The type chip is dropped when it repeats the class (case-insensitive),
/// e.g. a `Certifications` page of type `Certifications`.
pub fn chips(cls: &str, kind: &str) -> String {
    let cls = cls.trim();
    let kind = kind.trim();
    let same = !cls.is_empty() && cls.eq_ignore_ascii_case(kind);

    let mut out = String::new();
    if !cls.is_empty() {
        out.push_str(&format!(
            r#"<span class="chip chip-class">{}</span>"#,
            escape(cls)
        ));
    }
    if !kind.is_empty() && !same {
        out.push_str(&format!(
            r#"<span class="chip chip-type">{}</span>"#,
            escape(kind)
        ));
    }
    out
}
