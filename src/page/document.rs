//! Lenient view over one page document.
//!
//! ```json
//! {
//!   "title": "{file}",
//!   "date": "2025-08-12",
//!   "type": "Lab",
//!   "brief": ["Line one", "Line two"],
//!   "elements": [{ "type": "synopsis", "content": "..." }]
//! }
//! ```
//!
//! Wrong shapes degrade instead of failing: a non-array `brief` or
//! `elements` is empty, non-string brief lines are skipped, and blank
//! strings count as absent.

use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageDocument {
    /// Raw title, placeholders not yet expanded.
    pub title: Option<String>,
    pub date: Option<String>,
    pub kind: Option<String>,
    pub brief: Vec<String>,
    /// Raw elements in document order.
    pub elements: Vec<Value>,
}

impl PageDocument {
    /// Build from any JSON value; non-objects yield an empty document.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return Self::default();
        };

        let text = |value: Option<Value>| match value {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
            _ => None,
        };

        let brief = match map.remove("brief") {
            Some(Value::Array(lines)) => lines
                .into_iter()
                .filter_map(|line| match line {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };
        let elements = match map.remove("elements") {
            Some(Value::Array(elements)) => elements,
            _ => Vec::new(),
        };

        Self {
            title: text(map.remove("title")),
            date: text(map.remove("date")),
            kind: text(map.remove("type")),
            brief,
            elements,
        }
    }

    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes).map(Self::from_value)
    }

    pub fn date_str(&self) -> &str {
        self.date.as_deref().unwrap_or_default()
    }

    pub fn kind_str(&self) -> &str {
        self.kind.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_document() {
        let doc = PageDocument::from_value(json!({
            "title": "{file}",
            "date": "2025-08-12",
            "type": "Lab",
            "brief": ["one", 2, "three"],
            "elements": [{ "type": "synopsis" }, { "type": "pdf" }]
        }));
        assert_eq!(doc.title.as_deref(), Some("{file}"));
        assert_eq!(doc.kind_str(), "Lab");
        assert_eq!(doc.brief, ["one", "three"]);
        assert_eq!(doc.elements.len(), 2);
        assert_eq!(doc.elements[1]["type"], "pdf");
    }

    #[test]
    fn test_wrong_shapes_degrade() {
        let doc = PageDocument::from_value(json!({
            "title": "  ",
            "date": 20250812,
            "brief": "not a list",
            "elements": { "type": "synopsis" }
        }));
        assert_eq!(doc.title, None);
        assert_eq!(doc.date_str(), "");
        assert!(doc.brief.is_empty());
        assert!(doc.elements.is_empty());
    }

    #[test]
    fn test_non_object() {
        assert_eq!(PageDocument::from_value(json!([1])), PageDocument::default());
        assert!(PageDocument::from_slice(b"not json").is_err());
    }
}
