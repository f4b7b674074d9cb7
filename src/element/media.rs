//! Media item normalization for `pdf`, `video` and `image` elements.

use serde_json::Value;

use super::fields::{Object, as_text};

/// One media entry after normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaItem {
    /// Raw source, placeholders not yet expanded.
    pub src: String,
    pub label: Option<String>,
    pub alt: Option<String>,
    pub title: Option<String>,
}

impl MediaItem {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => {
                let text = |key: &str| map.get(key).and_then(as_text);
                Some(Self {
                    src: text("src")?,
                    label: text("label"),
                    alt: text("alt"),
                    title: text("title"),
                })
            }
            other => as_text(other).map(|src| Self {
                src,
                ..Self::default()
            }),
        }
    }
}

/// Uniform item list for a media element.
///
/// An `items` array wins; otherwise a `src` becomes a one-item list
/// carrying the element's `label`. Items without a `src` are skipped.
pub fn normalize_items(el: &Object) -> Vec<MediaItem> {
    if let Some(Value::Array(items)) = el.get("items") {
        return items.iter().filter_map(MediaItem::from_value).collect();
    }
    match el.get("src").and_then(as_text) {
        Some(src) => vec![MediaItem {
            src,
            label: el.get("label").and_then(as_text),
            ..MediaItem::default()
        }],
        None => Vec::new(),
    }
}
