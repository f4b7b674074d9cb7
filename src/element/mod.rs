//! Typed page elements.
//!
//! Raw element objects are matched on their `type`, lowercased with all
//! whitespace removed, so `"Design Brief"` and `"designbrief"` are the same
//! element. Anything unrecognized, including non-object entries, becomes
//! [`Element::Unknown`] and still renders.
//!
//! | `type`                             | Variant          |
//! |------------------------------------|------------------|
//! | `synopsis`                         | `Synopsis`       |
//! | `designbrief`                      | `DesignBrief`    |
//! | `notes`                            | `Notes`          |
//! | `pdf`                              | `Pdf`            |
//! | `video`                            | `Video`          |
//! | `image`, `images`                  | `Image`          |
//! | `reference`                        | `Reference`      |
//! | `typereference`, `type-reference`  | `TypeReference`  |

pub mod fields;
mod media;
pub mod reference;

pub use media::{MediaItem, normalize_items};
pub use reference::{Overrides, Reference, TypeReference};

use serde_json::Value;

use fields::{LINE_BREAK_FLAGS, Object, TEXT_BODY, any_flag, as_text, first_str};

/// Which media renderer a [`Media`] block goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Pdf,
    Video,
    Image,
}

impl MediaKind {
    /// Display name, also the default section heading.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Video => "Video",
            Self::Image => "Image",
        }
    }
}

/// A `pdf`, `video` or `image` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub kind: MediaKind,
    pub label: Option<String>,
    pub items: Vec<MediaItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Synopsis {
        text: String,
    },
    DesignBrief {
        /// One block per entry when the element has an `items` array.
        items: Option<Vec<String>>,
        content: String,
    },
    Notes {
        label: Option<String>,
        content: String,
        line_breaks: bool,
    },
    Media(Media),
    Reference(Reference),
    TypeReference(TypeReference),
    Unknown {
        /// The `type` as written, or empty.
        kind: String,
        raw: Value,
    },
}

/// Matching key for a `type` string.
pub fn normalize_type(kind: &str) -> String {
    kind.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl Element {
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(obj) = value else {
            return Self::unknown(value);
        };
        let kind = obj.get("type").and_then(Value::as_str).unwrap_or_default();

        match normalize_type(kind).as_str() {
            "synopsis" => Self::Synopsis {
                text: first_str(obj, TEXT_BODY).unwrap_or_default(),
            },
            "designbrief" => Self::DesignBrief {
                items: match obj.get("items") {
                    Some(Value::Array(items)) => Some(items.iter().filter_map(as_text).collect()),
                    _ => None,
                },
                content: text_field(obj, "content"),
            },
            "notes" => Self::Notes {
                label: obj.get("label").and_then(as_text),
                content: text_field(obj, "content"),
                line_breaks: any_flag(obj, LINE_BREAK_FLAGS),
            },
            "pdf" => Self::media(MediaKind::Pdf, obj),
            "video" => Self::media(MediaKind::Video, obj),
            "image" | "images" => Self::media(MediaKind::Image, obj),
            "reference" => Self::Reference(Reference::from_object(obj)),
            "typereference" | "type-reference" => {
                Self::TypeReference(TypeReference::from_object(obj))
            }
            _ => Self::unknown(value),
        }
    }

    /// Parse a whole element list, keeping order and count.
    pub fn parse_all(values: &[Value]) -> Vec<Self> {
        values.iter().map(Self::from_value).collect()
    }

    fn media(kind: MediaKind, obj: &Object) -> Self {
        Self::Media(Media {
            kind,
            label: obj.get("label").and_then(as_text),
            items: normalize_items(obj),
        })
    }

    fn unknown(value: &Value) -> Self {
        let kind = match value.get("type") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        Self::Unknown {
            kind,
            raw: value.clone(),
        }
    }
}

/// Text content that keeps surrounding whitespace (line breaks matter).
fn text_field(obj: &Object, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
