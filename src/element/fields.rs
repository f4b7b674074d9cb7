//! Priority-ordered field lookup over loose JSON objects.
//!
//! Content written over several years names the same thing several ways
//! (`targetId` vs `assignmentId`, `entryTitle` vs `title`). Each concern
//! declares its candidate keys once, in priority order, and the first
//! non-empty value wins.

use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

/// Class of a reference target.
pub const TARGET_CLASS: &[&str] = &["targetClass", "class", "cls"];
/// Id of a reference target.
pub const TARGET_ID: &[&str] = &["targetId", "assignmentId"];
/// Combined target: `"{cls}/{id}"`, a bare id, or a nested object.
pub const TARGET_COMBINED: &[&str] = &["target", "reference", "value", "lookup"];
/// Bare id in the route's class.
pub const TARGET_ASSIGNMENT: &[&str] = &["assignment"];

pub const OVERRIDE_TITLE: &[&str] = &["entryTitle", "title", "targetTitle"];
pub const OVERRIDE_TYPE: &[&str] = &["entryType", "targetType"];
pub const OVERRIDE_DATE: &[&str] = &["entryDate", "date", "targetDate"];
pub const OVERRIDE_PREVIEW: &[&str] = &["preview", "previewElement"];

/// Type a `type-reference` lists.
pub const MATCH_TYPE: &[&str] = &[
    "referenceType",
    "targetType",
    "target",
    "reference",
    "value",
    "lookup",
    "label",
];

/// Flags that turn on `<br>` for notes.
pub const LINE_BREAK_FLAGS: &[&str] = &["preserveLineBreaks", "lineBreaks", "breaks"];

/// Body text of text blocks.
pub const TEXT_BODY: &[&str] = &["content", "text"];

fn is_present(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.trim().is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Number(_) => true,
        _ => false,
    }
}

/// First present value among `keys`.
pub fn first_non_empty<'a>(obj: &'a Object, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| is_present(value))
}

/// First present string (numbers are stringified) among `keys`, trimmed.
///
/// Objects are skipped rather than ending the search.
pub fn first_str(obj: &Object, keys: &[&str]) -> Option<String> {
    keys.iter().filter_map(|key| obj.get(*key)).find_map(as_text)
}

/// Text of a scalar value, `None` when blank or not a string/number.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// `true` when any of `keys` is literally `true`.
pub fn any_flag(obj: &Object, keys: &[&str]) -> bool {
    keys.iter()
        .any(|key| matches!(obj.get(*key), Some(Value::Bool(true))))
}
