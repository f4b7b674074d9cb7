//! Manifest: page summaries grouped by class.
//!
//! ```json
//! {
//!   "DE":  [{ "id": "1.1.9 Soldering", "title": "Soldering", "type": "Lab", "date": "2025-08-12" }],
//!   "CIM": []
//! }
//! ```
//!
//! Class order is the order of keys in the file. Parsing is lenient: a
//! class whose value is not an array has no entries, and entries that are
//! not objects or have no `id` are skipped.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::utils::date::timestamp_or_zero;

/// One manifest row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PageSummary {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
}

impl PageSummary {
    /// Sortable timestamp of `date`, zero when unrecognized.
    pub fn timestamp(&self) -> i64 {
        timestamp_or_zero(&self.date)
    }

    fn from_value(value: Value) -> Option<Self> {
        let Value::Object(map) = value else {
            return None;
        };
        let field = |key: &str| -> String {
            match map.get(key) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => String::new(),
            }
        };

        let id = field("id");
        if id.is_empty() {
            return None;
        }
        let title = match field("title") {
            t if t.trim().is_empty() => id.clone(),
            t => t,
        };
        Some(Self {
            title,
            kind: field("type"),
            date: field("date"),
            id,
        })
    }
}

/// Class name to ordered summaries, preserving class order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    classes: Vec<(String, Vec<PageSummary>)>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw manifest bytes. Fails only when the bytes are not JSON or
    /// the top level is not an object.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, String> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, String> {
        let Value::Object(map) = value else {
            return Err("manifest is not a JSON object".into());
        };

        let classes = map
            .into_iter()
            .map(|(cls, entries)| {
                let entries = match entries {
                    Value::Array(items) => items
                        .into_iter()
                        .filter_map(PageSummary::from_value)
                        .collect(),
                    _ => Vec::new(),
                };
                (cls, entries)
            })
            .collect();
        Ok(Self { classes })
    }

    /// Append or replace a class.
    pub fn insert(&mut self, cls: impl Into<String>, entries: Vec<PageSummary>) {
        let cls = cls.into();
        match self.classes.iter_mut().find(|(name, _)| *name == cls) {
            Some((_, existing)) => *existing = entries,
            None => self.classes.push((cls, entries)),
        }
    }

    /// Entries of one class; empty for an unknown class.
    pub fn class(&self, cls: &str) -> &[PageSummary] {
        self.classes
            .iter()
            .find(|(name, _)| name == cls)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or_default()
    }

    pub fn entry(&self, cls: &str, id: &str) -> Option<&PageSummary> {
        self.class(cls).iter().find(|entry| entry.id == id)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|(name, _)| name.as_str())
    }

    /// `(class, entry)` pairs in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PageSummary)> {
        self.classes
            .iter()
            .flat_map(|(cls, entries)| entries.iter().map(move |e| (cls.as_str(), e)))
    }

    pub fn len(&self) -> usize {
        self.classes.iter().map(|(_, entries)| entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.classes.len()))?;
        for (cls, entries) in &self.classes {
            map.serialize_entry(cls, entries)?;
        }
        map.end()
    }
}
