//! Manifest search: the filter behind `folio query`.
//!
//! Each entry is matched against `"{title} {type} {date} {class}"`
//! lowercased. A text query keeps manifest order; no text lists the pool
//! newest first.

use serde::Serialize;

use crate::core::page_href;
use crate::page::{Manifest, PageSummary};

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct SearchQuery<'a> {
    pub text: Option<&'a str>,
    pub class: Option<&'a str>,
    /// Exact type; only applied together with `class`.
    pub kind: Option<&'a str>,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    #[serde(rename = "class")]
    pub cls: String,
    #[serde(flatten)]
    pub entry: PageSummary,
    pub href: String,
}

fn haystack(cls: &str, entry: &PageSummary) -> String {
    format!("{} {} {} {}", entry.title, entry.kind, entry.date, cls).to_lowercase()
}

pub fn search(manifest: &Manifest, query: &SearchQuery<'_>, base: &str) -> Vec<SearchHit> {
    let class = query.class.map(str::trim).filter(|c| !c.is_empty());
    let kind = query.kind.map(str::trim).filter(|k| !k.is_empty());

    let mut pool: Vec<(&str, &PageSummary)> = manifest
        .iter()
        .filter(|(cls, _)| class.is_none_or(|c| c == *cls))
        .filter(|(_, entry)| class.is_none() || kind.is_none_or(|k| k == entry.kind))
        .collect();

    let needle = query
        .text
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());
    match needle {
        Some(needle) => pool.retain(|(cls, entry)| haystack(cls, entry).contains(&needle)),
        None => pool.sort_by_key(|(_, entry)| std::cmp::Reverse(entry.timestamp())),
    }

    pool.into_iter()
        .take(query.limit)
        .map(|(cls, entry)| SearchHit {
            cls: cls.to_string(),
            href: page_href(base, cls, &entry.id),
            entry: entry.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest() -> Manifest {
        Manifest::from_value(json!({
            "DE": [
                { "id": "solder", "title": "Soldering", "type": "Lab", "date": "2025-01-01" },
                { "id": "pcb", "title": "PCB Layout", "type": "Project", "date": "2025-06-01" }
            ],
            "CIM": [
                { "id": "cnc", "title": "CNC Mill", "type": "Lab", "date": "2024-03-01" }
            ]
        }))
        .unwrap()
    }

    fn ids(hits: &[SearchHit]) -> Vec<&str> {
        hits.iter().map(|h| h.entry.id.as_str()).collect()
    }

    fn query<'a>(
        text: Option<&'a str>,
        class: Option<&'a str>,
        kind: Option<&'a str>,
    ) -> SearchQuery<'a> {
        SearchQuery {
            text,
            class,
            kind,
            limit: DEFAULT_LIMIT,
        }
    }

    #[test]
    fn test_text_matches_any_field() {
        let m = manifest();
        assert_eq!(ids(&search(&m, &query(Some("lab"), None, None), "/")), ["solder", "cnc"]);
        assert_eq!(ids(&search(&m, &query(Some("cim"), None, None), "/")), ["cnc"]);
        assert_eq!(ids(&search(&m, &query(Some("2025-06"), None, None), "/")), ["pcb"]);
        assert!(search(&m, &query(Some("nothing"), None, None), "/").is_empty());
    }

    #[test]
    fn test_no_text_lists_newest_first() {
        let m = manifest();
        assert_eq!(ids(&search(&m, &query(None, None, None), "/")), ["pcb", "solder", "cnc"]);
        assert_eq!(ids(&search(&m, &query(Some("  "), Some("DE"), None), "/")), ["pcb", "solder"]);
    }

    #[test]
    fn test_type_filter_needs_class() {
        let m = manifest();
        assert_eq!(ids(&search(&m, &query(None, Some("DE"), Some("Lab")), "/")), ["solder"]);
        assert_eq!(search(&m, &query(None, None, Some("Lab")), "/").len(), 3);
    }

    #[test]
    fn test_limit_and_href() {
        let m = manifest();
        let hits = search(
            &m,
            &SearchQuery {
                limit: 1,
                ..query(None, None, None)
            },
            "/site/",
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].href, "/site/DE/pcb");
        let json = serde_json::to_value(&hits[0]).unwrap();
        assert_eq!(json["class"], "DE");
        assert_eq!(json["type"], "Project");
    }
}
