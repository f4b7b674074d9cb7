//! Resolved reference data.

use serde_json::Value;

use crate::core::page_href;
use crate::element::Overrides;
use crate::page::{PageDocument, PageSummary, RenderContext};
use crate::utils::date::timestamp_or_zero;

/// What a reference card shows about its target.
///
/// `brief` and `elements` are always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSnapshot {
    pub title: String,
    pub kind: String,
    pub date: String,
    pub brief: Vec<String>,
    pub elements: Vec<Value>,
}

/// One resolved reference target.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceItem {
    pub entry: PageSummary,
    pub page: PageSnapshot,
    pub href: String,
    pub cls: String,
    pub id: String,
    /// Sort key from the snapshot date, zero when unrecognized.
    pub timestamp: i64,
}

impl ReferenceItem {
    /// Merge sources with priority override > fetched > summary > id.
    ///
    /// The fetched title is expanded against the target's own context, so a
    /// document titled `"{file}"` shows its file name, not the referrer's.
    pub fn build(
        base: &str,
        cls: &str,
        id: &str,
        summary: Option<&PageSummary>,
        doc: &PageDocument,
        overrides: &Overrides,
    ) -> Self {
        let target = RenderContext::new(cls, id).with_document(doc);
        let fetched_title = doc.title.as_ref().map(|_| target.title.clone());

        let pick = |over: &Option<String>, fetched: Option<String>, summary: Option<&str>| {
            over.clone()
                .or(fetched)
                .or_else(|| summary.filter(|s| !s.trim().is_empty()).map(str::to_string))
        };

        let title = pick(
            &overrides.title,
            fetched_title,
            summary.map(|s| s.title.as_str()),
        )
        .unwrap_or_else(|| id.to_string());
        let kind = pick(&overrides.kind, doc.kind.clone(), summary.map(|s| s.kind.as_str()))
            .unwrap_or_default();
        let date = pick(&overrides.date, doc.date.clone(), summary.map(|s| s.date.as_str()))
            .unwrap_or_default();

        let entry = summary.cloned().unwrap_or_else(|| PageSummary {
            id: id.to_string(),
            title: title.clone(),
            kind: kind.clone(),
            date: date.clone(),
        });

        Self {
            timestamp: timestamp_or_zero(&date),
            href: page_href(base, cls, id),
            page: PageSnapshot {
                title,
                kind,
                date,
                brief: doc.brief.clone(),
                elements: doc.elements.clone(),
            },
            entry,
            cls: cls.to_string(),
            id: id.to_string(),
        }
    }

    /// Context for rendering the target's own elements in a preview.
    pub fn context(&self) -> RenderContext {
        RenderContext {
            cls: self.cls.clone(),
            id: self.id.clone(),
            title: self.page.title.clone(),
            kind: self.page.kind.clone(),
        }
    }
}
