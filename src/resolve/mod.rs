//! Reference resolution.
//!
//! One pass over a page's elements that fetches whatever `reference` and
//! `type-reference` elements point at. Output has the same length and order
//! as the input; everything else passes through untouched.
//!
//! Provider failures never escape: a failed reference carries its message
//! for the renderer, a failed type-reference item is logged and dropped,
//! and a missing manifest only costs summaries and type matches.

mod item;

pub use item::ReferenceItem;

use rayon::prelude::*;

use crate::element::{Element, Reference, TypeReference};
use crate::page::{Manifest, PageSummary, RenderContext};
use crate::source::Providers;
use crate::{debug, log};
use std::sync::Arc;

/// An element after resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Element(Element),
    Reference(Reference, Result<ReferenceItem, String>),
    /// Items sorted newest first.
    TypeReference(TypeReference, Vec<ReferenceItem>),
}

pub struct Resolver<'a> {
    providers: &'a Providers,
    base: &'a str,
}

impl<'a> Resolver<'a> {
    pub fn new(providers: &'a Providers, base: &'a str) -> Self {
        Self { providers, base }
    }

    pub fn resolve(&self, elements: Vec<Element>, ctx: &RenderContext) -> Vec<Resolved> {
        elements
            .into_iter()
            .map(|element| match element {
                Element::Reference(reference) => {
                    let item = self.resolve_reference(&reference, ctx);
                    Resolved::Reference(reference, item)
                }
                Element::TypeReference(type_ref) => {
                    let items = self.resolve_type_reference(&type_ref, ctx);
                    Resolved::TypeReference(type_ref, items)
                }
                other => Resolved::Element(other),
            })
            .collect()
    }

    fn manifest(&self) -> Option<Arc<Manifest>> {
        match self.providers.manifest.get() {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                debug!("resolve"; "{}", e);
                None
            }
        }
    }

    pub fn resolve_reference(
        &self,
        reference: &Reference,
        ctx: &RenderContext,
    ) -> Result<ReferenceItem, String> {
        let Some((cls, id)) = reference.target.resolve(&ctx.cls) else {
            return Err("This reference does not name a target page.".into());
        };

        let doc = self.providers.documents.get(&cls, &id).map_err(|e| {
            log!("warning"; "reference {}/{} in {}/{}: {}", cls, id, ctx.cls, ctx.id, e);
            format!("Could not load {cls}/{id}.")
        })?;

        let manifest = self.manifest();
        let summary = manifest.as_deref().and_then(|m| m.entry(&cls, &id));
        Ok(ReferenceItem::build(
            self.base,
            &cls,
            &id,
            summary,
            &doc,
            &reference.overrides,
        ))
    }

    pub fn resolve_type_reference(
        &self,
        type_ref: &TypeReference,
        ctx: &RenderContext,
    ) -> Vec<ReferenceItem> {
        let wanted = type_ref.kind.trim();
        if wanted.is_empty() || ctx.cls.is_empty() {
            return Vec::new();
        }
        let Some(manifest) = self.manifest() else {
            return Vec::new();
        };

        let matches: Vec<&PageSummary> = manifest
            .class(&ctx.cls)
            .iter()
            .filter(|entry| entry.kind.trim().eq_ignore_ascii_case(wanted))
            .collect();

        let mut items: Vec<ReferenceItem> = matches
            .par_iter()
            .filter_map(|entry| match self.providers.documents.get(&ctx.cls, &entry.id) {
                Ok(doc) => Some(ReferenceItem::build(
                    self.base,
                    &ctx.cls,
                    &entry.id,
                    Some(*entry),
                    &doc,
                    &Default::default(),
                )),
                Err(e) => {
                    log!("warning"; "dropping {}/{} from `{}` list: {}", ctx.cls, entry.id, wanted, e);
                    None
                }
            })
            .collect();

        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::MemorySource;
    use serde_json::json;

    fn providers(source: MemorySource) -> Providers {
        Providers::new(Arc::new(source))
    }

    fn parse(value: serde_json::Value) -> Vec<Element> {
        Element::parse_all(value.as_array().unwrap())
    }

    #[test]
    fn test_type_reference_round_trip() {
        let p = providers(
            MemorySource::new()
                .with_manifest(r#"{"DE": [{"id": "a", "type": "Lab", "date": "2025-01-01"}]}"#)
                .with_page("DE", "a", r#"{"title": "A"}"#),
        );
        let resolver = Resolver::new(&p, "/");
        let resolved = resolver.resolve(
            parse(json!([{ "type": "type-reference", "targetType": "Lab" }])),
            &RenderContext::new("DE", "index"),
        );

        match &resolved[0] {
            Resolved::TypeReference(_, items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].id, "a");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_type_reference_no_matches_is_empty() {
        let p = providers(
            MemorySource::new().with_manifest(r#"{"DE": [{"id": "a", "type": "Lab"}]}"#),
        );
        let resolver = Resolver::new(&p, "/");
        let ctx = RenderContext::new("DE", "x");

        for element in [
            json!({ "type": "type-reference", "targetType": "Project" }),
            json!({ "type": "type-reference" }),
        ] {
            let resolved = resolver.resolve(parse(json!([element])), &ctx);
            assert!(matches!(&resolved[0], Resolved::TypeReference(_, items) if items.is_empty()));
        }
    }

    #[test]
    fn test_type_reference_sorted_and_failures_dropped() {
        let p = providers(
            MemorySource::new()
                .with_manifest(
                    r#"{"DE": [
                        {"id": "old", "type": "lab", "date": "2024-01-01"},
                        {"id": "missing", "type": "Lab", "date": "2026-01-01"},
                        {"id": "new", "type": " LAB ", "date": "08/09/25"},
                        {"id": "undated", "type": "Lab"},
                        {"id": "other", "type": "Project", "date": "2025-12-12"}
                    ]}"#,
                )
                .with_page("DE", "old", "{}")
                .with_page("DE", "new", "{}")
                .with_page("DE", "undated", "{}"),
        );
        let resolver = Resolver::new(&p, "/");
        let items = resolver.resolve_type_reference(
            &TypeReference {
                label: None,
                kind: "Lab".into(),
            },
            &RenderContext::new("DE", "x"),
        );
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["new", "old", "undated"]);
    }

    #[test]
    fn test_reference_resolution_and_errors() {
        let p = providers(
            MemorySource::new()
                .with_manifest(r#"{"DE": [{"id": "a", "title": "From Manifest", "type": "Lab"}]}"#)
                .with_page("DE", "a", r#"{"brief": ["b1"], "elements": [{"type": "synopsis"}]}"#),
        );
        let resolver = Resolver::new(&p, "/site/");
        let ctx = RenderContext::new("DE", "host");
        let resolved = resolver.resolve(
            parse(json!([
                { "type": "reference", "assignment": "a" },
                { "type": "reference", "target": "DE/missing" },
                { "type": "reference" },
                { "type": "synopsis", "content": "x" }
            ])),
            &ctx,
        );

        assert_eq!(resolved.len(), 4);
        match &resolved[0] {
            Resolved::Reference(_, Ok(item)) => {
                assert_eq!(item.page.title, "From Manifest");
                assert_eq!(item.page.brief, ["b1"]);
                assert_eq!(item.href, "/site/DE/a");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            &resolved[1],
            Resolved::Reference(_, Err(msg)) if msg.contains("DE/missing")
        ));
        assert!(matches!(&resolved[2], Resolved::Reference(_, Err(_))));
        assert!(matches!(&resolved[3], Resolved::Element(Element::Synopsis { .. })));
    }

    #[test]
    fn test_manifest_failure_is_not_fatal() {
        let p = providers(MemorySource::new().with_page("DE", "a", r#"{"title": "Doc A"}"#));
        let resolver = Resolver::new(&p, "/");
        let ctx = RenderContext::new("DE", "host");
        let resolved = resolver.resolve(
            parse(json!([
                { "type": "reference", "targetId": "a" },
                { "type": "type-reference", "targetType": "Lab" }
            ])),
            &ctx,
        );
        assert!(matches!(
            &resolved[0],
            Resolved::Reference(_, Ok(item)) if item.page.title == "Doc A"
        ));
        assert!(matches!(&resolved[1], Resolved::TypeReference(_, items) if items.is_empty()));
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let p = providers(
            MemorySource::new()
                .with_manifest(r#"{"DE": [{"id": "a", "type": "Lab"}]}"#)
                .with_page("DE", "a", "{}"),
        );
        let resolver = Resolver::new(&p, "/");
        let ctx = RenderContext::new("DE", "x");
        let input = json!([
            { "type": "type-reference", "targetType": "Lab" },
            { "type": "reference", "assignment": "a" }
        ]);
        assert_eq!(
            resolver.resolve(parse(input.clone()), &ctx),
            resolver.resolve(parse(input), &ctx)
        );
    }
}
