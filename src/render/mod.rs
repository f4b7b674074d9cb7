//! Element rendering.
//!
//! Turns resolved elements into HTML sections. Every section claims one
//! anchor from the page's [`AnchorRegistry`]; media with several items and
//! type-references with matches record their own rows instead of the
//! section row.
//!
//! Rendering never fails: failed references arrive as messages and unknown
//! elements render as a visible diagnostic block.

pub mod anchor;
mod media;
pub mod pdf;
mod section;
mod text;
mod video;

pub use anchor::{AnchorRegistry, TocEntry, shows_toc, slugify};
pub use pdf::{PdfProbe, SniffProbe};
pub use section::{Heading, card, muted};
pub use text::rich_text;

use serde_json::Value;

use crate::config::PdfConfig;
use crate::element::{Element, Reference, TypeReference};
use crate::page::RenderContext;
use crate::resolve::{ReferenceItem, Resolved};
use crate::utils::html::{chips, escape, escape_attr};
use section::section;

const NO_MATCHES: &str = "No matching assignments found.";
const NO_ABSTRACT: &str = "No abstract provided.";
const NESTED_REFERENCE: &str = "Nested references are not expanded in previews.";

/// Settings shared by every section of a render.
#[derive(Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Normalized site base, e.g. `/eng-portfolio/`.
    pub base: &'a str,
    pub pdf: &'a PdfConfig,
    pub probe: Option<&'a dyn PdfProbe>,
}

/// Whether claimed anchors also become TOC rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocMode {
    Record,
    Silent,
}

#[derive(Debug, Clone, Copy)]
struct Scope {
    toc: TocMode,
    level: u8,
}

const PAGE: Scope = Scope {
    toc: TocMode::Record,
    level: 2,
};

/// Previews inside reference cards: ids come from the same registry so
/// they stay unique, but never reach the TOC.
const PREVIEW: Scope = Scope {
    toc: TocMode::Silent,
    level: 3,
};

pub struct ElementRenderer<'a> {
    options: RenderOptions<'a>,
    anchors: &'a mut AnchorRegistry,
}

impl<'a> ElementRenderer<'a> {
    pub fn new(options: RenderOptions<'a>, anchors: &'a mut AnchorRegistry) -> Self {
        Self { options, anchors }
    }

    /// Render a page's resolved elements in order.
    pub fn render_all(&mut self, resolved: &[Resolved], ctx: &RenderContext) -> String {
        resolved
            .iter()
            .enumerate()
            .map(|(i, r)| self.render(i + 1, r, ctx))
            .collect()
    }

    /// Render one top-level element; `position` is 1-based.
    pub fn render(&mut self, position: usize, resolved: &Resolved, ctx: &RenderContext) -> String {
        match resolved {
            Resolved::Element(element) => self.element(position, element, ctx, PAGE),
            Resolved::Reference(reference, item) => self.reference(position, reference, item),
            Resolved::TypeReference(type_ref, items) => {
                self.type_reference(position, type_ref, items)
            }
        }
    }

    fn element(
        &mut self,
        position: usize,
        element: &Element,
        ctx: &RenderContext,
        scope: Scope,
    ) -> String {
        match element {
            Element::Synopsis { text } => {
                let body = card(&rich_text(text, false));
                self.block(position, Heading::plain("Synopsis"), &body, scope)
            }
            Element::DesignBrief { items, content } => {
                let body = match items {
                    Some(items) => items
                        .iter()
                        .map(|item| {
                            format!(
                                r#"<div class="card" style="margin-top:10px">{}</div>"#,
                                rich_text(item, false)
                            )
                        })
                        .collect(),
                    None => card(&rich_text(content, false)),
                };
                self.block(position, Heading::plain("Design Brief"), &body, scope)
            }
            Element::Notes {
                label,
                content,
                line_breaks,
            } => {
                let heading = Heading::plain(label.as_deref().unwrap_or("Notes"));
                let body = card(&rich_text(content, *line_breaks));
                self.block(position, heading, &body, scope)
            }
            Element::Media(media) => self.media(position, media, ctx, scope),
            Element::Reference(_) | Element::TypeReference(_) => {
                self.block(position, Heading::plain("Reference"), &muted(NESTED_REFERENCE), scope)
            }
            Element::Unknown { kind, raw } => {
                let heading = match kind.as_str() {
                    "" => Heading::plain("Unknown element"),
                    kind => Heading::plain(kind),
                };
                self.block(position, heading, &unknown_block(kind, raw), scope)
            }
        }
    }

    fn reference(
        &mut self,
        position: usize,
        reference: &Reference,
        item: &Result<ReferenceItem, String>,
    ) -> String {
        let label = reference.label.as_deref();
        match item {
            Ok(item) => {
                let title = item.page.title.as_str();
                let heading = Heading::plain(label.unwrap_or(title));
                let id = self
                    .anchors
                    .claim_id(title, &format!("Section {position}"));
                self.record(PAGE, &id, toc_title(title, position));
                let body = self.card(item, None, reference.preview.as_ref());
                section(&id, &heading, PAGE.level, &body)
            }
            Err(message) => {
                let heading = Heading::plain(label.unwrap_or("Reference"));
                self.block(position, heading, &muted(message), PAGE)
            }
        }
    }

    fn type_reference(
        &mut self,
        position: usize,
        type_ref: &TypeReference,
        items: &[ReferenceItem],
    ) -> String {
        let kind = type_ref.kind.trim();
        let heading = Heading::plain(
            type_ref
                .label
                .as_deref()
                .or((!kind.is_empty()).then_some(kind))
                .unwrap_or("Assignments"),
        );
        if items.is_empty() {
            return self.block(position, heading, &muted(NO_MATCHES), PAGE);
        }

        let id = self.claim_section(&heading, position);
        let mut cards = String::new();
        for (i, item) in items.iter().enumerate() {
            let fallback = format!("Assignment {}", i + 1);
            let card_id = self.anchors.claim_id(&item.page.title, &fallback);
            let title = match item.page.title.trim() {
                "" => fallback.as_str(),
                title => title,
            };
            self.record(PAGE, &card_id, title);
            cards.push_str(&self.card(item, Some(&card_id), None));
        }
        section(
            &id,
            &heading,
            PAGE.level,
            &format!(r#"<div class="ref-list">{cards}</div>"#),
        )
    }

    /// One reference card.
    ///
    /// The preview is the override when given, else the target's only
    /// element; pages with zero or several elements get a link instead.
    fn card(&mut self, item: &ReferenceItem, id: Option<&str>, preview: Option<&Value>) -> String {
        let page = &item.page;
        let mut html = match id {
            Some(id) => format!(r#"<article class="card ref-card" id="{}">"#, escape_attr(id)),
            None => r#"<article class="card ref-card">"#.to_string(),
        };

        html.push_str(&format!(
            r#"<h3 class="ref-title"><a href="{}">{}</a></h3>"#,
            escape_attr(&item.href),
            escape(&page.title)
        ));
        html.push_str(&format!(r#"<div class="ref-meta">{}"#, chips(&item.cls, &page.kind)));
        if !page.date.trim().is_empty() {
            html.push_str(&format!(r#"<span class="ref-date">{}</span>"#, escape(&page.date)));
        }
        html.push_str("</div>");

        if page.brief.is_empty() {
            html.push_str(&muted(NO_ABSTRACT));
        } else {
            html.push_str(r#"<ul class="brief">"#);
            for line in &page.brief {
                html.push_str(&format!("<li>{}</li>", escape(line)));
            }
            html.push_str("</ul>");
        }

        let preview = preview.or(match page.elements.as_slice() {
            [only] => Some(only),
            _ => None,
        });
        match preview {
            Some(value) => {
                let element = Element::from_value(value);
                let inner = self.element(1, &element, &item.context(), PREVIEW);
                html.push_str(&format!(r#"<div class="ref-preview">{inner}</div>"#));
            }
            None => html.push_str(&format!(
                r#"<a class="btn" href="{}">View Assignment</a>"#,
                escape_attr(&item.href)
            )),
        }

        html.push_str("</article>");
        html
    }

    /// A section with one anchor and, in page scope, one TOC row.
    fn block(&mut self, position: usize, heading: Heading, body: &str, scope: Scope) -> String {
        let id = self.claim_section(&heading, position);
        self.record(scope, &id, toc_title(heading.text(), position));
        section(&id, &heading, scope.level, body)
    }

    fn claim_section(&mut self, heading: &Heading, position: usize) -> String {
        self.anchors
            .claim_id(heading.text(), &format!("Section {position}"))
    }

    fn record(&mut self, scope: Scope, id: &str, title: impl Into<String>) {
        if scope.toc == TocMode::Record {
            self.anchors.record(id, title);
        }
    }
}

fn toc_title(text: &str, position: usize) -> String {
    match text.trim() {
        "" => format!("Section {position}"),
        text => text.to_string(),
    }
}

fn unknown_block(kind: &str, raw: &Value) -> String {
    let pretty = serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string());
    format!(
        r#"<div class="card unknown-element"><p class="muted">Unknown element type <code>{}</code></p><pre>{}</pre></div>"#,
        escape(kind),
        escape(&pretty)
    )
}

#[cfg(test)]
mod tests {
    use super::pdf::PdfInfo;
    use super::*;
    use crate::config::SlugMode;
    use crate::element::Overrides;
    use crate::element::reference::TargetSpec;
    use crate::page::PageDocument;
    use serde_json::json;

    struct FixedProbe(PdfInfo);

    impl PdfProbe for FixedProbe {
        fn probe(&self, _path: &str) -> Option<PdfInfo> {
            Some(self.0)
        }
    }

    fn render_with(
        resolved: &[Resolved],
        ctx: &RenderContext,
        probe: Option<&dyn PdfProbe>,
    ) -> (String, Vec<TocEntry>) {
        let pdf = PdfConfig::default();
        let mut anchors = AnchorRegistry::new(SlugMode::Full);
        let options = RenderOptions {
            base: "/site/",
            pdf: &pdf,
            probe,
        };
        let html = ElementRenderer::new(options, &mut anchors).render_all(resolved, ctx);
        (html, anchors.into_toc())
    }

    fn render(values: serde_json::Value) -> (String, Vec<TocEntry>) {
        let resolved: Vec<_> = Element::parse_all(values.as_array().unwrap())
            .into_iter()
            .map(Resolved::Element)
            .collect();
        render_with(&resolved, &RenderContext::new("DE", "foo"), None)
    }

    fn item(title: &str, elements: serde_json::Value) -> ReferenceItem {
        let doc = PageDocument::from_value(json!({
            "title": title,
            "type": "Lab",
            "elements": elements
        }));
        ReferenceItem::build("/site/", "DE", title, None, &doc, &Overrides::default())
    }

    #[test]
    fn test_unknown_type_renders_diagnostic() {
        let (html, toc) = render(json!([{ "type": "bogus-type-xyz", "payload": "<x>" }]));
        assert!(html.contains("bogus-type-xyz"));
        assert!(html.contains("unknown-element"));
        assert!(html.contains("&lt;x&gt;"));
        assert_eq!(toc.len(), 1);
    }

    #[test]
    fn test_section_ids_and_toc_rows() {
        let (html, toc) = render(json!([
            { "type": "synopsis", "content": "A" },
            { "type": "notes", "content": "B" },
            { "type": "notes", "label": "Notes", "content": "C" }
        ]));
        let ids: Vec<_> = toc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["synopsis", "notes", "notes-2"]);
        assert!(html.contains(r#"<section class="element" id="notes-2">"#));
    }

    #[test]
    fn test_design_brief_items() {
        let (html, _) = render(json!([{ "type": "designbrief", "items": ["one", "**two**"] }]));
        assert_eq!(html.matches(r#"style="margin-top:10px""#).count(), 2);
        assert!(html.contains("<strong>two</strong>"));
    }

    #[test]
    fn test_single_media_reuses_section_anchor() {
        let (html, toc) = render(json!([
            { "type": "image", "src": "{file}.png", "label": "Front" }
        ]));
        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].id, "front");
        assert!(html.contains(r#"<figure class="media">"#));
        assert!(html.contains(r#"src="/site/foo.png""#));
    }

    #[test]
    fn test_multi_media_items_get_own_rows() {
        let (html, toc) = render(json!([{
            "type": "images",
            "items": [{ "src": "a.png", "label": "Side" }, { "src": "b.png" }]
        }]));
        let rows: Vec<_> = toc.iter().map(|e| (e.id.as_str(), e.title.as_str())).collect();
        assert_eq!(rows, [("side", "Side"), ("image-2", "Image 2")]);
        assert!(html.contains(r#"<section class="element" id="image">"#));
        assert!(html.contains(r#"<figure class="media" id="image-2">"#));
    }

    #[test]
    fn test_pdf_actions_and_probe() {
        let probe = FixedProbe(PdfInfo {
            size: Some((612.0, 792.0)),
            pages: Some(1),
        });
        let resolved = vec![Resolved::Element(Element::from_value(&json!({
            "type": "pdf", "src": "docs/{id} report.pdf"
        })))];
        let (html, _) = render_with(&resolved, &RenderContext::new("DE", "foo"), Some(&probe));
        assert!(html.contains(r#"src="/site/docs/foo%20report.pdf#zoom=page-width""#));
        assert!(html.contains(r#"href="/site/docs/foo%20report.pdf" download>Download</a>"#));
        assert!(html.contains("aspect-ratio: 612 / 792"));

        let (html, _) = render_with(&resolved, &RenderContext::new("DE", "foo"), None);
        assert!(html.contains("#zoom=100"));
        assert!(html.contains("Open in new tab"));
    }

    #[test]
    fn test_reference_card_with_preview() {
        let reference = Reference {
            label: None,
            target: TargetSpec::default(),
            overrides: Overrides::default(),
            preview: None,
        };
        let single = item("Solo", json!([{ "type": "synopsis", "content": "inside" }]));
        let many = item("Many", json!([{ "type": "synopsis" }, { "type": "notes" }]));
        let resolved = vec![
            Resolved::Reference(reference.clone(), Ok(single)),
            Resolved::Reference(reference.clone(), Ok(many)),
            Resolved::Reference(reference, Err("Could not load DE/x.".into())),
        ];
        let (html, toc) = render_with(&resolved, &RenderContext::new("DE", "host"), None);

        assert!(html.contains(r#"<div class="ref-preview">"#));
        assert!(html.contains("inside"));
        assert!(html.contains("View Assignment"));
        assert!(html.contains(NO_ABSTRACT));
        assert!(html.contains("Could not load DE/x."));
        // Preview sections claim ids but stay out of the TOC.
        let titles: Vec<_> = toc.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Solo", "Many", "Reference"]);
        assert!(html.contains(r#"<section class="element" id="synopsis">"#));
    }

    #[test]
    fn test_type_reference_cards_and_empty() {
        let type_ref = TypeReference {
            label: None,
            kind: "Lab".into(),
        };
        let resolved = vec![
            Resolved::TypeReference(
                type_ref.clone(),
                vec![item("A", json!([])), item("B", json!([]))],
            ),
            Resolved::TypeReference(type_ref, vec![]),
        ];
        let (html, toc) = render_with(&resolved, &RenderContext::new("DE", "host"), None);

        let rows: Vec<_> = toc.iter().map(|e| (e.id.as_str(), e.title.as_str())).collect();
        assert_eq!(rows, [("a", "A"), ("b", "B"), ("lab-2", "Lab")]);
        assert!(html.contains(r#"<article class="card ref-card" id="a">"#));
        assert!(html.contains(NO_MATCHES));
    }

    #[test]
    fn test_nested_reference_in_preview_is_a_note() {
        let single = item("Solo", json!([{ "type": "reference", "target": "DE/x" }]));
        let reference = Reference {
            label: Some("See also".into()),
            target: TargetSpec::default(),
            overrides: Overrides::default(),
            preview: None,
        };
        let (html, _) = render_with(
            &[Resolved::Reference(reference, Ok(single))],
            &RenderContext::new("DE", "host"),
            None,
        );
        assert!(html.contains(NESTED_REFERENCE));
        assert!(html.contains(r#"<h2 class="element-title">See also</h2>"#));
    }

    #[test]
    fn test_preview_override_replaces_link() {
        let reference = Reference {
            label: None,
            target: TargetSpec::default(),
            overrides: Overrides::default(),
            preview: Some(json!({
                "type": "notes",
                "label": "Takeaway",
                "content": "from override"
            })),
        };
        let many = item(
            "Many",
            json!([
                { "type": "synopsis", "content": "first" },
                { "type": "notes", "content": "second" }
            ]),
        );
        let (html, toc) = render_with(
            &[Resolved::Reference(reference, Ok(many))],
            &RenderContext::new("DE", "host"),
            None,
        );

        assert!(html.contains(r#"<div class="ref-preview">"#));
        assert!(html.contains("from override"));
        assert!(html.contains(r#"<h3 class="element-title">Takeaway</h3>"#));
        assert!(!html.contains("View Assignment"));
        assert!(!html.contains("first"));
        assert_eq!(toc.len(), 1);
    }

    #[test]
    fn test_card_brief_is_plain_text() {
        let doc = PageDocument::from_value(json!({
            "title": "Ohms",
            "brief": ["Measured 2 * 3 * 4 = 24 ohms"],
            "elements": []
        }));
        let measured =
            ReferenceItem::build("/site/", "DE", "ohms", None, &doc, &Overrides::default());
        let reference = Reference {
            label: None,
            target: TargetSpec::default(),
            overrides: Overrides::default(),
            preview: None,
        };
        let (html, _) = render_with(
            &[Resolved::Reference(reference, Ok(measured))],
            &RenderContext::new("DE", "host"),
            None,
        );
        assert!(html.contains("<li>Measured 2 * 3 * 4 = 24 ohms</li>"));
        assert!(!html.contains("<em>"));
    }
}
