//! Page assembly: route in, finished page out.
//!
//! ```text
//! Idle -> RouteParsed -> DocumentFetched -> ElementsResolved -> Rendered
//!              |               |
//!              +---> Errored <-+
//! ```
//!
//! A route that does not parse and a document that cannot be fetched both
//! end in `Errored` with an error card as the whole body. Nothing past the
//! document fetch can fail.

pub mod shell;

use crate::config::SiteConfig;
use crate::debug;
use crate::element::Element;
use crate::page::{RenderContext, Route};
use crate::render::{AnchorRegistry, ElementRenderer, PdfProbe, RenderOptions, TocEntry};
use crate::resolve::Resolver;
use crate::source::Providers;

/// Where one page render stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    RouteParsed,
    DocumentFetched,
    ElementsResolved,
    Rendered,
    Errored,
}

impl Stage {
    pub const fn can_advance(self, to: Stage) -> bool {
        matches!(
            (self, to),
            (Self::Idle, Self::RouteParsed)
                | (Self::RouteParsed, Self::DocumentFetched | Self::Errored)
                | (Self::DocumentFetched, Self::ElementsResolved | Self::Errored)
                | (Self::ElementsResolved, Self::Rendered)
        )
    }

    fn advance(self, to: Stage) -> Stage {
        debug_assert!(self.can_advance(to), "invalid stage change {self:?} -> {to:?}");
        to
    }
}

/// Output of one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub stage: Stage,
    /// Expanded page title, or the error card title.
    pub title: String,
    /// Content of `<main>`.
    pub body: String,
    pub toc: Vec<TocEntry>,
}

impl RenderedPage {
    fn error(stage: Stage, title: &str, body: String) -> Self {
        Self {
            stage,
            title: title.to_string(),
            body,
            toc: Vec::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.stage == Stage::Errored
    }
}

pub struct Assembler<'a> {
    providers: &'a Providers,
    config: &'a SiteConfig,
    probe: Option<&'a dyn PdfProbe>,
}

impl<'a> Assembler<'a> {
    pub fn new(providers: &'a Providers, config: &'a SiteConfig) -> Self {
        Self {
            providers,
            config,
            probe: None,
        }
    }

    /// Size PDF embeds with `probe` when `render.pdf.autosize` is on.
    pub fn with_probe(mut self, probe: &'a dyn PdfProbe) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Render a URL-like route: query form or `{base}{class}/{id}`.
    pub fn render_route(&self, input: &str) -> RenderedPage {
        let stage = Stage::Idle.advance(Stage::RouteParsed);
        let site = &self.config.site;
        match Route::parse(input, &site.base, &site.classes) {
            Ok(route) => self.render(&route),
            Err(e) => {
                debug!("render"; "{}", e);
                RenderedPage::error(
                    stage.advance(Stage::Errored),
                    "Missing route",
                    shell::missing_route(&site.base),
                )
            }
        }
    }

    /// Render an already parsed route.
    pub fn render(&self, route: &Route) -> RenderedPage {
        let stage = Stage::RouteParsed;
        let base = self.config.site.base.as_str();

        let doc = match self.providers.documents.get(&route.cls, &route.id) {
            Ok(doc) => doc,
            Err(e) => {
                debug!("render"; "{}/{}: {}", route.cls, route.id, e);
                return RenderedPage::error(
                    stage.advance(Stage::Errored),
                    "Load error",
                    shell::load_error(&e.to_string()),
                );
            }
        };
        let stage = stage.advance(Stage::DocumentFetched);

        let ctx = RenderContext::for_route(route).with_document(&doc);
        let elements = Element::parse_all(&doc.elements);
        let resolved = Resolver::new(self.providers, base).resolve(elements, &ctx);
        let stage = stage.advance(Stage::ElementsResolved);

        let mut anchors = AnchorRegistry::new(self.config.slug.mode);
        let options = RenderOptions {
            base,
            pdf: &self.config.render.pdf,
            probe: self.probe,
        };
        let sections = ElementRenderer::new(options, &mut anchors).render_all(&resolved, &ctx);
        let toc = anchors.into_toc();

        let mut body = shell::header(&ctx.title, &ctx.cls, &doc);
        body.push_str(&shell::abstract_section(&doc.brief));
        body.push_str(&shell::toc_nav(&toc));
        body.push_str(&sections);

        RenderedPage {
            stage: stage.advance(Stage::Rendered),
            title: ctx.title,
            body,
            toc,
        }
    }

    /// Full HTML document for a rendered page.
    pub fn document(&self, page: RenderedPage) -> String {
        shell::document(&self.config.site, &page.title, page.body)
    }
}
