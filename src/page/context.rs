//! Route and page context for one render.

use super::{PageDocument, Route, template};

/// What placeholders and headers know about the page being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub cls: String,
    pub id: String,
    /// Page title with placeholders expanded, or the id when untitled.
    pub title: String,
    /// Page `type`, empty when absent.
    pub kind: String,
}

impl RenderContext {
    /// Context for a route whose document is not known yet.
    pub fn new(cls: impl Into<String>, id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            cls: cls.into(),
            title: id.clone(),
            id,
            kind: String::new(),
        }
    }

    pub fn for_route(route: &Route) -> Self {
        Self::new(route.cls.clone(), route.id.clone())
    }

    /// Fill title and type from the fetched document.
    pub fn with_document(mut self, doc: &PageDocument) -> Self {
        self.kind = doc.kind_str().to_string();
        if let Some(raw) = doc.title.as_deref() {
            let expanded = self.expand_title(raw);
            if !expanded.trim().is_empty() {
                self.title = expanded;
            }
        }
        self
    }

    /// Last `/` segment of the id.
    pub fn file(&self) -> &str {
        self.id.rsplit('/').next().unwrap_or(&self.id)
    }

    /// Expand `{file}`, `{class}`, `{id}` and `{type}` in a title.
    pub fn expand_title(&self, raw: &str) -> String {
        template::expand(
            raw,
            &[
                ("file", self.file()),
                ("class", self.cls.as_str()),
                ("id", self.id.as_str()),
                ("type", self.kind.as_str()),
            ],
        )
    }

    /// Expand `{title}`, `{class}`, `{type}`, `{id}` and `{file}` in a media path.
    pub fn expand_path(&self, raw: &str) -> String {
        template::expand(
            raw,
            &[
                ("title", self.title.as_str()),
                ("class", self.cls.as_str()),
                ("type", self.kind.as_str()),
                ("id", self.id.as_str()),
                ("file", self.file()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_is_last_segment() {
        assert_eq!(RenderContext::new("DE", "labs/unit 1/foo").file(), "foo");
        assert_eq!(RenderContext::new("DE", "foo").file(), "foo");
    }

    #[test]
    fn test_title_from_document() {
        let doc = PageDocument::from_value(json!({ "title": "{file} ({class})", "type": "Lab" }));
        let ctx = RenderContext::new("DE", "labs/foo").with_document(&doc);
        assert_eq!(ctx.title, "foo (DE)");
        assert_eq!(ctx.kind, "Lab");
    }

    #[test]
    fn test_untitled_uses_id() {
        let ctx = RenderContext::new("DE", "labs/foo").with_document(&PageDocument::default());
        assert_eq!(ctx.title, "labs/foo");
    }

    #[test]
    fn test_expand_path() {
        let doc = PageDocument::from_value(json!({ "title": "{file}", "type": "Lab" }));
        let ctx = RenderContext::new("DE", "labs/foo").with_document(&doc);
        assert_eq!(
            ctx.expand_path("media/{class}/{type}/{title}-{file}.png"),
            "media/DE/Lab/foo-foo.png"
        );
        assert_eq!(ctx.expand_path("{id}.pdf"), "labs/foo.pdf");
        assert_eq!(ctx.expand_path("{unknown}.pdf"), "{unknown}.pdf");
    }
}
