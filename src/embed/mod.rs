//! Embedded static resources.
//!
//! - `template` - Template types for typed variable injection
//! - `page` - HTML document shell shared by rendered pages and listings
//! - `css` - Default stylesheet, written when the site has none

mod template;

pub use template::{Template, TemplateVars};

pub mod page {
    use super::{Template, TemplateVars};
    use crate::utils::html::{escape, escape_attr};

    /// Variables for page.html.
    pub struct PageVars {
        /// Document `<title>`, unescaped.
        pub title: String,
        pub site_title: String,
        /// Normalized site base.
        pub base: String,
        /// Resume href, used verbatim.
        pub resume: Option<String>,
        /// Pre-rendered `<main>` content.
        pub body: String,
    }

    impl TemplateVars for PageVars {
        fn apply(&self, content: &str) -> String {
            // Body goes in last so its text is never scanned for markers.
            content
                .replace("__TITLE__", &escape(&self.title))
                .replace("__SITE_TITLE__", &escape(&self.site_title))
                .replace("__BASE__", &escape_attr(&self.base))
                .replace("__RESUME_LINK__", &resume_link(self.resume.as_deref()))
                .replace("__BODY__", &self.body)
        }
    }

    fn resume_link(href: Option<&str>) -> String {
        match href.map(str::trim) {
            Some(href) if !href.is_empty() => format!(
                r#"<a href="{}" target="_blank" rel="noopener">Resume</a>"#,
                escape_attr(href)
            ),
            _ => String::new(),
        }
    }

    pub const PAGE_HTML: Template<PageVars> = Template::new(include_str!("page.html"));
}

pub mod css {
    /// Output path of the stylesheet, relative to the site base.
    pub const STYLE_PATH: &str = "css/style.css";

    pub const STYLE_CSS: &str = include_str!("style.css");
}
