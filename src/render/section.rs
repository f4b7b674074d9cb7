//! Section headings and the `<section>` wrapper.

use crate::utils::html::escape;

/// A section title, optionally split into heading and subtitle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Heading {
    Plain(String),
    /// Used when a section's own label only repeats its type name: the
    /// item's label becomes the heading and the type name a subtitle.
    Split { heading: String, subtitle: String },
}

impl Heading {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Main heading text, used for anchors and TOC rows.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Split { heading, .. } => heading,
        }
    }

    fn to_html(&self, level: u8) -> String {
        match self {
            Self::Plain(text) => {
                format!(r#"<h{level} class="element-title">{}</h{level}>"#, escape(text))
            }
            Self::Split { heading, subtitle } => format!(
                r#"<h{level} class="element-title">{}<span class="element-subtitle">{}</span></h{level}>"#,
                escape(heading),
                escape(subtitle)
            ),
        }
    }
}

/// Wrap rendered content in a section with its anchor id.
pub fn section(id: &str, heading: &Heading, level: u8, inner: &str) -> String {
    format!(
        r#"<section class="element" id="{}">{}{inner}</section>"#,
        escape(id),
        heading.to_html(level)
    )
}

/// Padded content card.
pub fn card(inner: &str) -> String {
    format!(r#"<div class="card" style="padding:14px;border-radius:14px">{inner}</div>"#)
}

/// Muted one-line message.
pub fn muted(text: &str) -> String {
    format!(r#"<p class="muted">{}</p>"#, escape(text))
}
