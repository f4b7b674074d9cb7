//! Page chrome around rendered sections: header, abstract, TOC and error
//! cards, plus the full HTML document.

use crate::config::SiteSectionConfig;
use crate::embed::page::{PAGE_HTML, PageVars};
use crate::page::PageDocument;
use crate::render::{TocEntry, card, shows_toc};
use crate::utils::html::{chips, escape, escape_attr};

pub fn header(title: &str, cls: &str, doc: &PageDocument) -> String {
    let mut html = format!(
        r#"<header class="page-header"><h1 class="page-title">{}</h1>"#,
        escape(title)
    );
    let tags = chips(cls, doc.kind_str());
    if !tags.is_empty() {
        html.push_str(&format!(r#"<div class="page-tags">{tags}</div>"#));
    }
    if !doc.date_str().is_empty() {
        html.push_str(&format!(
            r#"<div class="page-date">{}</div>"#,
            escape(doc.date_str())
        ));
    }
    html.push_str("</header>");
    html
}

/// Abstract bullets, or nothing when the page has no brief.
pub fn abstract_section(brief: &[String]) -> String {
    if brief.is_empty() {
        return String::new();
    }
    let items: String = brief
        .iter()
        .map(|line| format!("<li>{}</li>", escape(line)))
        .collect();
    format!(
        r#"<section class="abstract element"><h2 class="element-title">Abstract</h2><div class="card"><ul class="brief">{items}</ul></div></section>"#
    )
}

/// TOC navigation, or nothing at or below the threshold.
pub fn toc_nav(toc: &[TocEntry]) -> String {
    if !shows_toc(toc.len()) {
        return String::new();
    }
    let rows: String = toc
        .iter()
        .map(|entry| {
            format!(
                r##"<li><a href="#{}">{}</a></li>"##,
                escape_attr(&entry.id),
                escape(&entry.title)
            )
        })
        .collect();
    format!(r#"<nav class="toc card"><h2 class="toc-title">Contents</h2><ol>{rows}</ol></nav>"#)
}

pub fn missing_route(base: &str) -> String {
    let base = escape(base);
    card(&format!(
        r#"<h2>Missing route</h2><p class="muted">Open with <code>{base}?class=DE&amp;id=1.1.9%20Soldering%20Desoldering</code> or use a pretty URL like <code>{base}DE/1.1.9%20Soldering%20Desoldering</code>.</p>"#
    ))
}

pub fn load_error(message: &str) -> String {
    card(&format!(
        r#"<h2>Load error</h2><p class="muted">{}</p>"#,
        escape(message)
    ))
}

/// Wrap a body in the HTML document shell.
pub fn document(site: &SiteSectionConfig, title: &str, body: String) -> String {
    let title = match (title.trim(), site.title.trim()) {
        ("", site_title) => site_title.to_string(),
        (title, "") => title.to_string(),
        (title, site_title) if title == site_title => title.to_string(),
        (title, site_title) => format!("{title} | {site_title}"),
    };
    PAGE_HTML.render(&PageVars {
        title,
        site_title: site.title.clone(),
        base: site.base.clone(),
        resume: site.resume.clone(),
        body,
    })
}
