//! Listing pages built from the manifest.
//!
//! | Page                     | Content                                   |
//! |--------------------------|-------------------------------------------|
//! | `index.html`             | Most recent items, then every class       |
//! | `certifications.html`    | Certifications class in manifest order    |
//! | `{class}-elements.html`  | One class filtered by type, newest first  |

pub mod search;

use crate::config::SiteConfig;
use crate::core::page_href;
use crate::page::{Manifest, PageSummary};
use crate::render::{muted, slugify};
use crate::source::SourceError;
use crate::utils::html::{chips, escape, escape_attr};

pub const HOME_PAGE: &str = "index.html";
pub const CERTIFICATIONS_PAGE: &str = "certifications.html";

type Row<'a> = (&'a str, &'a PageSummary);

/// Output file name of the elements listing, e.g. `edd-elements.html`.
pub fn elements_page_name(cls: &str) -> String {
    let slug = slugify(cls, Default::default());
    if slug.is_empty() {
        "elements.html".to_string()
    } else {
        format!("{slug}-elements.html")
    }
}

/// The `n` newest entries across all classes; ties keep manifest order.
pub fn recent(manifest: &Manifest, n: usize) -> Vec<Row<'_>> {
    let mut rows: Vec<Row<'_>> = manifest.iter().collect();
    rows.sort_by_key(|(_, entry)| std::cmp::Reverse(entry.timestamp()));
    rows.truncate(n);
    rows
}

/// Entries of one class whose type matches, newest first.
pub fn elements<'a>(manifest: &'a Manifest, cls: &'a str, kind: &str) -> Vec<Row<'a>> {
    let kind = kind.trim();
    let mut rows: Vec<Row<'a>> = manifest
        .class(cls)
        .iter()
        .filter(|entry| entry.kind.trim().eq_ignore_ascii_case(kind))
        .map(|entry| (cls, entry))
        .collect();
    rows.sort_by_key(|(_, entry)| std::cmp::Reverse(entry.timestamp()));
    rows
}

fn row(base: &str, (cls, entry): Row<'_>) -> String {
    format!(
        r#"<li><a href="{}">{}</a>{}<span class="item-date">{}</span></li>"#,
        escape_attr(&page_href(base, cls, &entry.id)),
        escape(&entry.title),
        chips(cls, &entry.kind),
        escape(&entry.date)
    )
}

fn list(base: &str, rows: &[Row<'_>], empty: &str) -> String {
    if rows.is_empty() {
        return muted(empty);
    }
    let items: String = rows.iter().map(|r| row(base, *r)).collect();
    format!(r#"<ul class="listing">{items}</ul>"#)
}

fn header(title: &str) -> String {
    format!(
        r#"<header class="page-header"><h1 class="page-title">{}</h1></header>"#,
        escape(title)
    )
}

fn section(id: &str, title: &str, inner: &str) -> String {
    format!(
        r#"<section class="element" id="{}"><h2 class="element-title">{}</h2>{inner}</section>"#,
        escape_attr(id),
        escape(title)
    )
}

/// Listing bodies for one site.
pub struct Listings<'a> {
    config: &'a SiteConfig,
    manifest: Result<&'a Manifest, &'a SourceError>,
}

impl<'a> Listings<'a> {
    pub fn new(config: &'a SiteConfig, manifest: Result<&'a Manifest, &'a SourceError>) -> Self {
        Self { config, manifest }
    }

    fn base(&self) -> &str {
        &self.config.site.base
    }

    pub fn home(&self) -> String {
        let mut body = header(&self.config.site.title);
        let manifest = match self.manifest {
            Ok(manifest) => manifest,
            Err(_) => {
                body.push_str(&section("recent", "Recent", &muted("Failed to load recent items")));
                return body;
            }
        };

        let recent = recent(manifest, self.config.listing.recent);
        body.push_str(&section(
            "recent",
            "Recent",
            &list(self.base(), &recent, "No recent items"),
        ));

        for cls in manifest.classes() {
            let rows: Vec<Row<'_>> = manifest.class(cls).iter().map(|e| (cls, e)).collect();
            let id = match slugify(cls, self.config.slug.mode) {
                slug if slug.is_empty() => "class".to_string(),
                slug => format!("class-{slug}"),
            };
            body.push_str(&section(&id, cls, &list(self.base(), &rows, "No items yet")));
        }
        body
    }

    pub fn certifications(&self) -> String {
        let cls = self.config.listing.certifications.as_str();
        let mut body = header(cls);
        body.push_str(&match self.manifest {
            Ok(manifest) => {
                let rows: Vec<Row<'_>> = manifest.class(cls).iter().map(|e| (cls, e)).collect();
                list(self.base(), &rows, "No certifications yet")
            }
            Err(_) => muted("Failed to load certifications"),
        });
        body
    }

    pub fn elements(&self) -> String {
        let config = &self.config.listing.elements;
        let mut body = header(&format!("{} Elements", config.class));
        body.push_str(&match self.manifest {
            Ok(manifest) => {
                let rows = elements(manifest, &config.class, &config.kind);
                list(
                    self.base(),
                    &rows,
                    &format!("No {} elements yet", config.class),
                )
            }
            Err(_) => muted(&format!("Failed to load {} elements", config.class)),
        });
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest() -> Manifest {
        Manifest::from_value(json!({
            "DE": [
                { "id": "a", "title": "Alpha", "type": "Lab", "date": "2025-01-01" },
                { "id": "b", "title": "Beta", "type": "Lab", "date": "2025-03-01" }
            ],
            "EDD": [
                { "id": "cube", "title": "Cube", "type": " Elements ", "date": "08/09/25" },
                { "id": "gear", "title": "Gear", "type": "elements", "date": "2025-09-01" },
                { "id": "notes", "title": "Notes", "type": "Project", "date": "2025-12-01" }
            ],
            "Certifications": [
                { "id": "osha", "title": "OSHA 10", "type": "Certifications", "date": "2024-05-05" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_recent_across_classes() {
        let m = manifest();
        let ids: Vec<_> = recent(&m, 3).iter().map(|(_, e)| e.id.as_str()).collect();
        assert_eq!(ids, ["notes", "gear", "cube"]);
    }

    #[test]
    fn test_elements_filter() {
        let m = manifest();
        let ids: Vec<_> = elements(&m, "EDD", "elements")
            .iter()
            .map(|(_, e)| e.id.as_str())
            .collect();
        assert_eq!(ids, ["gear", "cube"]);
        assert_eq!(elements_page_name("EDD"), "edd-elements.html");
    }

    #[test]
    fn test_pages_render() {
        let m = manifest();
        let config = SiteConfig::default();
        let listings = Listings::new(&config, Ok(&m));

        let home = listings.home();
        assert!(home.contains(r#"href="/DE/a""#));
        assert!(home.contains(r#"id="class-edd""#));

        let certs = listings.certifications();
        assert!(certs.contains("OSHA 10"));
        assert!(!certs.contains("chip-type"));

        assert!(listings.elements().contains("Gear"));
    }

    #[test]
    fn test_empty_and_failed_manifest() {
        let config = SiteConfig::default();
        let empty = Manifest::new();
        let listings = Listings::new(&config, Ok(&empty));
        assert!(listings.home().contains("No recent items"));
        assert!(listings.certifications().contains("No certifications yet"));
        assert!(listings.elements().contains("No EDD elements yet"));

        let err = SourceError::ManifestUnavailable {
            reason: "gone".into(),
        };
        let listings = Listings::new(&config, Err(&err));
        assert!(listings.home().contains("Failed to load recent items"));
        assert!(listings.certifications().contains("Failed to load certifications"));
        assert!(listings.elements().contains("Failed to load EDD elements"));
    }
}
