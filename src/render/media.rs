//! `pdf`, `video` and `image` sections.

use super::section::{Heading, muted, section};
use super::{ElementRenderer, Scope, pdf, video};
use crate::core::asset_url;
use crate::element::{Media, MediaItem, MediaKind};
use crate::page::RenderContext;
use crate::utils::html::{escape, escape_attr};

impl ElementRenderer<'_> {
    pub(super) fn media(
        &mut self,
        position: usize,
        media: &Media,
        ctx: &RenderContext,
        scope: Scope,
    ) -> String {
        let name = media.kind.name();
        let heading = media_heading(media);
        let id = self.claim_section(&heading, position);

        let inner = match media.items.as_slice() {
            [] => {
                self.record(scope, &id, heading.text());
                muted(&format!("No {name} provided."))
            }
            [item] => {
                self.record(scope, &id, heading.text());
                self.figure(media.kind, item, 1, None, ctx)
            }
            items => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let fallback = format!("{name} {}", i + 1);
                    let label = item.label.as_deref().unwrap_or(&fallback);
                    let item_id = self.anchors.claim_id(label, &fallback);
                    self.record(scope, &item_id, label);
                    self.figure(media.kind, item, i + 1, Some(&item_id), ctx)
                })
                .collect(),
        };

        section(&id, &heading, scope.level, &inner)
    }

    fn figure(
        &self,
        kind: MediaKind,
        item: &MediaItem,
        number: usize,
        id: Option<&str>,
        ctx: &RenderContext,
    ) -> String {
        let raw_path = ctx.expand_path(&item.src);
        let url = asset_url(self.options.base, &raw_path);
        let caption = item
            .label
            .clone()
            .or_else(|| item.title.clone())
            .unwrap_or_else(|| match number {
                1 => kind.name().to_string(),
                n => format!("{} {n}", kind.name()),
            });

        let (embed, actions) = match kind {
            MediaKind::Pdf => {
                let info = self
                    .options
                    .probe
                    .filter(|_| self.options.pdf.autosize)
                    .and_then(|probe| probe.probe(&raw_path));
                let pdf = pdf::embed(&url, &caption, self.options.pdf, info);
                let actions = format!(
                    r#"<div class="media-actions"><a class="btn" href="{}" target="_blank" rel="noopener">Open in new tab</a><a class="btn" href="{}" download>Download</a></div>"#,
                    escape_attr(&pdf::zoomed(&url, &pdf.zoom)),
                    escape_attr(&url)
                );
                (pdf.html, actions)
            }
            MediaKind::Video => (video::embed(&url, &caption), String::new()),
            MediaKind::Image => (image(&url, item, ctx), String::new()),
        };

        let id_attr = id
            .map(|id| format!(r#" id="{}""#, escape_attr(id)))
            .unwrap_or_default();
        format!(
            r#"<figure class="media"{id_attr}><div class="media-center">{embed}</div><figcaption class="media-caption">{}</figcaption>{actions}</figure>"#,
            escape(&caption)
        )
    }
}

/// Section heading for a media element.
///
/// A label that is missing or only repeats the type name gives way to the
/// single item's own label, with the type name demoted to a subtitle.
fn media_heading(media: &Media) -> Heading {
    let name = media.kind.name();
    let label = media.label.as_deref();
    let generic = label.is_none_or(|l| l.eq_ignore_ascii_case(name));

    if generic
        && let [item] = media.items.as_slice()
        && let Some(item_label) = item.label.as_deref()
        && !item_label.eq_ignore_ascii_case(name)
    {
        return Heading::Split {
            heading: item_label.to_string(),
            subtitle: name.to_string(),
        };
    }
    Heading::plain(label.unwrap_or(name))
}

fn image(url: &str, item: &MediaItem, ctx: &RenderContext) -> String {
    let alt = item
        .alt
        .as_deref()
        .or(item.label.as_deref())
        .unwrap_or(&ctx.title);
    let title = item
        .title
        .as_deref()
        .map(|t| format!(r#" title="{}""#, escape_attr(t)))
        .unwrap_or_default();
    format!(
        r#"<img class="image-frame" src="{}" alt="{}"{title} loading="lazy">"#,
        escape_attr(url),
        escape_attr(alt)
    )
}
