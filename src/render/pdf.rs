//! PDF embeds and best-effort page sniffing.
//!
//! Sizing is an enrichment only: when the probe returns nothing the embed
//! keeps the configured zoom and height.

use regex::bytes::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use crate::config::PdfConfig;
use crate::core::{encode_component, is_http};
use crate::debug;
use crate::utils::html::escape_attr;

static PAGE_BOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"/(?:MediaBox|CropBox|TrimBox)\s*\[\s*(-?[\d.]+)\s+(-?[\d.]+)\s+(-?[\d.]+)\s+(-?[\d.]+)\s*\]",
    )
    .unwrap()
});
static ROTATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/Rotate\s+(-?\d+)").unwrap());
static COUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/Count\s+(\d+)").unwrap());

/// What a probe learned about a PDF.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PdfInfo {
    /// Displayed `(width, height)`, rotation applied.
    pub size: Option<(f64, f64)>,
    pub pages: Option<u32>,
}

/// Source of PDF page geometry.
pub trait PdfProbe: Send + Sync {
    /// `path` is the expanded, undecoded content path of the PDF.
    fn probe(&self, path: &str) -> Option<PdfInfo>;
}

/// Reads local PDFs under the site root and scans their raw bytes.
#[derive(Debug, Clone)]
pub struct SniffProbe {
    root: PathBuf,
}

impl SniffProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn local_path(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        if relative.as_os_str().is_empty()
            || !relative.components().all(|c| matches!(c, Component::Normal(_)))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl PdfProbe for SniffProbe {
    fn probe(&self, path: &str) -> Option<PdfInfo> {
        if is_http(path) {
            return None;
        }
        let file = self.local_path(path)?;
        match std::fs::read(&file) {
            Ok(bytes) => sniff(&bytes),
            Err(e) => {
                debug!("pdf"; "cannot read {}: {}", file.display(), e);
                None
            }
        }
    }
}

/// Scan raw PDF bytes for the first page box, its rotation and the largest
/// `/Count` (the page tree root).
pub fn sniff(bytes: &[u8]) -> Option<PdfInfo> {
    let number = |m: Option<regex::bytes::Match<'_>>| -> Option<f64> {
        std::str::from_utf8(m?.as_bytes()).ok()?.parse().ok()
    };

    let size = PAGE_BOX.captures(bytes).and_then(|caps| {
        let [x1, y1, x2, y2] = [1, 2, 3, 4].map(|i| number(caps.get(i)));
        let width = (x2? - x1?).abs();
        let height = (y2? - y1?).abs();
        (width > 0.0 && height > 0.0).then_some((width, height))
    });

    let rotate = ROTATE
        .captures(bytes)
        .and_then(|caps| number(caps.get(1)))
        .map(|deg| (deg as i64).rem_euclid(360))
        .unwrap_or(0);
    let size = match (size, rotate) {
        (Some((w, h)), 90 | 270) => Some((h, w)),
        (size, _) => size,
    };

    let pages = COUNT
        .captures_iter(bytes)
        .filter_map(|caps| number(caps.get(1)))
        .map(|n| n as u32)
        .max();

    (size.is_some() || pages.is_some()).then_some(PdfInfo { size, pages })
}

/// The `<iframe>` for one PDF plus the zoom its links should use.
pub struct PdfEmbed {
    pub html: String,
    pub zoom: String,
}

/// Build the embed for `url`, sizing it from `info` when known.
pub fn embed(url: &str, title: &str, config: &PdfConfig, info: Option<PdfInfo>) -> PdfEmbed {
    let info = info.unwrap_or_default();
    let zoom = match info.pages {
        Some(1) => config.single_page_zoom.clone(),
        _ => config.zoom.clone(),
    };
    let style = match info.size {
        Some((w, h)) => format!("aspect-ratio: {w} / {h}; width: 100%"),
        None => format!("height: {}; width: 100%", config.height),
    };

    let html = format!(
        r#"<iframe class="pdf-frame" src="{}" title="{}" style="{}"></iframe>"#,
        escape_attr(&zoomed(url, &zoom)),
        escape_attr(title),
        escape_attr(&style)
    );
    PdfEmbed { html, zoom }
}

/// `{url}#zoom={zoom}` with the zoom component-encoded.
pub fn zoomed(url: &str, zoom: &str) -> String {
    format!("{url}#zoom={}", encode_component(zoom))
}
