//! Anchor ids and table of contents for one page render.
//!
//! Every id handed out by one [`AnchorRegistry`] is distinct. The first
//! claim of a slug returns it unchanged; later claims return `slug-2`,
//! `slug-3`, ..., skipping any candidate already issued (a heading that
//! literally reads "Notes 2" must not collide with the second "Notes").

use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::SlugMode;

const MAX_SLUG_LEN: usize = 80;

/// Fallback when neither the text nor its fallback yields a slug.
const DEFAULT_SLUG: &str = "section";

/// TOC is shown only above this many entries.
pub const TOC_THRESHOLD: usize = 2;

/// Lowercase, collapse runs outside `[a-z0-9]` to `-`, trim `-`, cap at 80.
pub fn slugify(text: &str, mode: SlugMode) -> String {
    let source = match mode {
        SlugMode::Full => text.to_lowercase(),
        SlugMode::Ascii => deunicode::deunicode(text).to_lowercase(),
    };

    let mut slug = String::with_capacity(source.len());
    let mut pending_dash = false;
    for c in source.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    // All chars are ASCII here, so byte truncation is safe.
    slug.truncate(MAX_SLUG_LEN);
    slug.trim_end_matches('-').to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Default)]
pub struct AnchorRegistry {
    mode: SlugMode,
    counters: FxHashMap<String, usize>,
    issued: FxHashSet<String>,
    toc: Vec<TocEntry>,
}

impl AnchorRegistry {
    pub fn new(mode: SlugMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Claim a unique id for `primary`, falling back to `fallback`, then
    /// to `"section"`.
    pub fn claim_id(&mut self, primary: &str, fallback: &str) -> String {
        let root = [primary, fallback]
            .into_iter()
            .map(|text| slugify(text, self.mode))
            .find(|slug| !slug.is_empty())
            .unwrap_or_else(|| DEFAULT_SLUG.to_string());

        let count = self.counters.entry(root.clone()).or_insert(0);
        let id = loop {
            *count += 1;
            let candidate = if *count == 1 {
                root.clone()
            } else {
                format!("{root}-{count}")
            };
            if !self.issued.contains(&candidate) {
                break candidate;
            }
        };
        self.issued.insert(id.clone());
        id
    }

    /// Append a TOC row; rows keep claim order.
    pub fn record(&mut self, id: impl Into<String>, title: impl Into<String>) {
        self.toc.push(TocEntry {
            id: id.into(),
            title: title.into(),
        });
    }

    pub fn toc(&self) -> &[TocEntry] {
        &self.toc
    }

    pub fn into_toc(self) -> Vec<TocEntry> {
        self.toc
    }
}

/// Whether a TOC with `entries` rows is worth showing.
#[inline]
pub const fn shows_toc(entries: usize) -> bool {
    entries > TOC_THRESHOLD
}
