//! `pages/manifest.json` generation.
//!
//! Every `pages/{class}/**/*.json` becomes one row. The id is the path
//! under the class directory without `.json`; the title is the document's
//! `title` (default `"{file}"`) with placeholders expanded. Rows are sorted
//! newest first, then by title, and titles repeated within a class get a
//! `" ({id})"` suffix.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::config::MANIFEST_FILE;
use crate::page::{Manifest, PageDocument, PageSummary, RenderContext};
use crate::utils::path::page_id_from_relative;
use crate::{debug, log};

/// Scan `pages_dir` into a manifest. A missing directory yields an empty one.
pub fn scan(pages_dir: &Path) -> Result<Manifest> {
    let mut manifest = Manifest::new();
    if !pages_dir.is_dir() {
        return Ok(manifest);
    }

    let mut classes: Vec<String> = fs::read_dir(pages_dir)
        .with_context(|| format!("Failed to read {}", pages_dir.display()))?
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
        .filter_map(|entry| entry.file_name().to_str().map(String::from))
        .filter(|name| !name.starts_with('.'))
        .collect();
    classes.sort();

    for cls in classes {
        let entries = scan_class(&pages_dir.join(&cls), &cls);
        manifest.insert(cls, entries);
    }
    Ok(manifest)
}

/// Rows of one class directory, sorted and de-duplicated.
pub fn scan_class(dir: &Path, cls: &str) -> Vec<PageSummary> {
    let files: Vec<(PathBuf, String)> = WalkDir::new(dir)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let path = e.path();
            let id = page_id_from_relative(path.strip_prefix(dir).ok()?)?;
            Some((path, id))
        })
        .collect();

    let mut entries: Vec<(i64, PageSummary)> = files
        .par_iter()
        .map(|(path, id)| {
            let entry = summarize(cls, id, &read_lenient(path));
            (entry.timestamp(), entry)
        })
        .collect();

    entries.sort_by(|(ta, a), (tb, b)| {
        tb.cmp(ta)
            .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
            .then_with(|| a.title.cmp(&b.title))
    });

    let mut entries: Vec<PageSummary> = entries.into_iter().map(|(_, entry)| entry).collect();
    disambiguate_titles(&mut entries);
    entries
}

/// Document JSON, or `{}` when unreadable or invalid.
fn read_lenient(path: &Path) -> PageDocument {
    let value = fs::read(path)
        .map_err(|e| e.to_string())
        .and_then(|bytes| serde_json::from_slice::<Value>(&bytes).map_err(|e| e.to_string()));
    match value {
        Ok(value) => PageDocument::from_value(value),
        Err(e) => {
            log!("manifest"; "treating {} as empty: {}", path.display(), e);
            PageDocument::default()
        }
    }
}

fn summarize(cls: &str, id: &str, doc: &PageDocument) -> PageSummary {
    let ctx = RenderContext::new(cls, id).with_document(doc);
    PageSummary {
        id: id.to_string(),
        title: ctx.expand_title(doc.title.as_deref().unwrap_or("{file}")),
        kind: doc.kind_str().to_string(),
        date: doc.date_str().to_string(),
    }
}

/// Append `" ({id})"` to every title that appears more than once.
pub fn disambiguate_titles(entries: &mut [PageSummary]) {
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    for entry in entries.iter() {
        *counts.entry(entry.title.clone()).or_default() += 1;
    }
    for entry in entries.iter_mut() {
        if counts.get(&entry.title).is_some_and(|&n| n > 1) {
            entry.title = format!("{} ({})", entry.title, entry.id);
        }
    }
}

/// Pretty JSON as written to disk.
pub fn to_json(manifest: &Manifest) -> Result<String> {
    serde_json::to_string_pretty(manifest).context("Failed to serialize manifest")
}

/// Regenerate and write `{pages_dir}/manifest.json`.
///
/// A missing `pages_dir` is created and gets an empty manifest.
pub fn refresh(pages_dir: &Path) -> Result<Manifest> {
    if !pages_dir.is_dir() {
        fs::create_dir_all(pages_dir)
            .with_context(|| format!("Failed to create {}", pages_dir.display()))?;
        log!("manifest"; "no pages directory, writing empty manifest");
    }

    let manifest = scan(pages_dir)?;
    let dest = pages_dir.join(MANIFEST_FILE);
    fs::write(&dest, to_json(&manifest)?)
        .with_context(|| format!("Failed to write {}", dest.display()))?;
    debug!("manifest"; "wrote {} ({} pages)", dest.display(), manifest.len());
    Ok(manifest)
}
