//! Static files copied next to the rendered pages.
//!
//! Everything under the site root is mirrored into the output directory,
//! except hidden entries, the output directory itself and the config file.
//! A default stylesheet is written when the site brings none.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::embed::css::{STYLE_CSS, STYLE_PATH};

/// Copy static files; returns the number of files written.
pub fn copy_static(config: &SiteConfig, clean: bool) -> Result<usize> {
    let root = &config.build.root;
    let mut count = 0;
    copy_dir_recursive(config, root, &config.build.output, clean, &mut count)?;

    let style = config.build.output.join(STYLE_PATH);
    if !style.exists() {
        if let Some(parent) = style.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&style, STYLE_CSS)
            .with_context(|| format!("Failed to write {}", style.display()))?;
        count += 1;
    }
    Ok(count)
}

fn skipped(config: &SiteConfig, path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'));
    hidden || path == config.build.output || path == config.config_path
}

fn copy_dir_recursive(
    config: &SiteConfig,
    src_dir: &Path,
    dest_dir: &Path,
    clean: bool,
    count: &mut usize,
) -> Result<()> {
    for entry in fs::read_dir(src_dir)
        .with_context(|| format!("Failed to read {}", src_dir.display()))?
    {
        let src_path = entry?.path();
        if skipped(config, &src_path) {
            continue;
        }
        let Some(file_name) = src_path.file_name() else {
            continue;
        };
        let dest_path = dest_dir.join(file_name);

        if src_path.is_dir() {
            copy_dir_recursive(config, &src_path, &dest_path, clean, count)?;
            continue;
        }
        if !clean && dest_path.exists() && !is_newer_than(&src_path, &dest_path) {
            continue;
        }
        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&src_path, &dest_path)
            .with_context(|| format!("Failed to copy {}", src_path.display()))?;
        *count += 1;
    }
    Ok(())
}

/// `true` when `src` was modified after `dest`, or either time is unknown.
fn is_newer_than(src: &Path, dest: &Path) -> bool {
    let modified = |p: &Path| fs::metadata(p).and_then(|m| m.modified()).ok();
    match (modified(src), modified(dest)) {
        (Some(src), Some(dest)) => src > dest,
        _ => true,
    }
}
