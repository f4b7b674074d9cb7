//! Filesystem path helpers.

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to the path itself when absolute, or cwd-joined when relative.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Page id for a document path relative to its class directory.
///
/// `labs/1.1.9 Soldering.json` -> `labs/1.1.9 Soldering`. Returns `None` for
/// anything that is not a plain relative `.json` path.
pub fn page_id_from_relative(rel: &Path) -> Option<String> {
    let is_json = rel
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return None;
    }

    let mut segments = Vec::new();
    for component in rel.with_extension("").components() {
        match component {
            Component::Normal(part) => segments.push(part.to_str()?.to_string()),
            _ => return None,
        }
    }
    (!segments.is_empty()).then(|| segments.join("/"))
}
