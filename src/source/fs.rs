//! Filesystem page source rooted at the site directory.

use std::fs;
use std::path::{Path, PathBuf};

use super::PageSource;
use crate::config::{MANIFEST_FILE, PAGES_DIR};
use crate::core::decode;

/// Reads `{root}/pages/...` from disk.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map an encoded target back to a file under the root.
    ///
    /// Each segment is decoded on its own; `.`/`..` and segments that
    /// decode to contain `/` are refused so a target never leaves the root.
    pub fn target_path(&self, target: &str) -> Option<PathBuf> {
        let mut path = self.root.clone();
        for segment in target.split('/') {
            let decoded = decode(segment);
            if decoded.is_empty()
                || decoded == "."
                || decoded == ".."
                || decoded.contains(['/', '\\'])
            {
                return None;
            }
            path.push(decoded.as_ref());
        }
        Some(path)
    }
}

impl PageSource for FsSource {
    fn manifest(&self) -> Result<Vec<u8>, String> {
        let path = self.root.join(PAGES_DIR).join(MANIFEST_FILE);
        fs::read(&path).map_err(|e| format!("{}: {e}", path.display()))
    }

    fn document(&self, target: &str) -> Result<Vec<u8>, String> {
        let path = self
            .target_path(target)
            .ok_or_else(|| "target escapes the site root".to_string())?;
        fs::read(&path).map_err(|e| e.to_string())
    }
}
