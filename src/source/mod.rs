//! Where manifest and page documents come from.
//!
//! [`PageSource`] is the raw capability (bytes for the manifest, bytes for
//! an encoded document target). The providers wrap one source with memo
//! caches so every page of a build shares a single manifest parse and a
//! single parse per document.
//!
//! ```text
//! ManifestProvider ─┐
//!                   ├─> Arc<dyn PageSource> ─> FsSource (pages/ on disk)
//! DocumentProvider ─┘
//! ```

mod document;
mod fs;
mod manifest;
#[cfg(test)]
pub mod memory;

pub use document::DocumentProvider;
pub use fs::FsSource;
pub use manifest::ManifestProvider;

use std::sync::Arc;
use thiserror::Error;

use crate::config::PAGES_DIR;
use crate::core::encode_path;

/// Provider failures. Cloned out of the caches, so reasons are strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("manifest unavailable: {reason}")]
    ManifestUnavailable { reason: String },

    #[error("page JSON not found at {target}: {reason}")]
    DocumentNotFound { target: String, reason: String },
}

/// Raw access to the manifest and page documents.
pub trait PageSource: Send + Sync {
    /// Bytes of `pages/manifest.json`, read fresh on every call.
    fn manifest(&self) -> Result<Vec<u8>, String>;

    /// Bytes of a document target such as `pages/DE/Unit%201/foo.json`.
    fn document(&self, target: &str) -> Result<Vec<u8>, String>;
}

/// Fetch target for a page: `pages/{cls}/{id}.json`, each segment encoded.
pub fn document_target(cls: &str, id: &str) -> String {
    format!("{PAGES_DIR}/{}/{}", encode_path(cls), encode_path(&format!("{id}.json")))
}

/// Both providers over one shared source.
pub struct Providers {
    pub manifest: ManifestProvider,
    pub documents: DocumentProvider,
}

impl Providers {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            manifest: ManifestProvider::new(Arc::clone(&source)),
            documents: DocumentProvider::new(source),
        }
    }
}
