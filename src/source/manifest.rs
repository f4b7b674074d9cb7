//! Memoized manifest lookup.

use std::sync::Arc;

use super::{PageSource, SourceError};
use crate::cache::MemoCache;
use crate::debug;
use crate::page::Manifest;

type ManifestResult = Result<Arc<Manifest>, SourceError>;

/// Loads the manifest once and hands every caller the same result.
///
/// Failures are memoized too: a build with a broken manifest reports it
/// once per provider instead of once per page.
pub struct ManifestProvider {
    source: Arc<dyn PageSource>,
    cache: MemoCache<(), ManifestResult>,
}

impl ManifestProvider {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            source,
            cache: MemoCache::new(),
        }
    }

    pub fn get(&self) -> ManifestResult {
        self.cache.get_or_insert_with((), || self.load())
    }

    pub fn invalidate(&self) {
        self.cache.invalidate(&());
    }

    fn load(&self) -> ManifestResult {
        debug!("source"; "loading manifest");
        let bytes = self
            .source
            .manifest()
            .map_err(|reason| SourceError::ManifestUnavailable { reason })?;
        let manifest = Manifest::from_slice(&bytes)
            .map_err(|reason| SourceError::ManifestUnavailable { reason })?;
        Ok(Arc::new(manifest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::MemorySource;

    #[test]
    fn test_loads_once() {
        let source = Arc::new(MemorySource::new().with_manifest(r#"{"DE": [{"id": "a"}]}"#));
        let provider = ManifestProvider::new(source.clone());

        let first = provider.get().unwrap();
        let second = provider.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.manifest_reads(), 1);
        assert_eq!(first.class("DE").len(), 1);
    }

    #[test]
    fn test_failure_memoized_until_invalidated() {
        let source = Arc::new(MemorySource::new());
        let provider = ManifestProvider::new(source.clone());

        assert!(matches!(
            provider.get(),
            Err(SourceError::ManifestUnavailable { .. })
        ));
        assert!(provider.get().is_err());
        assert_eq!(source.manifest_reads(), 1);

        provider.invalidate();
        assert!(provider.get().is_err());
        assert_eq!(source.manifest_reads(), 2);
    }

    #[test]
    fn test_invalid_json_is_unavailable() {
        let source = Arc::new(MemorySource::new().with_manifest("[1, 2]"));
        let err = ManifestProvider::new(source).get().unwrap_err();
        assert!(err.to_string().contains("not a JSON object"));
    }
}
