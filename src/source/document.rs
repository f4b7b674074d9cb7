//! Memoized page document lookup keyed by `(class, id)`.

use std::sync::Arc;

use super::{PageSource, SourceError, document_target};
use crate::cache::MemoCache;
use crate::debug;
use crate::page::PageDocument;

type DocumentResult = Result<Arc<PageDocument>, SourceError>;

pub struct DocumentProvider {
    source: Arc<dyn PageSource>,
    cache: MemoCache<(String, String), DocumentResult>,
}

impl DocumentProvider {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            source,
            cache: MemoCache::new(),
        }
    }

    pub fn get(&self, cls: &str, id: &str) -> DocumentResult {
        self.cache
            .get_or_insert_with((cls.to_string(), id.to_string()), || self.load(cls, id))
    }

    fn load(&self, cls: &str, id: &str) -> DocumentResult {
        let target = document_target(cls, id);
        debug!("source"; "fetching {}", target);

        let not_found = |reason: String| SourceError::DocumentNotFound {
            target: target.clone(),
            reason,
        };
        let bytes = self.source.document(&target).map_err(not_found)?;
        let doc = PageDocument::from_slice(&bytes).map_err(|e| not_found(e.to_string()))?;
        Ok(Arc::new(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::MemorySource;

    #[test]
    fn test_cached_by_class_and_id() {
        let source = Arc::new(
            MemorySource::new()
                .with_page("DE", "a", r#"{"title": "A"}"#)
                .with_page("CIM", "a", r#"{"title": "Other A"}"#),
        );
        let provider = DocumentProvider::new(source.clone());

        assert_eq!(provider.get("DE", "a").unwrap().title.as_deref(), Some("A"));
        assert_eq!(provider.get("DE", "a").unwrap().title.as_deref(), Some("A"));
        assert_eq!(
            provider.get("CIM", "a").unwrap().title.as_deref(),
            Some("Other A")
        );
        assert_eq!(source.document_reads(), 2);
    }

    #[test]
    fn test_missing_and_invalid_json() {
        let source = Arc::new(MemorySource::new().with_page("DE", "broken", "{ not json"));
        let provider = DocumentProvider::new(source);

        let err = provider.get("DE", "missing page").unwrap_err();
        assert_eq!(
            err,
            SourceError::DocumentNotFound {
                target: "pages/DE/missing%20page.json".into(),
                reason: "no such document".into(),
            }
        );
        assert!(matches!(
            provider.get("DE", "broken"),
            Err(SourceError::DocumentNotFound { .. })
        ));
    }
}
