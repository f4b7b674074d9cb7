//! In-memory page source for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;

use super::{PageSource, document_target};

#[derive(Default)]
pub struct MemorySource {
    manifest: Option<String>,
    documents: DashMap<String, String>,
    manifest_reads: AtomicUsize,
    document_reads: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, json: &str) -> Self {
        self.manifest = Some(json.to_string());
        self
    }

    pub fn with_page(self, cls: &str, id: &str, json: &str) -> Self {
        self.documents
            .insert(document_target(cls, id), json.to_string());
        self
    }

    pub fn manifest_reads(&self) -> usize {
        self.manifest_reads.load(Ordering::SeqCst)
    }

    pub fn document_reads(&self) -> usize {
        self.document_reads.load(Ordering::SeqCst)
    }
}

impl PageSource for MemorySource {
    fn manifest(&self) -> Result<Vec<u8>, String> {
        self.manifest_reads.fetch_add(1, Ordering::SeqCst);
        self.manifest
            .as_ref()
            .map(|m| m.clone().into_bytes())
            .ok_or_else(|| "no manifest".to_string())
    }

    fn document(&self, target: &str) -> Result<Vec<u8>, String> {
        self.document_reads.fetch_add(1, Ordering::SeqCst);
        self.documents
            .get(target)
            .map(|doc| doc.value().clone().into_bytes())
            .ok_or_else(|| "no such document".to_string())
    }
}
