use super::{Document, Store, StoreError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// In-memory store. Behaves like the file store (lazy default document,
/// whole-document replacement) and counts saves so callers can check that a
/// failed operation left the medium untouched.
#[derive(Debug, Default)]
pub struct MemoryStore {
    doc: Mutex<Option<Document>>,
    saves: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document instead of the lazy default.
    #[must_use]
    pub fn with_document(doc: Document) -> Self {
        Self {
            doc: Mutex::new(Some(doc)),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of completed `save` calls, including the lazy initialization.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn load(&self) -> Result<Document, StoreError> {
        let mut guard = self.doc.lock().await;
        if let Some(doc) = guard.as_ref() {
            return Ok(doc.clone());
        }
        let doc = Document::with_default_list();
        *guard = Some(doc.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(doc)
    }

    async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        *self.doc.lock().await = Some(doc.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
