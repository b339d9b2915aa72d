//! Whole-document persistence.
//!
//! The store hands out the entire [`Document`] on `load` and replaces it
//! entirely on `save`. There is no caching: every `load` goes back to the
//! medium, and every mutation is expected to end with a `save` of the whole
//! document.

mod error;
mod file;
mod memory;
mod types;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use types::{Document, GroceryList, Item, ListSummary, DEFAULT_LIST_NAME};

use async_trait::async_trait;

/// Backing medium for the grocery document.
#[async_trait]
pub trait Store: Send + Sync {
    /// Read the whole document, creating and persisting the default one if
    /// the medium is empty.
    async fn load(&self) -> Result<Document, StoreError>;

    /// Replace the whole persisted document.
    async fn save(&self, doc: &Document) -> Result<(), StoreError>;
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
