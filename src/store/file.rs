use super::{Document, Store, StoreError};
use crate::utils::atomic_write;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Store backed by a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_existing(&self) -> Result<Option<Document>, StoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::CorruptStore {
                path: self.path.clone(),
                source,
            })
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn load(&self) -> Result<Document, StoreError> {
        if let Some(doc) = self.read_existing().await? {
            debug!("Loaded {} list(s) from {}", doc.lists.len(), self.path.display());
            return Ok(doc);
        }

        let doc = Document::with_default_list();
        self.save(&doc).await?;
        info!("Initialized new grocery store at {}", self.path.display());
        Ok(doc)
    }

    async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(doc).map_err(StoreError::SerializeError)?;
        atomic_write(&self.path, content).await?;
        debug!("Saved {} list(s) to {}", doc.lists.len(), self.path.display());
        Ok(())
    }
}
