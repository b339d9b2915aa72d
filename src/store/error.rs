use std::path::PathBuf;
use thiserror::Error;

/// Failures of the backing medium.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Corrupt store at {}: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize document: {0}")]
    SerializeError(#[source] serde_json::Error),
}
