//! Error type for grocery list operations.
use crate::store::StoreError;
use thiserror::Error;

/// Unified error type for list and item operations.
#[derive(Error, Debug)]
pub enum GroceryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("List not found: {0}")]
    ListNotFound(u64),
    #[error("Item {item_id} not found in list {list_id}")]
    ItemNotFound { list_id: u64, item_id: u64 },
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Coarse classification callers use to decide how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed caller input.
    InvalidArgument,
    /// Referenced list or item does not exist.
    NotFound,
    /// The backing medium failed or holds malformed content.
    StoreFailure,
}

impl GroceryError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        GroceryError::InvalidArgument(msg.into())
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GroceryError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            GroceryError::ListNotFound(_) | GroceryError::ItemNotFound { .. } => {
                ErrorKind::NotFound
            }
            GroceryError::Store(_) => ErrorKind::StoreFailure,
        }
    }
}

/// Reject names that are empty or only whitespace. Valid names are returned as given.
pub fn validate_name<'a>(name: &'a str, what: &str) -> Result<&'a str, GroceryError> {
    if name.trim().is_empty() {
        return Err(GroceryError::invalid_argument(format!(
            "{what} name must not be empty"
        )));
    }
    Ok(name)
}
