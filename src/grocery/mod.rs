//! Grocery list domain: list and item repositories, the reorder engine and
//! the read-modify-write service that ties them to a store.

pub mod error;
pub mod items;
pub mod lists;
pub mod reorder;
mod service;

pub use error::{ErrorKind, GroceryError};
pub use service::GroceryService;
