// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod cors;
pub mod grocery;
pub mod http_logging;
pub mod logging;
pub mod server;
pub mod store;
pub mod user_config;
pub mod utils;

// Re-export commonly used types
pub use grocery::{ErrorKind, GroceryError, GroceryService};
pub use server::build_router;
pub use store::{
    Document, GroceryList, Item, JsonFileStore, ListSummary, MemoryStore, Store, StoreError,
    DEFAULT_LIST_NAME,
};
