//! HTTP request layer: routes, payload validation and error responses.

pub mod error_mapping;
mod handlers;
pub mod requests;
pub mod structured_error;

use axum::routing::{delete, get, patch, put};
use axum::Router;

use crate::cors::build_cors_layer;
use crate::grocery::GroceryService;
use crate::http_logging::HttpLoggingLayer;

/// Build the full application router with CORS and request logging applied.
pub fn build_router(service: GroceryService, cors_origins: Vec<String>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route(
            "/api/lists",
            get(handlers::list_summaries).post(handlers::create_list),
        )
        .route("/api/lists/:list_id", get(handlers::get_list))
        .route(
            "/api/lists/:list_id/items",
            get(handlers::get_items).post(handlers::add_item),
        )
        .route(
            "/api/lists/:list_id/items/reorder",
            put(handlers::reorder_items),
        )
        .route(
            "/api/lists/:list_id/items/:item_id",
            delete(handlers::delete_item),
        )
        .route(
            "/api/lists/:list_id/items/:item_id/toggle",
            patch(handlers::toggle_item),
        )
        .with_state(service)
        .layer(HttpLoggingLayer)
        .layer(build_cors_layer(cors_origins))
}
