use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::grocery::{ErrorKind, GroceryError};
use crate::server::structured_error::to_error_json;

/// Trait for mapping domain errors to structured error codes and optional tips.
pub trait ToStructuredError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>);

    /// Message safe to show to API clients.
    fn public_message(&self) -> String;
}

impl ToStructuredError for GroceryError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        match self {
            GroceryError::InvalidArgument(_) => ("INVALID_ARGUMENT", None),
            GroceryError::ListNotFound(_) => (
                "LIST_NOT_FOUND",
                Some("GET /api/lists shows the available list ids"),
            ),
            GroceryError::ItemNotFound { .. } => ("ITEM_NOT_FOUND", None),
            GroceryError::Store(_) => ("STORE_ERROR", Some("Check the daemon logs for details")),
        }
    }

    fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::StoreFailure => "Internal server error".to_string(),
            ErrorKind::InvalidArgument | ErrorKind::NotFound => self.to_string(),
        }
    }
}

#[must_use]
pub fn status_for(err: &GroceryError) -> StatusCode {
    match err.kind() {
        ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::StoreFailure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for GroceryError {
    fn into_response(self) -> Response {
        if self.kind() == ErrorKind::StoreFailure {
            error!("Store failure: {}", self);
        }
        (
            status_for(&self),
            [(header::CONTENT_TYPE, "application/json")],
            to_error_json(&self),
        )
            .into_response()
    }
}
