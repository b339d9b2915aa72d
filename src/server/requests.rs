//! Typed request payloads and the mapping of extractor rejections to
//! `InvalidArgument`.
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Json, Path};
use serde::{Deserialize, Serialize};

use crate::grocery::GroceryError;

/// Body of `POST /api/lists`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
    pub name: String,
}

/// Body of `POST /api/lists/{listId}/items`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub name: String,
}

/// Body of `PUT /api/lists/{listId}/items/reorder`.
///
/// Any integer is accepted; ids that match no item are skipped by the engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderItemsRequest {
    pub ordered_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, GroceryError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| GroceryError::invalid_argument(rejection.body_text()))
}

pub fn path_params<T>(params: Result<Path<T>, PathRejection>) -> Result<T, GroceryError> {
    params
        .map(|Path(value)| value)
        .map_err(|rejection| GroceryError::invalid_argument(rejection.body_text()))
}
