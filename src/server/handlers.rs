use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;

use crate::grocery::{GroceryError, GroceryService};
use crate::server::requests::{
    json_body, path_params, AddItemRequest, CreateListRequest, HealthResponse,
    ReorderItemsRequest, SuccessResponse,
};
use crate::store::{GroceryList, Item, ListSummary};

type ApiResult<T> = Result<T, GroceryError>;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn list_summaries(
    State(service): State<GroceryService>,
) -> ApiResult<Json<Vec<ListSummary>>> {
    Ok(Json(service.list_summaries().await?))
}

pub async fn create_list(
    State(service): State<GroceryService>,
    payload: Result<Json<CreateListRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<GroceryList>)> {
    let req = json_body(payload)?;
    let list = service.create_list(&req.name).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

pub async fn get_list(
    State(service): State<GroceryService>,
    list_id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<GroceryList>> {
    let list_id = path_params(list_id)?;
    Ok(Json(service.get_list(list_id).await?))
}

pub async fn get_items(
    State(service): State<GroceryService>,
    list_id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Vec<Item>>> {
    let list_id = path_params(list_id)?;
    Ok(Json(service.get_items(list_id).await?))
}

pub async fn add_item(
    State(service): State<GroceryService>,
    list_id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<AddItemRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    let list_id = path_params(list_id)?;
    let req = json_body(payload)?;
    let item = service.add_item(list_id, &req.name).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn reorder_items(
    State(service): State<GroceryService>,
    list_id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ReorderItemsRequest>, JsonRejection>,
) -> ApiResult<Json<SuccessResponse>> {
    let list_id = path_params(list_id)?;
    let req = json_body(payload)?;
    service.reorder_items(list_id, &req.ordered_ids).await?;
    Ok(Json(SuccessResponse { success: true }))
}

pub async fn toggle_item(
    State(service): State<GroceryService>,
    ids: Result<Path<(u64, u64)>, PathRejection>,
) -> ApiResult<Json<Item>> {
    let (list_id, item_id) = path_params(ids)?;
    Ok(Json(service.toggle_item(list_id, item_id).await?))
}

pub async fn delete_item(
    State(service): State<GroceryService>,
    ids: Result<Path<(u64, u64)>, PathRejection>,
) -> ApiResult<StatusCode> {
    let (list_id, item_id) = path_params(ids)?;
    service.delete_item(list_id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
