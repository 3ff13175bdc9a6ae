use super::common::{created_response, success_response};
use crate::{errors::ServiceError, handlers::AppState, models::ItemDraft};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;

/// List all items, including derived submit-by dates
async fn list_items(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ServiceError> {
    let items = state.services.items.list_items().await?;
    Ok(success_response(items))
}

/// Get an item by ID
async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<i64>,
) -> Result<impl IntoResponse, ServiceError> {
    let item = state
        .services
        .items
        .get_item(item_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Item with ID {} not found", item_id)))?;
    Ok(success_response(item))
}

/// Create a new item
async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ItemDraft>,
) -> Result<impl IntoResponse, ServiceError> {
    let item = state.services.items.create_item(payload).await?;
    Ok(created_response(item))
}

/// Update an item (full-row replace)
async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<i64>,
    Json(payload): Json<ItemDraft>,
) -> Result<impl IntoResponse, ServiceError> {
    let item = state.services.items.update_item(item_id, payload).await?;
    Ok(success_response(item))
}

/// Creates the router for item endpoints
pub fn item_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item))
}
