use super::common::success_response;
use crate::{errors::ServiceError, handlers::AppState};
use axum::{extract::State, response::IntoResponse, routing::get, Router};
use std::sync::Arc;

/// List all categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServiceError> {
    let categories = state.services.categories.list_categories().await?;
    Ok(success_response(categories))
}

/// Creates the router for category endpoints
pub fn category_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_categories))
}
