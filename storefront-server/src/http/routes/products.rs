//! Product endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::value::RawValue;

use crate::db::repos::ProductRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /products - every row of the products table
async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Box<RawValue>>>, ApiError> {
    let products = ProductRepo::new(&state.pool).list_all().await?;
    Ok(Json(products))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/products", get(list_products))
}
