use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::AppState;
use crate::ApiError;

/// Liveness plus a cheap database round-trip.
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let books = state.books.count().await?;
    Ok(Json(json!({ "status": "ok", "books": books })))
}
