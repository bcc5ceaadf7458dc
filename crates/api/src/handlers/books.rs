use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::{Book, BookInput};

use super::AppState;
use crate::ApiError;

/// Literal body returned by a successful delete.
pub const DELETE_OK: &str = "ok";

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<BookInput>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let book = state.books.save(payload).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.books.find_all().await?;
    Ok(Json(books))
}

pub async fn get(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Book>, ApiError> {
    let book = state.books.find_by_id(id).await?;
    Ok(Json(book))
}

pub async fn update(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<BookInput>,
) -> Result<Json<Book>, ApiError> {
    let book = state.books.edit(id, payload).await?;
    Ok(Json(book))
}

pub async fn delete(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<&'static str, ApiError> {
    state.books.delete(id).await?;
    Ok(DELETE_OK)
}
