//! Mapping of service errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use service::BookError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Book(#[from] BookError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Book(BookError::NotFound(id)) => {
                json_error(StatusCode::NOT_FOUND, "not_found", format!("book {id} not found"))
            }
            ApiError::Book(err) => {
                error!(error = %err, "request failed");
                json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal server error",
                )
            }
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
