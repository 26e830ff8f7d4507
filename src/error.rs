//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Input errors
    EmptyInput,
    ValidationError(String),

    // Resource errors
    NotFound(String),

    // Generic errors
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // Blank input is a warning state, not a hard failure: the UI
            // renders it as a yellow banner and no classification runs.
            AppError::EmptyInput => (
                StatusCode::BAD_REQUEST,
                json!({
                    "warning": "Text cannot be empty.",
                    "status": StatusCode::BAD_REQUEST.as_u16()
                }),
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "status": StatusCode::BAD_REQUEST.as_u16() }),
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "error": msg, "status": StatusCode::NOT_FOUND.as_u16() }),
            ),
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Internal server error",
                        "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16()
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
