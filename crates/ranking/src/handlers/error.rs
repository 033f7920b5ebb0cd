use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use ranking_core::usecase::{usecase_error_to_status_code, UsecaseError};

/// Body sent for every 5xx, so backend details never leak to clients.
pub const SERVER_ERROR_MESSAGE: &str =
    "the server has encountered a problem and could not process your request";

/// Errors a handler can return. Rendered as `{"error": ...}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Usecase(#[from] UsecaseError),
    #[error("{0}")]
    BadRequest(String),
    #[error("invalid file type")]
    UnsupportedMediaType,
    #[error("the requested resource could not be found")]
    NotFound,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Usecase(e) => StatusCode::from_u16(usecase_error_to_status_code(e))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
            json!({ "error": SERVER_ERROR_MESSAGE })
        } else {
            match &self {
                AppError::Usecase(UsecaseError::Validation(errors)) => json!({ "error": errors }),
                other => json!({ "error": other.to_string() }),
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
