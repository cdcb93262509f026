//! HTTP error mapping for the chat endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use techbot_core::TechbotError;
use tracing::error;

/// Error returned by chat handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed input; nothing was changed.
    BadRequest(String),
    /// Upstream or internal failure.
    Internal(TechbotError),
}

impl From<TechbotError> for ApiError {
    fn from(e: TechbotError) -> Self {
        if e.is_client_error() {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::Internal(e)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Internal(e) => {
                error!(error = %e, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Server error" })),
                )
                    .into_response()
            }
        }
    }
}
