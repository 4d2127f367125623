//! Error bodies and status mapping shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::registry::RegistryError;

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

/// Responds 400 with the given message.
pub fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}

/// Maps a registry failure to its HTTP response.
pub fn handle_registry_error(error: RegistryError) -> Response {
    match &error {
        RegistryError::DisplayNotFound(_) | RegistryError::GroupNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(error.code().to_string(), error.to_string())),
        )
            .into_response(),
        RegistryError::Store(inner) => {
            tracing::error!(error = %inner, "Registry store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Storage failure")),
            )
                .into_response()
        }
    }
}
