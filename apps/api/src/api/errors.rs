use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::{DataError, ErrorKind};

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

/// The single translation from data-access outcomes to HTTP statuses
///
/// Store details stay in the logs; 500 bodies carry a generic message.
impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        match err.kind() {
            ErrorKind::Validation => {
                tracing::debug!(error = %err, "Rejected item");
                Self::bad_request(err.to_string())
            }
            ErrorKind::NotFound => {
                tracing::debug!(error = %err, "Item lookup missed");
                Self::not_found(err.to_string())
            }
            ErrorKind::Serialization | ErrorKind::TransientStore => {
                tracing::error!(error = %err, "Item store request failed");
                Self::internal_server_error("Internal server error")
            }
        }
    }
}

/// Body decode failures are reported as 500
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::error!(error = %rejection.body_text(), "Failed to decode item body");
        Self::internal_server_error("Failed to decode request body")
    }
}
