//! API error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is missing or empty. 400.
    #[error("{0}")]
    Validation(String),

    /// The verification token is unknown or already consumed. 400 with a
    /// distinct message; not an internal error.
    #[error("invalid or expired token")]
    InvalidToken,

    /// The underlying store failed. 500, not retried.
    #[error("store error: {0}")]
    Store(#[from] reclaim_store::StoreError),

    /// Token generation failed (OS entropy source). 500.
    #[error("registry error: {0}")]
    Registry(#[from] reclaim_registry::RegistryError),

    /// Server startup/bind failure.
    #[error("server error: {0}")]
    Server(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::InvalidToken => (
                StatusCode::BAD_REQUEST,
                "Invalid or expired token".to_string(),
            ),
            ApiError::Store(e) => {
                tracing::error!(error = %e, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "DB error".to_string())
            }
            ApiError::Registry(e) => {
                tracing::error!(error = %e, "token issue failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
            ApiError::Server(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message.clone())
            }
        };
        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let response = ApiError::Validation("Missing required fields".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_errors_map_to_500() {
        let response =
            ApiError::Store(reclaim_store::StoreError::Backend("txn failed".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_token_maps_to_400() {
        let response = ApiError::InvalidToken.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
