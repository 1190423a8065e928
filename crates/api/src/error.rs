//! API error types with HTTP response mapping.

use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use integrations::IntegrationError;
use serde_json::json;
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
///
/// The `Display` text is the `error` field of the response body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invocation request without a usable `prompt`.
    #[error("Missing prompt field in request body")]
    MissingPrompt,

    /// The inference backend has no model configured.
    #[error("Bedrock model not configured")]
    ModelNotConfigured,

    /// No route matched the request.
    #[error("Not Found")]
    NotFound { path: String },

    /// Unexpected handler failure; the detail is returned to the caller as-is.
    #[error("Internal Server Error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingPrompt => StatusCode::BAD_REQUEST,
            ApiError::ModelNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();

        let body = match self {
            ApiError::MissingPrompt => json!({ "error": error }),
            ApiError::ModelNotConfigured => json!({
                "error": error,
                "message": "Set BEDROCK_MODEL_ARN environment variable",
            }),
            ApiError::NotFound { path } => json!({
                "error": error,
                "path": path,
                "timestamp": common::timestamp(),
            }),
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "internal server error");
                json!({
                    "error": error,
                    "message": message,
                    "timestamp": common::timestamp(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<IntegrationError> for ApiError {
    fn from(err: IntegrationError) -> Self {
        match err {
            IntegrationError::NotConfigured(_) => ApiError::ModelNotConfigured,
            IntegrationError::Backend(msg) => ApiError::Internal(msg),
        }
    }
}

/// Converts a caught handler panic into a 500 response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::Internal(message).into_response()
}
