//! Responder for requests no route accepts.

use axum::http::Uri;

use crate::error::ApiError;

/// Answers unmatched paths, and known paths with the wrong method, with 404.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        path: uri.path().to_string(),
    }
}
