//! Request body parsing.
//!
//! - `parse_json_body` — middleware that parses JSON bodies before routing
//! - `JsonObject` — extractor handing the parsed body to a handler

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Largest JSON body accepted, in bytes.
pub const BODY_LIMIT: usize = 100 * 1024;

/// A request body parsed as a JSON object.
///
/// Bodies without a JSON content type, empty JSON bodies and top-level
/// arrays are read as an empty object.
#[derive(Debug, Clone, Default)]
pub struct JsonObject(pub Map<String, Value>);

impl JsonObject {
    /// Returns the non-empty string stored under `key`.
    pub fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

impl<S> FromRequestParts<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.remove::<JsonObject>().unwrap_or_default())
    }
}

/// Parses JSON-typed bodies on every route, before dispatch.
///
/// Malformed, oversized or top-level scalar bodies fail the request with 500.
pub async fn parse_json_body(req: Request, next: Next) -> Result<Response, ApiError> {
    if !is_json(&req) {
        return Ok(next.run(req).await);
    }

    let (mut parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let object = parse_object(&bytes)?;

    parts.extensions.insert(object);
    Ok(next.run(Request::from_parts(parts, bytes.into())).await)
}

fn parse_object(bytes: &[u8]) -> Result<JsonObject, ApiError> {
    if bytes.is_empty() {
        return Ok(JsonObject::default());
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(JsonObject(map)),
        Ok(Value::Array(_)) => Ok(JsonObject::default()),
        Ok(other) => Err(ApiError::Internal(format!(
            "JSON body must be an object or array, got {other}"
        ))),
        Err(e) => Err(ApiError::Internal(e.to_string())),
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_empty_object() {
        assert!(parse_object(b"").unwrap().0.is_empty());
    }

    #[test]
    fn array_body_has_no_fields() {
        assert!(parse_object(b"[1, 2]").unwrap().0.is_empty());
    }

    #[test]
    fn scalar_body_is_rejected() {
        for body in [&b"5"[..], b"\"x\"", b"true", b"null"] {
            let err = parse_object(body).unwrap_err();
            assert!(matches!(err, ApiError::Internal(_)), "body {body:?}");
        }
    }

    #[test]
    fn malformed_body_is_rejected() {
        let err = parse_object(b"{bad").unwrap_err();
        assert!(matches!(err, ApiError::Internal(msg) if !msg.is_empty()));
    }

    #[test]
    fn prompt_lookup_skips_empty_and_non_string() {
        let object = parse_object(br#"{"a":"x","b":"","c":5}"#).unwrap();
        assert_eq!(object.non_empty_str("a"), Some("x"));
        assert_eq!(object.non_empty_str("b"), None);
        assert_eq!(object.non_empty_str("c"), None);
        assert_eq!(object.non_empty_str("d"), None);
    }
}
