//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Identity reported by the health check.
pub const SERVICE_NAME: &str = "condé-nast-backend";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub environment: String,
    pub timestamp: String,
    pub bedrock_configured: bool,
}

/// GET /api/health — returns liveness and integration configuration state.
pub async fn check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        environment: state.config.environment.clone(),
        timestamp: common::timestamp(),
        bedrock_configured: state.inference.model().is_configured(),
    })
}
