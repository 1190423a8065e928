//! API metadata endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

pub const API_NAME: &str = "Condé Nast Backend API";
pub const API_VERSION: &str = "1.0.0";

/// Human-readable route listing, in registration order.
pub const ENDPOINTS: [&str; 4] = [
    "GET /api/health - Health check",
    "GET /api/info - API info",
    "POST /api/bedrock/invoke - Invoke Bedrock model",
    "GET /api/documentdb/status - DocumentDB status",
];

#[derive(Serialize)]
pub struct InfoResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub uptime: f64,
    pub timestamp: String,
    pub endpoints: [&'static str; 4],
}

/// GET /api/info — returns service metadata and uptime in seconds.
pub async fn get(State(state): State<Arc<AppState>>) -> Json<InfoResponse> {
    Json(InfoResponse {
        name: API_NAME,
        version: API_VERSION,
        environment: state.config.environment.clone(),
        uptime: state.uptime(),
        timestamp: common::timestamp(),
        endpoints: ENDPOINTS,
    })
}
