//! Datastore status endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use integrations::{DatastoreState, DatastoreStatus};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct DatastoreStatusResponse {
    pub service: &'static str,
    pub status: DatastoreState,
    pub endpoint: String,
    pub timestamp: String,
}

/// GET /api/documentdb/status — reports whether a datastore endpoint is configured.
pub async fn status(State(state): State<Arc<AppState>>) -> Json<DatastoreStatusResponse> {
    let DatastoreStatus {
        service,
        status,
        endpoint,
    } = state.datastore.status().await;

    Json(DatastoreStatusResponse {
        service,
        status,
        endpoint: endpoint.into(),
        timestamp: common::timestamp(),
    })
}
