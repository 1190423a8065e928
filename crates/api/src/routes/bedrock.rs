//! Model invocation endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::error::ApiError;
use crate::extract::JsonObject;
use crate::state::AppState;

#[derive(Serialize)]
pub struct InvokeResponse {
    pub prompt: String,
    pub response: String,
    pub model: String,
    pub timestamp: String,
}

/// POST /api/bedrock/invoke — runs `prompt` through the inference provider.
#[tracing::instrument(skip_all)]
pub async fn invoke(
    State(state): State<Arc<AppState>>,
    body: JsonObject,
) -> Result<Json<InvokeResponse>, ApiError> {
    let prompt = body.non_empty_str("prompt").ok_or(ApiError::MissingPrompt)?;

    if !state.inference.model().is_configured() {
        tracing::warn!("invocation rejected: no model configured");
        return Err(ApiError::ModelNotConfigured);
    }

    let completion = state.inference.invoke(prompt).await?;
    metrics::counter!("bedrock_invocations_total").increment(1);

    Ok(Json(InvokeResponse {
        prompt: prompt.to_string(),
        response: completion.text,
        model: completion.model,
        timestamp: common::timestamp(),
    }))
}
