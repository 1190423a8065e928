//! HTTP API server for the backend.
//!
//! Serves a health check, API metadata, a mocked model invocation and a
//! datastore status report as JSON, with per-request tracing and permissive
//! CORS on every response.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::middleware;
use axum::http::Response;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, OnResponse, TraceLayer};
use tracing::{Level, Span};

pub use config::Config;
pub use state::AppState;

/// Creates the Axum application router with all routes and shared state.
///
/// Layers run outermost first: tracing, CORS, panic recovery, body parsing,
/// then routing.
pub fn create_app(state: Arc<AppState>) -> Router {
    use routes::fallback::not_found;

    Router::new()
        .route("/api/health", get(routes::health::check).fallback(not_found))
        .route("/api/info", get(routes::info::get).fallback(not_found))
        .route(
            "/api/bedrock/invoke",
            post(routes::bedrock::invoke).fallback(not_found),
        )
        .route(
            "/api/documentdb/status",
            get(routes::documentdb::status).fallback(not_found),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(extract::parse_json_body))
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(RecordResponse),
        )
}

/// Logs each finished request and counts it by status code.
#[derive(Debug, Clone, Copy)]
struct RecordResponse;

impl<B> OnResponse<B> for RecordResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, _span: &Span) {
        let status = response.status().as_u16();
        metrics::counter!("http_requests_total", "status" => status.to_string()).increment(1);
        tracing::info!(
            status,
            latency_ms = latency.as_millis() as u64,
            "finished processing request"
        );
    }
}
