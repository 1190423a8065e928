//! API server entry point.

use std::future::IntoFuture;
use std::sync::Arc;

use api::config::{Config, LogFormat};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, shutting down");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // 1. Load configuration once
    let config = Config::from_env()?;

    // 2. Initialize tracing
    init_tracing(&config);

    // 3. Optionally expose Prometheus metrics on their own listener
    if let Some(addr) = config.metrics_addr() {
        PrometheusBuilder::new()
            .with_http_listener(addr.parse::<std::net::SocketAddr>()?)
            .install()?;
        tracing::info!(%addr, "metrics exporter listening");
    }

    // 4. Build the application
    let addr = config.addr();
    tracing::info!(
        %addr,
        environment = %config.environment,
        bedrock_model = %config.bedrock_model_arn,
        documentdb = %config.documentdb_endpoint,
        "starting API server"
    );
    let app = api::create_app(Arc::new(api::AppState::from_config(config)));

    // 5. Serve until a termination signal; in-flight requests are not drained
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("ready to accept requests");

    tokio::select! {
        result = axum::serve(listener, app).into_future() => result?,
        () = shutdown_signal() => {}
    }

    tracing::info!("server stopped");
    Ok(())
}
