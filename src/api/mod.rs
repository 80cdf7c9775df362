//! HTTP surface for the analysis engine.
//!
//! - `POST /api/analyze` - full analysis of a request
//! - `POST /api/validate` - single CIDR validation
//! - `GET /api/health` - liveness

mod handlers;
mod middleware;

use axum::{
    routing::{get, post},
    Router,
};
use std::error::Error;
use tokio::net::TcpListener;

use crate::config::{AnalyzerConfig, ServerConfig};

pub use handlers::{analyze_cidrs, health_check, validate_cidr, InvalidRequest};

/// Application state shared across handlers
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub analyzer: AnalyzerConfig,
}

/// Build the application router with all routes
pub fn build_router(config: &ServerConfig) -> Router {
    let state = AppState {
        analyzer: config.analyzer,
    };

    Router::new()
        .route("/api/analyze", post(handlers::analyze_cidrs))
        .route("/api/validate", post(handlers::validate_cidr))
        .route("/api/health", get(handlers::health_check))
        .layer(middleware::cors_middleware())
        .layer(middleware::timeout_middleware(config.request_timeout))
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<(), Box<dyn Error>> {
    let app = build_router(&config);

    let listener = TcpListener::bind(config.bind_address)
        .await
        .map_err(|e| format!("Failed to bind to {}: {e}", config.bind_address))?;
    log::info!("Starting CIDR Viewer API server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {e}"))?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
