//! Main HTTP gateway server: router, shared state, and serve loop.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use styleforge_stylist::AdviceProvider;

use crate::analyze;
use crate::health_api;

/// Maximum accepted upload size (16 MiB).
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Application state shared across routes.
#[derive(Clone)]
pub struct GatewayState {
    pub provider: Arc<dyn AdviceProvider>,
    pub model: String,
    pub started_at: Instant,
}

impl GatewayState {
    pub fn new(provider: Arc<dyn AdviceProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            started_at: Instant::now(),
        }
    }
}

/// Build the Axum router with all API routes.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze::analyze))
        .route("/api/plan", post(analyze::plan))
        .route("/api/health", get(health_api::get_health))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the gateway HTTP server.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = build_router(state);

    info!("Gateway HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
