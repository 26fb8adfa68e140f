//! Gateway Health API
//!
//! Exposes a public endpoint reporting gateway liveness and the configured
//! provider.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::server::GatewayState;

#[derive(Serialize)]
pub struct HealthReport {
    pub status: String,
    pub service: String,
    pub version: String,
    pub provider: String,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
}

/// Handler for `GET /api/health`
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok".to_string(),
        service: "styleforge".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: state.provider.name().to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        timestamp: Utc::now(),
    })
}
