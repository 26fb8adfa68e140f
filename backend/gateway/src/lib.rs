//! StyleForge Gateway HTTP API Server
//!
//! Exposes the analyze/plan REST endpoints and the health report.

pub mod analyze;
pub mod health_api;
pub mod mime_detect;
pub mod server;

pub use server::{GatewayState, MAX_UPLOAD_BYTES, build_router, start_server};
