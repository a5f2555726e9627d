//! Status Routes
//!
//! Health checks and status endpoints.
//!
//! Routes:
//! - GET /health - Basic health check
//! - GET /health/live - Liveness check (server responding)
//! - GET /status - Site and service status

use std::sync::OnceLock;
use std::time::Instant;

use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::SnapshotSource;
use crate::AppState;

static STARTUP_TIME: OnceLock<Instant> = OnceLock::new();

/// Initialize startup time. Call this once at server start.
pub fn init_startup_time() {
    let _ = STARTUP_TIME.get_or_init(Instant::now);
}

/// Get uptime in seconds since server start.
fn get_uptime_seconds() -> u64 {
    STARTUP_TIME
        .get()
        .map(|start| start.elapsed().as_secs())
        .unwrap_or(0)
}

/// Build status routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness_check))
        .route("/status", get(system_status))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: DateTime<Utc>,
}

/// Basic health check.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    })
}

#[derive(Debug, Serialize)]
struct LivenessResponse {
    alive: bool,
}

/// Liveness check. Always succeeds while the process serves requests.
async fn liveness_check() -> Json<LivenessResponse> {
    Json(LivenessResponse { alive: true })
}

#[derive(Debug, Serialize)]
struct SystemStatus {
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    site: SiteStatus,
    editing: bool,
    generation_available: bool,
    preset_configured: bool,
}

#[derive(Debug, Serialize)]
struct SiteStatus {
    source: SnapshotSource,
    content_blocks: usize,
    tour_dates: usize,
}

/// Detailed status.
async fn system_status(State(state): State<AppState>) -> Json<SystemStatus> {
    let current = state.store.current().await;

    Json(SystemStatus {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: get_uptime_seconds(),
        site: SiteStatus {
            source: current.source,
            content_blocks: current.snapshot.content.len(),
            tour_dates: current.snapshot.tour_dates.len(),
        },
        editing: state.gate.is_editing().await,
        generation_available: state.generation.is_available(),
        preset_configured: state.resolver.has_preset(),
    })
}
