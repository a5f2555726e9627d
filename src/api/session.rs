//! Session Routes
//!
//! Edit-mode switch for the editor UI.
//!
//! Routes:
//! - GET /api/session - Gate status
//! - POST /api/session/unlock - Enable editing with the passphrase
//! - POST /api/session/lock - Disable editing

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::services::GateStatus;
use crate::AppState;

/// Build session routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_status))
        .route("/unlock", post(unlock))
        .route("/lock", post(lock))
}

#[derive(Debug, Deserialize)]
struct UnlockRequest {
    #[serde(default)]
    password: String,
}

async fn get_status(State(state): State<AppState>) -> Json<GateStatus> {
    Json(state.gate.status().await)
}

/// Try the passphrase. Answers 401 with the raised error flag on mismatch.
async fn unlock(
    State(state): State<AppState>,
    Json(request): Json<UnlockRequest>,
) -> (StatusCode, Json<GateStatus>) {
    let accepted = state.gate.unlock(&request.password).await;
    let status = if accepted {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };

    (status, Json(state.gate.status().await))
}

async fn lock(State(state): State<AppState>) -> Json<GateStatus> {
    state.gate.lock().await;
    Json(state.gate.status().await)
}
