//! Publish Routes
//!
//! Routes:
//! - POST /api/publish - Pack the current site into a shareable link
//! - POST /api/reset?confirm=true - Drop the draft, back to preset or default

use axum::{
    extract::{Query, State},
    routing::post,
    Json, Router,
};

use super::Confirmation;
use crate::services::{PublishReceipt, Resolved};
use crate::{AppState, Result};

/// Build publish routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/publish", post(publish))
        .route("/reset", post(reset))
}

async fn publish(State(state): State<AppState>) -> Result<Json<PublishReceipt>> {
    Ok(Json(state.publisher.publish().await?))
}

async fn reset(
    State(state): State<AppState>,
    Query(confirmation): Query<Confirmation>,
) -> Result<Json<Resolved>> {
    confirmation.require("Resetting the site")?;
    Ok(Json(state.store.reset_to_default().await))
}
