//! Site Routes
//!
//! Read access to the current site content.
//!
//! Routes:
//! - GET /api/site - Current snapshot and the source it came from
//! - GET /api/site/sections - Snapshot grouped by page section

use axum::{extract::State, routing::get, Json, Router};
use squeeze_models::SiteSections;

use crate::services::Resolved;
use crate::AppState;

/// Build site routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_site))
        .route("/sections", get(get_sections))
}

/// Get the current snapshot.
async fn get_site(State(state): State<AppState>) -> Json<Resolved> {
    Json(state.store.current().await)
}

/// Get the current snapshot grouped for rendering.
async fn get_sections(State(state): State<AppState>) -> Json<SiteSections> {
    let snapshot = state.store.snapshot().await;
    Json(SiteSections::from_snapshot(&snapshot))
}
