//! Tour Routes
//!
//! Editing of tour dates. All routes sit behind the edit gate.
//!
//! Routes:
//! - POST /api/tour - Add a placeholder date at the end
//! - PATCH /api/tour/:id - Update named fields of a date
//! - DELETE /api/tour/:id?confirm=true - Remove a date

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{patch, post},
    Json, Router,
};
use squeeze_models::{TourDate, TourDatePatch};

use super::Confirmation;
use crate::{AppState, Result};

/// Build tour routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(add_date))
        .route("/:id", patch(update_date).delete(delete_date))
}

async fn add_date(State(state): State<AppState>) -> (StatusCode, Json<TourDate>) {
    let date = state.store.add_tour_date().await;
    (StatusCode::CREATED, Json(date))
}

async fn update_date(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TourDatePatch>,
) -> Json<Vec<TourDate>> {
    Json(state.store.update_tour_date(&id, patch).await)
}

async fn delete_date(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(confirmation): Query<Confirmation>,
) -> Result<Json<Vec<TourDate>>> {
    confirmation.require("Deleting a tour date")?;
    Ok(Json(state.store.delete_tour_date(&id).await))
}
