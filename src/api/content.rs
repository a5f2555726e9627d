//! Content Routes
//!
//! Editing of content blocks. All routes sit behind the edit gate.
//!
//! Routes:
//! - POST /api/content - Add a placeholder block at the top
//! - PATCH /api/content/:id - Update named fields of a block
//! - DELETE /api/content/:id?confirm=true - Remove a block

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{patch, post},
    Json, Router,
};
use serde::Deserialize;
use squeeze_models::{ContentBlock, ContentBlockPatch, ContentType};

use super::Confirmation;
use crate::{AppState, Error, Result};

/// Build content routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(add_block))
        .route("/:id", patch(update_block).delete(delete_block))
}

#[derive(Debug, Deserialize)]
struct AddBlockRequest {
    #[serde(rename = "type")]
    kind: String,
}

/// Add a block of the requested type.
async fn add_block(
    State(state): State<AppState>,
    Json(request): Json<AddBlockRequest>,
) -> Result<(StatusCode, Json<ContentBlock>)> {
    let kind = ContentType::from_str(&request.kind).ok_or_else(|| {
        Error::InvalidInput(format!("Unknown content type: {}", request.kind))
    })?;

    let block = state.store.add_content_block(kind).await;
    Ok((StatusCode::CREATED, Json(block)))
}

/// Apply a partial update. Unknown ids leave the list unchanged.
async fn update_block(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ContentBlockPatch>,
) -> Json<Vec<ContentBlock>> {
    Json(state.store.update_content_block(&id, patch).await)
}

/// Delete a block once confirmed.
async fn delete_block(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(confirmation): Query<Confirmation>,
) -> Result<Json<Vec<ContentBlock>>> {
    confirmation.require("Deleting a content block")?;
    Ok(Json(state.store.delete_content_block(&id).await))
}
