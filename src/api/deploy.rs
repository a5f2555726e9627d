//! Deploy Routes
//!
//! Opens a shareable link. The token in the path carries the whole site;
//! when it does not decode to usable content the regular local resolution
//! answers instead. Opening a link never touches the draft.
//!
//! Routes:
//! - GET /deploy/*token - Resolve with the token taking priority

use axum::{
    extract::{OriginalUri, State},
    routing::get,
    Json, Router,
};

use crate::services::Resolved;
use crate::AppState;

/// Build deploy routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/*token", get(open_deploy))
}

/// Resolve the snapshot for a shareable link.
async fn open_deploy(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Json<Resolved> {
    Json(state.store.resolve_path(uri.path()).await)
}
