//! Edit-mode middleware.
//!
//! Mutating routes only run while the edit gate is open. The gate is a
//! convenience switch for the editor UI, so this check is not access
//! control either.

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{error::Error, AppState};

/// Middleware that requires editing to be enabled.
///
/// # Errors
///
/// Returns 403 `EDITING_LOCKED` while the gate is closed.
pub async fn require_editing(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Error> {
    if !state.gate.is_editing().await {
        debug!(method = %req.method(), uri = %req.uri(), "Rejected while editing is locked");
        return Err(Error::EditingLocked);
    }

    Ok(next.run(req).await)
}
