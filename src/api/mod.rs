//! API Routes for squeeze
//!
//! This module combines all API routes into a single router.
//! Routes are organized by domain and apply appropriate middleware.

mod content;
mod deploy;
mod generate;
mod publish;
mod session;
mod site;
pub mod status;
mod tour;

use axum::Router;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::middleware::require_editing;
use crate::AppState;

/// Build the complete API router.
///
/// Route structure:
/// - /health, /status - Health checks (public)
/// - /deploy/* - Shareable snapshot links (public)
/// - /api/site, /api/session - Site content and edit gate (public)
/// - /api/content, /api/tour, /api/publish, /api/reset, /api/generate - Editing (gated)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health and status endpoints (public)
        .merge(status::routes())
        // Shareable links
        .nest("/deploy", deploy::routes())
        .nest("/api", public_routes().merge(editing_routes(state)))
}

/// Read-only and gate routes.
fn public_routes() -> Router<AppState> {
    Router::new()
        .nest("/site", site::routes())
        .nest("/session", session::routes())
}

/// Routes that only run while editing is enabled.
fn editing_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/content", content::routes())
        .nest("/tour", tour::routes())
        .nest("/generate", generate::routes())
        .merge(publish::routes())
        .layer(axum::middleware::from_fn_with_state(state, require_editing))
}

/// `?confirm=true` marker for destructive operations.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Confirmation {
    #[serde(default)]
    confirm: bool,
}

impl Confirmation {
    /// Fail with `CONFIRMATION_REQUIRED` unless the caller confirmed.
    pub(crate) fn require(&self, action: &str) -> Result<()> {
        if self.confirm {
            Ok(())
        } else {
            Err(Error::ConfirmationRequired(format!(
                "{} requires ?confirm=true",
                action
            )))
        }
    }
}
