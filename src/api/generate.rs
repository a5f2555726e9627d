//! Generate Routes
//!
//! Routes:
//! - POST /api/generate/bio - Band intro text (always answers, possibly a fallback)
//! - POST /api/generate/poster - Poster image as a data URI, or null

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, Result};

/// Band name used when the request leaves it out.
const DEFAULT_BAND_NAME: &str = "Soul To Squeeze";

/// Build generation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bio", post(generate_bio))
        .route("/poster", post(generate_poster))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BioRequest {
    #[serde(default)]
    band_name: Option<String>,
}

#[derive(Debug, Serialize)]
struct BioResponse {
    text: String,
}

#[derive(Debug, Deserialize)]
struct PosterRequest {
    prompt: String,
}

#[derive(Debug, Serialize)]
struct PosterResponse {
    image: Option<String>,
}

async fn generate_bio(
    State(state): State<AppState>,
    Json(request): Json<BioRequest>,
) -> Json<BioResponse> {
    let band_name = request
        .band_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_BAND_NAME);

    Json(BioResponse {
        text: state.generation.band_bio(band_name).await,
    })
}

async fn generate_poster(
    State(state): State<AppState>,
    Json(request): Json<PosterRequest>,
) -> Result<Json<PosterResponse>> {
    let prompt = request.prompt.trim();
    if prompt.is_empty() {
        return Err(Error::InvalidInput("Poster prompt is empty".to_string()));
    }

    Ok(Json(PosterResponse {
        image: state.generation.band_poster(prompt).await,
    }))
}
