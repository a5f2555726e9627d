//! Common test utilities and helpers.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use axum_test::TestServer;
use serde_json::Value;
use squeeze::api;
use squeeze::config::Config;
use squeeze::services::GenerationService;
use squeeze::AppState;
use squeeze_storage::{KeyValueStore, MemoryStore};

/// Config for tests: no preset, no pacing, no generative key.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.server.public_url = "https://squeeze.test".to_string();
    config.site.preset = None;
    config.publish.step_interval = Duration::ZERO;
    config.publish.settle = Duration::ZERO;
    config
}

/// Build application state over an in-memory draft store.
pub async fn build_test_state() -> (AppState, Arc<MemoryStore>) {
    let kv = Arc::new(MemoryStore::new());
    let state = build_state_with(&test_config(), kv.clone(), GenerationService::disabled()).await;
    (state, kv)
}

pub async fn build_state_with(
    config: &Config,
    kv: Arc<dyn KeyValueStore>,
    generation: GenerationService,
) -> AppState {
    AppState::assemble(config, kv, generation).await
}

/// Router with all API routes, as `main` mounts them.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes(state.clone()))
        .with_state(state)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state)).expect("Failed to create test server")
}

/// Extract JSON body from response
pub async fn extract_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

/// Create a GET request
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
