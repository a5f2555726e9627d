//! API Integration Tests for squeeze
//!
//! Tests the REST API endpoints using axum-test.
//! Uses an in-memory draft store and a mock generative API where needed.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{build_state_with, build_test_state, test_config, test_server};
use serde_json::{json, Value};
use squeeze::services::{GenerationService, FAILED_BIO_FALLBACK};
use squeeze_models::{decode_snapshot, Snapshot};
use squeeze_storage::{KeyValueStore, MemoryStore, CONTENT_KEY};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn unlocked_server() -> (TestServer, Arc<MemoryStore>) {
    let (state, kv) = build_test_state().await;
    let server = test_server(state);

    server
        .post("/api/session/unlock")
        .json(&json!({ "password": "funk" }))
        .await
        .assert_status_ok();

    (server, kv)
}

fn content_ids(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Health Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_health_check_returns_healthy() {
    let (state, _) = build_test_state().await;
    let server = test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());

    server.get("/health/live").await.assert_status_ok();
}

#[tokio::test]
async fn test_status_reports_site() {
    let (state, _) = build_test_state().await;
    let server = test_server(state);

    let response = server.get("/status").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["site"]["source"], "default");
    assert_eq!(body["site"]["content_blocks"], 7);
    assert_eq!(body["site"]["tour_dates"], 1);
    assert_eq!(body["editing"], false);
    assert_eq!(body["generation_available"], false);
    assert_eq!(body["preset_configured"], false);
}

// ============================================================================
// Site Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_get_site_returns_default() {
    let (state, _) = build_test_state().await;
    let server = test_server(state);

    let response = server.get("/api/site").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["source"], "default");
    assert_eq!(body["snapshot"]["content"].as_array().unwrap().len(), 7);
    assert_eq!(body["snapshot"]["tourDates"][0]["venue"], "The Funk House");
    assert_eq!(body["snapshot"]["content"][1]["metadata"], "bio-photo");
}

#[tokio::test]
async fn test_get_site_uses_preset() {
    let mut config = test_config();
    config.site.preset = squeeze::config::SiteConfig::default().preset;
    let state = build_state_with(
        &config,
        Arc::new(MemoryStore::new()),
        GenerationService::disabled(),
    )
    .await;
    let server = test_server(state);

    let body: Value = server.get("/api/site").await.json();

    assert_eq!(body["source"], "preset");
    assert_eq!(body["snapshot"]["content"].as_array().unwrap().len(), 8);
    assert_eq!(body["snapshot"]["tourDates"][0]["venue"], "Mr Beery's");
}

#[tokio::test]
async fn test_sections() {
    let (state, _) = build_test_state().await;
    let server = test_server(state);

    let response = server.get("/api/site/sections").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["about"].as_array().unwrap().len(), 1);
    assert_eq!(body["bioPhotos"][0]["id"], "bio-photo-main");
    assert_eq!(body["socials"].as_array().unwrap().len(), 3);
    assert_eq!(body["socials"][0]["platform"], "instagram");
    assert_eq!(body["media"].as_array().unwrap().len(), 2);
    assert_eq!(body["tour"][0]["ticketsAvailable"], false);
}

// ============================================================================
// Session Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_unlock_and_lock() {
    let (state, _) = build_test_state().await;
    let server = test_server(state);

    let response = server
        .post("/api/session/unlock")
        .json(&json!({ "password": "funky" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["editing"], false);
    assert_eq!(body["error"], true);

    let response = server
        .post("/api/session/unlock")
        .json(&json!({ "password": "  FUNK " }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["editing"], true);
    assert_eq!(body["error"], false);

    let body: Value = server.post("/api/session/lock").await.json();
    assert_eq!(body["editing"], false);

    let body: Value = server.get("/api/session").await.json();
    assert_eq!(body["editing"], false);
}

// ============================================================================
// Edit Gate Tests
// ============================================================================

#[tokio::test]
async fn test_mutations_require_editing() {
    let (state, kv) = build_test_state().await;
    let server = test_server(state);

    let response = server
        .post("/api/content")
        .json(&json!({ "type": "text" }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "EDITING_LOCKED");

    server
        .post("/api/tour")
        .await
        .assert_status(StatusCode::FORBIDDEN);
    server
        .patch("/api/tour/t1")
        .json(&json!({ "venue": "x" }))
        .await
        .assert_status(StatusCode::FORBIDDEN);
    server
        .delete("/api/content/1")
        .add_query_param("confirm", "true")
        .await
        .assert_status(StatusCode::FORBIDDEN);
    server
        .post("/api/publish")
        .await
        .assert_status(StatusCode::FORBIDDEN);
    server
        .post("/api/generate/bio")
        .json(&json!({}))
        .await
        .assert_status(StatusCode::FORBIDDEN);

    assert!(kv.get(CONTENT_KEY).await.unwrap().is_none());
}

// ============================================================================
// Content Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_add_content_block_is_prepended() {
    let (server, kv) = unlocked_server().await;

    let response = server
        .post("/api/content")
        .json(&json!({ "type": "video" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let block: Value = response.json();
    assert_eq!(block["type"], "video");
    assert_eq!(block["title"], "NEW BLOCK");
    assert_eq!(block["content"], "https://");

    let site: Value = server.get("/api/site").await.json();
    assert_eq!(site["source"], "draft");
    assert_eq!(site["snapshot"]["content"][0]["id"], block["id"]);
    assert_eq!(site["snapshot"]["content"].as_array().unwrap().len(), 8);

    let raw = kv.get(CONTENT_KEY).await.unwrap().unwrap();
    assert!(raw.contains(block["id"].as_str().unwrap()));
}

#[tokio::test]
async fn test_add_content_block_rejects_unknown_type() {
    let (server, _) = unlocked_server().await;

    let response = server
        .post("/api/content")
        .json(&json!({ "type": "hologram" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_update_content_block() {
    let (server, _) = unlocked_server().await;

    let response = server
        .patch("/api/content/1")
        .json(&json!({ "content": "Under the bridge downtown" }))
        .await;

    response.assert_status_ok();
    let content: Value = response.json();
    assert_eq!(content[0]["id"], "1");
    assert_eq!(content[0]["title"], "The Squeeze");
    assert_eq!(content[0]["content"], "Under the bridge downtown");

    // Unknown id leaves everything as it was
    let unchanged: Value = server
        .patch("/api/content/missing")
        .json(&json!({ "title": "ghost" }))
        .await
        .json();
    assert_eq!(unchanged, content);
}

#[tokio::test]
async fn test_delete_content_block_requires_confirmation() {
    let (server, _) = unlocked_server().await;

    let response = server.delete("/api/content/m1").await;
    response.assert_status(StatusCode::PRECONDITION_REQUIRED);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "CONFIRMATION_REQUIRED");

    let response = server
        .delete("/api/content/m1")
        .add_query_param("confirm", "true")
        .await;
    response.assert_status_ok();
    let content: Value = response.json();
    let ids = content_ids(&content);
    assert_eq!(ids.len(), 6);
    assert!(!ids.contains(&"m1".to_string()));
}

// ============================================================================
// Tour Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_tour_lifecycle() {
    let (server, _) = unlocked_server().await;

    let response = server.post("/api/tour").await;
    response.assert_status(StatusCode::CREATED);
    let date: Value = response.json();
    assert_eq!(date["venue"], "VENUE NAME");
    assert!(date.get("ticketsUrl").is_none());
    let id = date["id"].as_str().unwrap().to_string();

    let tour: Value = server
        .patch(&format!("/api/tour/{}", id))
        .json(&json!({ "venue": "The Roxy", "ticketsUrl": "https://tickets.test/roxy" }))
        .await
        .json();
    assert_eq!(tour[0]["id"], "t1");
    assert_eq!(tour[1]["venue"], "The Roxy");
    assert_eq!(tour[1]["location"], "CITY, STATE");
    assert_eq!(tour[1]["ticketsUrl"], "https://tickets.test/roxy");

    server
        .delete(&format!("/api/tour/{}", id))
        .await
        .assert_status(StatusCode::PRECONDITION_REQUIRED);

    let tour: Value = server
        .delete(&format!("/api/tour/{}", id))
        .add_query_param("confirm", "true")
        .await
        .json();
    assert_eq!(tour.as_array().unwrap().len(), 1);
}

// ============================================================================
// Reset and Publish Tests
// ============================================================================

#[tokio::test]
async fn test_reset_requires_confirmation() {
    let (server, kv) = unlocked_server().await;
    server
        .post("/api/content")
        .json(&json!({ "type": "audio" }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .post("/api/reset")
        .await
        .assert_status(StatusCode::PRECONDITION_REQUIRED);

    let response = server
        .post("/api/reset")
        .add_query_param("confirm", "true")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["source"], "default");
    assert_eq!(body["snapshot"]["content"].as_array().unwrap().len(), 7);

    assert!(kv.get(CONTENT_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_publish_returns_shareable_link() {
    let (server, _) = unlocked_server().await;
    server.post("/api/tour").await.assert_status(StatusCode::CREATED);

    let response = server.post("/api/publish").await;

    response.assert_status_ok();
    let receipt: Value = response.json();
    let token = receipt["token"].as_str().unwrap();
    assert_eq!(
        receipt["url"],
        format!("https://squeeze.test/deploy/{}", token)
    );
    assert_eq!(receipt["log"].as_array().unwrap().len(), 4);
    assert!(receipt["log"][3]
        .as_str()
        .unwrap()
        .ends_with("GEN-X FUNK UPLOAD COMPLETE."));

    let site: Value = server.get("/api/site").await.json();
    let snapshot: Snapshot = serde_json::from_value(site["snapshot"].clone()).unwrap();
    assert_eq!(decode_snapshot(token), Some(snapshot));
}

// ============================================================================
// Generation Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_generate_without_key_falls_back() {
    let (server, _) = unlocked_server().await;

    let response = server
        .post("/api/generate/bio")
        .json(&json!({ "bandName": "Soul To Squeeze" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["text"], FAILED_BIO_FALLBACK);

    let response = server
        .post("/api/generate/poster")
        .json(&json!({ "prompt": "bass player upside down" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["image"].is_null());
}

#[tokio::test]
async fn test_generate_with_mock_api() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-3-flash-preview:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Funky monks on tour." }] } }]
        })))
        .mount(&mock)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash-image:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [
                { "inlineData": { "mimeType": "image/png", "data": "AAAA" } }
            ] } }]
        })))
        .mount(&mock)
        .await;

    let mut config = test_config();
    config.generation.api_key = Some("test-key".to_string());
    config.generation.base_url = mock.uri();
    let generation = GenerationService::new(&config.generation);
    let state = build_state_with(&config, Arc::new(MemoryStore::new()), generation).await;
    let server = test_server(state);
    server
        .post("/api/session/unlock")
        .json(&json!({ "password": "funk" }))
        .await
        .assert_status_ok();

    let bio: Value = server
        .post("/api/generate/bio")
        .json(&json!({ "bandName": "Soul To Squeeze" }))
        .await
        .json();
    assert_eq!(bio["text"], "Funky monks on tour.");

    let poster: Value = server
        .post("/api/generate/poster")
        .json(&json!({ "prompt": "Venice Beach at dusk" }))
        .await
        .json();
    assert_eq!(poster["image"], "data:image/png;base64,AAAA");

    server
        .post("/api/generate/poster")
        .json(&json!({ "prompt": "   " }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
