//! Generative content client.
//!
//! Talks to a Gemini-style `generateContent` endpoint for two jobs: prose
//! (band bios) and inline image data (posters). Every call reports failure
//! as [`Error`]; deciding what to show instead is left to the caller.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Maximum attempts per call
const MAX_RETRIES: u32 = 2;

/// Delay between retries (doubles each time)
const RETRY_DELAY_MS: u64 = 500;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Error types for the generative client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Generation error: {0}")]
    Api(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Request failed: {0}")]
    Request(String),
}

/// Result type for generative operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration for the generative client.
#[derive(Debug, Clone)]
pub struct GenerativeConfig {
    pub base_url: String,
    pub api_key: String,
    pub text_model: String,
    pub image_model: String,
    pub timeout: Duration,
}

impl GenerativeConfig {
    /// Config with the default endpoint and models.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Image returned inline by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64 payload as returned by the API
    pub data: String,
}

impl InlineImage {
    /// `data:` URI suitable for an `<img src>`.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Client for text and image generation.
#[derive(Clone)]
pub struct GenerativeClient {
    inner: Arc<GenerativeClientInner>,
}

struct GenerativeClientInner {
    client: Client,
    config: GenerativeConfig,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl GenerateResponse {
    fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .iter()
            .flatten()
            .take(1)
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
    }

    /// Concatenated text of the first candidate.
    fn text(&self) -> String {
        self.parts().filter_map(|p| p.text.as_deref()).collect()
    }

    /// First inline image of the first candidate.
    fn inline_image(&self) -> Option<InlineImage> {
        self.parts()
            .find_map(|p| p.inline_data.as_ref())
            .map(|d| InlineImage {
                mime_type: d
                    .mime_type
                    .clone()
                    .unwrap_or_else(|| "image/png".to_string()),
                data: d.data.clone(),
            })
    }
}

impl GenerativeClient {
    /// Create a client from config.
    pub fn new(config: GenerativeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Request(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            text_model = %config.text_model,
            image_model = %config.image_model,
            "Generative client initialized"
        );

        Ok(Self {
            inner: Arc::new(GenerativeClientInner { client, config }),
        })
    }

    /// Generate prose for `prompt`. May be empty if the model returned no text.
    pub async fn generate_text(&self, prompt: &str) -> Result<String> {
        let model = self.inner.config.text_model.clone();
        let response = self.generate(&model, json!({ "parts": [{ "text": prompt }] })).await?;
        Ok(response.text())
    }

    /// Generate an image for `prompt`; `Ok(None)` if the model returned none.
    pub async fn generate_image(&self, prompt: &str) -> Result<Option<InlineImage>> {
        let model = self.inner.config.image_model.clone();
        let response = self.generate(&model, json!({ "parts": [{ "text": prompt }] })).await?;
        Ok(response.inline_image())
    }

    /// Call `model` with retries on transient errors.
    async fn generate(&self, model: &str, contents: Value) -> Result<GenerateResponse> {
        let mut delay = Duration::from_millis(RETRY_DELAY_MS);

        for attempt in 0..MAX_RETRIES {
            match self.call(model, &contents).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    if Self::is_retryable(&e) && attempt < MAX_RETRIES - 1 {
                        debug!(
                            model,
                            attempt,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying after error"
                        );
                        sleep(delay).await;
                        delay *= 2;
                    } else {
                        warn!(model, error = %e, "Generation failed");
                        return Err(e);
                    }
                }
            }
        }

        Err(Error::Api(format!(
            "Model {} failed after {} attempts",
            model, MAX_RETRIES
        )))
    }

    fn is_retryable(error: &Error) -> bool {
        matches!(error, Error::RateLimitExceeded)
            || error.to_string().contains("503")
            || error.to_string().contains("timed out")
    }

    async fn call(&self, model: &str, contents: &Value) -> Result<GenerateResponse> {
        let config = &self.inner.config;
        let url = format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            model
        );

        debug!(model, "Calling generative API");

        let response = self
            .inner
            .client
            .post(&url)
            .query(&[("key", config.api_key.as_str())])
            .json(&json!({ "contents": [contents] }))
            .send()
            .await
            .map_err(|e| Error::Request(format!("Request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Request(format!("Failed to read response: {}", e)))?;

        if status.as_u16() == 429 {
            return Err(Error::RateLimitExceeded);
        }

        if !status.is_success() {
            return Err(Error::Api(format!("API returned {}: {}", status, text)));
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| Error::Api(format!("Failed to parse response: {}", e)))?;

        if let Some(error) = parsed.error {
            return Err(Error::Api(error.message));
        }

        Ok(parsed)
    }
}
