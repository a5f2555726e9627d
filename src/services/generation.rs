//! Band bio and poster generation.
//!
//! Wraps [`GenerativeClient`] and turns every failure into a fallback the
//! editor can show as-is. No client error leaves this module.

use squeeze_llm::{GenerativeClient, GenerativeConfig};
use tracing::{info, warn};

use crate::config::GenerationConfig;

/// Shown when the model answers with no text.
pub const EMPTY_BIO_FALLBACK: &str =
    "Soul To Squeeze is bringing the California funk to your town. Stay tuned!";

/// Shown when generation fails or is unavailable.
pub const FAILED_BIO_FALLBACK: &str =
    "Error generating bio. Please write your own soul-squeezing intro!";

#[derive(Clone)]
pub struct GenerationService {
    client: Option<GenerativeClient>,
}

impl GenerationService {
    /// Build from config. Without an API key the service only returns
    /// fallbacks.
    pub fn new(config: &GenerationConfig) -> Self {
        let Some(api_key) = config.api_key.as_deref() else {
            info!("No generative API key configured, generation disabled");
            return Self::disabled();
        };

        let mut client_config = GenerativeConfig::new(api_key);
        client_config.base_url = config.base_url.clone();
        client_config.text_model = config.text_model.clone();
        client_config.image_model = config.image_model.clone();

        match GenerativeClient::new(client_config) {
            Ok(client) => Self::with_client(client),
            Err(e) => {
                warn!(error = %e, "Generative client unavailable, generation disabled");
                Self::disabled()
            }
        }
    }

    pub fn with_client(client: GenerativeClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn disabled() -> Self {
        Self { client: None }
    }

    pub fn is_available(&self) -> bool {
        self.client.is_some()
    }

    /// A roughly 100-word intro for `band_name`. Never fails.
    pub async fn band_bio(&self, band_name: &str) -> String {
        let Some(client) = &self.client else {
            return FAILED_BIO_FALLBACK.to_string();
        };

        match client.generate_text(&bio_prompt(band_name)).await {
            Ok(text) if text.trim().is_empty() => EMPTY_BIO_FALLBACK.to_string(),
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Bio generation failed");
                FAILED_BIO_FALLBACK.to_string()
            }
        }
    }

    /// Poster art as a `data:` URI, or `None` if nothing came back.
    pub async fn band_poster(&self, prompt: &str) -> Option<String> {
        let client = self.client.as_ref()?;

        match client.generate_image(&poster_prompt(prompt)).await {
            Ok(image) => image.map(|image| image.data_uri()),
            Err(e) => {
                warn!(error = %e, "Poster generation failed");
                None
            }
        }
    }
}

fn bio_prompt(band_name: &str) -> String {
    format!(
        "Write a high-energy, funky, and professional 100-word introduction for a Red Hot \
         Chili Peppers tribute band named \"{}\". Capture the California funk-rock vibe, \
         mention the energy of flea and the soul of Kiedis. Use rock-and-roll terminology.",
        band_name
    )
}

fn poster_prompt(subject: &str) -> String {
    format!(
        "A high-energy, artistic rock band poster for a Red Hot Chili Peppers tribute band. \
         Style: Grungy, 90s alternative rock, vibrant reds and blacks, graffiti elements, \
         psychedelic funk vibes. Subject: {}",
        subject
    )
}
