//! Configuration management for squeeze.
//!
//! Loads configuration from environment variables (and `.env` via dotenvy):
//! - Server bind address and public URL used in shareable links
//! - Draft storage location
//! - Operator preset token and edit passphrase
//! - Publishing sequence pacing
//! - Generative API credentials and models

use std::env;
use std::sync::OnceLock;
use std::time::Duration;

use tracing::warn;

/// Preset token shipped with the service.
pub const BUILTIN_PRESET: &str = include_str!("../presets/site.preset");

/// Default passphrase for the edit gate.
pub const DEFAULT_EDIT_PASSPHRASE: &str = "funk";

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Initialize configuration (call once at startup)
pub fn init() -> &'static Config {
    config()
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub site: SiteConfig,
    pub publish: PublishConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base URL prefixed to `/deploy/<token>` links
    pub public_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8787,
            public_url: "http://localhost:8787".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding the draft entries
    pub draft_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            draft_path: "./data/drafts".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Operator preset token; `None` disables the preset step
    pub preset: Option<String>,
    /// Literal compared against unlock attempts. Not a credential.
    pub edit_passphrase: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            preset: Some(BUILTIN_PRESET.trim().to_string()),
            edit_passphrase: DEFAULT_EDIT_PASSPHRASE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Delay between progress steps
    pub step_interval: Duration,
    /// Delay between the last step and the receipt
    pub settle: Duration,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            step_interval: Duration::from_millis(250),
            settle: Duration::from_millis(600),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// `None` disables remote calls; the service answers with fallbacks
    pub api_key: Option<String>,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: squeeze_llm::DEFAULT_BASE_URL.to_string(),
            text_model: squeeze_llm::DEFAULT_TEXT_MODEL.to_string(),
            image_model: squeeze_llm::DEFAULT_IMAGE_MODEL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            server: ServerConfig {
                host: env_or("HOST", "0.0.0.0"),
                port: env_or("PORT", "8787").parse().unwrap_or_else(|_| {
                    warn!("Invalid PORT, falling back to 8787");
                    8787
                }),
                public_url: env_or("PUBLIC_URL", "http://localhost:8787"),
            },
            storage: StorageConfig {
                draft_path: env_or("DRAFT_PATH", "./data/drafts"),
            },
            site: SiteConfig {
                preset: Self::parse_preset(),
                edit_passphrase: env_or("EDIT_PASSPHRASE", DEFAULT_EDIT_PASSPHRASE),
            },
            publish: PublishConfig {
                step_interval: Duration::from_millis(
                    env_or("PUBLISH_STEP_MS", "250").parse().unwrap_or(250),
                ),
                settle: Duration::from_millis(
                    env_or("PUBLISH_SETTLE_MS", "600").parse().unwrap_or(600),
                ),
            },
            generation: GenerationConfig {
                api_key: env::var("GEMINI_API_KEY")
                    .or_else(|_| env::var("API_KEY"))
                    .ok()
                    .filter(|k| !k.trim().is_empty()),
                base_url: env_or("GEMINI_BASE_URL", squeeze_llm::DEFAULT_BASE_URL),
                text_model: env_or("GEMINI_TEXT_MODEL", squeeze_llm::DEFAULT_TEXT_MODEL),
                image_model: env_or("GEMINI_IMAGE_MODEL", squeeze_llm::DEFAULT_IMAGE_MODEL),
            },
        }
    }

    /// Resolve the operator preset.
    ///
    /// Priority: `SITE_PRESET` (inline token, empty disables), then
    /// `SITE_PRESET_FILE`, then the built-in preset.
    fn parse_preset() -> Option<String> {
        if let Ok(inline) = env::var("SITE_PRESET") {
            let inline = inline.trim().to_string();
            return (!inline.is_empty()).then_some(inline);
        }

        if let Ok(path) = env::var("SITE_PRESET_FILE") {
            match std::fs::read_to_string(&path) {
                Ok(contents) => {
                    let token = contents.trim().to_string();
                    return (!token.is_empty()).then_some(token);
                }
                Err(e) => warn!(path = %path, error = %e, "Preset file unreadable, using built-in preset"),
            }
        }

        Some(BUILTIN_PRESET.trim().to_string())
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
