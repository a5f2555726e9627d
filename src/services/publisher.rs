//! Publishing: turn the current snapshot into a shareable link.
//!
//! The progress steps are cosmetic. Nothing is uploaded anywhere; the link
//! carries the whole site in its token.

use std::time::Duration;

use chrono::Local;
use serde::Serialize;
use tokio::time::sleep;
use tracing::info;

use crate::error::{Error, Result};

use super::site_store::SiteStore;

/// Progress steps shown while publishing.
pub const PUBLISH_STEPS: [&str; 4] = [
    "Syncing local draft...",
    "Encoding site structure...",
    "Finalizing public manifest...",
    "GEN-X FUNK UPLOAD COMPLETE.",
];

/// Result of a publish run.
#[derive(Debug, Clone, Serialize)]
pub struct PublishReceipt {
    pub token: String,
    pub url: String,
    /// `[HH:MM:SS] step` lines in order
    pub log: Vec<String>,
}

#[derive(Clone)]
pub struct Publisher {
    store: SiteStore,
    public_url: String,
    step_interval: Duration,
    settle: Duration,
}

impl Publisher {
    pub fn new(
        store: SiteStore,
        public_url: impl Into<String>,
        step_interval: Duration,
        settle: Duration,
    ) -> Self {
        Self {
            store,
            public_url: public_url.into(),
            step_interval,
            settle,
        }
    }

    /// Shareable link for `token`.
    pub fn deploy_url(&self, token: &str) -> String {
        format!("{}/deploy/{}", self.public_url.trim_end_matches('/'), token)
    }

    /// Run the progress sequence, then pack the current snapshot.
    pub async fn publish(&self) -> Result<PublishReceipt> {
        let mut log = Vec::with_capacity(PUBLISH_STEPS.len());

        for (i, step) in PUBLISH_STEPS.iter().enumerate() {
            sleep(self.step_interval).await;
            let progress = (i + 1) * 100 / PUBLISH_STEPS.len();
            log.push(format!("[{}] {}", Local::now().format("%H:%M:%S"), step));
            info!(progress, step, "Publish progress");
        }

        let token = self.store.snapshot().await.to_token();
        if token.is_empty() {
            return Err(Error::Publish("site content could not be encoded".to_string()));
        }

        sleep(self.settle).await;

        let url = self.deploy_url(&token);
        info!(token_len = token.len(), "Site published");

        Ok(PublishReceipt { token, url, log })
    }
}
