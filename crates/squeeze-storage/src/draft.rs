//! Local draft persistence.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use squeeze_models::{ContentBlock, Snapshot, TourDate};
use tracing::debug;

use crate::{Error, KeyValueStore, Result};

/// Key holding the content block array.
pub const CONTENT_KEY: &str = "s2s_content";

/// Key holding the tour date array.
pub const TOUR_KEY: &str = "s2s_tour";

/// The editor's locally persisted draft.
///
/// Each collection lives under its own key and is read and written
/// independently. Entries are plain JSON arrays with no version marker.
#[derive(Clone)]
pub struct DraftStore {
    kv: Arc<dyn KeyValueStore>,
}

impl DraftStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Stored content blocks; `Ok(None)` when no draft was saved.
    pub async fn load_content(&self) -> Result<Option<Vec<ContentBlock>>> {
        self.load_json(CONTENT_KEY).await
    }

    /// Stored tour dates; `Ok(None)` when none were saved.
    pub async fn load_tour(&self) -> Result<Option<Vec<TourDate>>> {
        self.load_json(TOUR_KEY).await
    }

    pub async fn save_content(&self, content: &[ContentBlock]) -> Result<()> {
        self.save_json(CONTENT_KEY, content).await
    }

    pub async fn save_tour(&self, tour_dates: &[TourDate]) -> Result<()> {
        self.save_json(TOUR_KEY, tour_dates).await
    }

    /// Write both collections, each under its own key.
    pub async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        self.save_content(&snapshot.content).await?;
        self.save_tour(&snapshot.tour_dates).await
    }

    /// Remove the draft entirely.
    pub async fn clear(&self) -> Result<()> {
        self.kv.remove(CONTENT_KEY).await?;
        self.kv.remove(TOUR_KEY).await
    }

    async fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.kv.get(key).await? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| Error::Corrupt {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    async fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| Error::Internal(format!("Failed to serialize {}: {}", key, e)))?;
        self.kv.set(key, &json).await?;
        debug!(key, bytes = json.len(), "Draft entry saved");
        Ok(())
    }
}
