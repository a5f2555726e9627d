//! Key-value storage for the squeeze draft.
//!
//! The draft is two independent entries in a small key-value store, the
//! way the browser build kept two local-storage keys:
//!
//! ```text
//! s2s_content -> [ContentBlock, ...]   (JSON array)
//! s2s_tour    -> [TourDate, ...]       (JSON array)
//! ```
//!
//! [`FileStore`] keeps one `<key>.json` file per entry under a directory;
//! [`MemoryStore`] is the same thing in a map, for tests and ephemeral runs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::debug;

mod draft;
mod error;

pub use draft::{DraftStore, CONTENT_KEY, TOUR_KEY};
pub use error::{Error, Result};

/// Opaque string key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Store backed by one file per key.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    ///
    /// Keys are restricted to `[A-Za-z0-9_-]` so they always map inside the
    /// store directory.
    pub fn entry_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(Error::InvalidInput(format!("Invalid store key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Internal(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;

        fs::create_dir_all(&self.root).await.map_err(|e| {
            Error::Internal(format!(
                "Failed to create directory {}: {}",
                self.root.display(),
                e
            ))
        })?;

        // Write to temp file then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value).await.map_err(|e| {
            Error::Internal(format!("Failed to write {}: {}", temp_path.display(), e))
        })?;
        fs::rename(&temp_path, &path).await.map_err(|e| {
            Error::Internal(format!("Failed to rename to {}: {}", path.display(), e))
        })?;

        debug!(key, bytes = value.len(), path = %path.display(), "Stored entry");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Internal(format!(
                "Failed to delete {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// Store held entirely in memory.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
