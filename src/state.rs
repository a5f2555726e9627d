//! Application state for squeeze.
//!
//! Contains the shared state that is passed to all handlers.

use std::sync::Arc;

use squeeze_storage::{DraftStore, FileStore, KeyValueStore};

use crate::config::{self, Config};
use crate::services::{EditGate, GenerationService, Publisher, Resolver, SiteStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Editable site content.
    pub store: SiteStore,
    /// Snapshot resolution (deploy token, draft, preset, default).
    pub resolver: Arc<Resolver>,
    /// Edit-mode flag.
    pub gate: Arc<EditGate>,
    /// Shareable link builder.
    pub publisher: Arc<Publisher>,
    /// Bio and poster generation.
    pub generation: Arc<GenerationService>,
}

impl AppState {
    /// Create the application state from the global configuration.
    pub async fn new() -> Self {
        let config = config::config();
        let kv: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.storage.draft_path));
        let generation = GenerationService::new(&config.generation);
        Self::assemble(config, kv, generation).await
    }

    /// Wire the services over an explicit key-value store.
    pub async fn assemble(
        config: &Config,
        kv: Arc<dyn KeyValueStore>,
        generation: GenerationService,
    ) -> Self {
        let resolver = Arc::new(Resolver::new(
            DraftStore::new(kv),
            config.site.preset.as_deref(),
        ));
        let store = SiteStore::load(resolver.clone()).await;
        let gate = Arc::new(EditGate::new(config.site.edit_passphrase.clone()));
        let publisher = Arc::new(Publisher::new(
            store.clone(),
            config.server.public_url.clone(),
            config.publish.step_interval,
            config.publish.settle,
        ));

        Self {
            store,
            resolver,
            gate,
            publisher,
            generation: Arc::new(generation),
        }
    }
}
