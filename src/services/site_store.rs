//! Editable site state.
//!
//! Holds the current snapshot in memory and applies the editor's mutations.
//! Every mutation that changes something is followed by a write of both
//! draft collections, awaited under the write lock so writes land in
//! mutation order. Write failures are logged and never reach the caller.

use std::sync::Arc;

use squeeze_models::{
    new_id, ContentBlock, ContentBlockPatch, ContentType, Snapshot, TourDate, TourDatePatch,
};
use squeeze_storage::DraftStore;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::resolver::{deploy_token, Resolved, Resolver, SnapshotSource};

/// Shared, mutable site content.
#[derive(Clone)]
pub struct SiteStore {
    state: Arc<RwLock<Resolved>>,
    resolver: Arc<Resolver>,
}

impl SiteStore {
    /// Start from whatever local resolution yields (draft, preset or default).
    pub async fn load(resolver: Arc<Resolver>) -> Self {
        let resolved = resolver.resolve_local().await;
        info!(
            source = %resolved.source,
            content = resolved.snapshot.content.len(),
            tour_dates = resolved.snapshot.tour_dates.len(),
            "Site content loaded"
        );
        Self::with_state(resolver, resolved)
    }

    fn with_state(resolver: Arc<Resolver>, resolved: Resolved) -> Self {
        Self {
            state: Arc::new(RwLock::new(resolved)),
            resolver,
        }
    }

    /// What a visitor at `path` sees: the site packed into a usable
    /// `/deploy/<token>` path, otherwise the current local site.
    pub async fn resolve_path(&self, path: &str) -> Resolved {
        let deployed = deploy_token(path).and_then(|token| self.resolver.resolve_deployed(token));
        match deployed {
            Some(snapshot) => Resolved::new(SnapshotSource::Deployed, snapshot),
            None => {
                debug!(path_len = path.len(), "No usable deploy token, serving local site");
                self.current().await
            }
        }
    }

    pub fn resolver(&self) -> &Arc<Resolver> {
        &self.resolver
    }

    fn drafts(&self) -> &DraftStore {
        self.resolver.drafts()
    }

    /// Current snapshot and the source it was last resolved from.
    pub async fn current(&self) -> Resolved {
        self.state.read().await.clone()
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.state.read().await.snapshot.clone()
    }

    pub async fn source(&self) -> SnapshotSource {
        self.state.read().await.source
    }

    /// Add a placeholder block of `kind` at the top of the list.
    pub async fn add_content_block(&self, kind: ContentType) -> ContentBlock {
        let mut state = self.state.write().await;

        let id = new_id(|candidate| state.snapshot.content_block(candidate).is_some());
        let block = ContentBlock::placeholder(id, kind);
        state.snapshot.content.insert(0, block.clone());

        debug!(id = %block.id, kind = %kind, "Content block added");
        self.persist(&mut state).await;
        block
    }

    /// Add a placeholder tour date at the end of the list.
    pub async fn add_tour_date(&self) -> TourDate {
        let mut state = self.state.write().await;

        let id = new_id(|candidate| state.snapshot.tour_date(candidate).is_some());
        let date = TourDate::placeholder(id);
        state.snapshot.tour_dates.push(date.clone());

        debug!(id = %date.id, "Tour date added");
        self.persist(&mut state).await;
        date
    }

    /// Apply `patch` to block `id`. Unknown ids change nothing.
    pub async fn update_content_block(
        &self,
        id: &str,
        patch: ContentBlockPatch,
    ) -> Vec<ContentBlock> {
        let mut state = self.state.write().await;

        let found = match state.snapshot.content.iter_mut().find(|c| c.id == id) {
            Some(block) => {
                block.apply(patch);
                true
            }
            None => false,
        };

        if found {
            debug!(id, "Content block updated");
            self.persist(&mut state).await;
        } else {
            debug!(id, "Update for unknown content block ignored");
        }

        state.snapshot.content.clone()
    }

    /// Remove block `id`. Unknown ids change nothing.
    pub async fn delete_content_block(&self, id: &str) -> Vec<ContentBlock> {
        let mut state = self.state.write().await;

        let before = state.snapshot.content.len();
        state.snapshot.content.retain(|c| c.id != id);
        if state.snapshot.content.len() != before {
            debug!(id, "Content block deleted");
            self.persist(&mut state).await;
        } else {
            debug!(id, "Delete for unknown content block ignored");
        }

        state.snapshot.content.clone()
    }

    /// Apply `patch` to tour date `id`. Unknown ids change nothing.
    pub async fn update_tour_date(&self, id: &str, patch: TourDatePatch) -> Vec<TourDate> {
        let mut state = self.state.write().await;

        let found = match state.snapshot.tour_dates.iter_mut().find(|t| t.id == id) {
            Some(date) => {
                date.apply(patch);
                true
            }
            None => false,
        };

        if found {
            debug!(id, "Tour date updated");
            self.persist(&mut state).await;
        } else {
            debug!(id, "Update for unknown tour date ignored");
        }

        state.snapshot.tour_dates.clone()
    }

    /// Remove tour date `id`. Unknown ids change nothing.
    pub async fn delete_tour_date(&self, id: &str) -> Vec<TourDate> {
        let mut state = self.state.write().await;

        let before = state.snapshot.tour_dates.len();
        state.snapshot.tour_dates.retain(|t| t.id != id);
        if state.snapshot.tour_dates.len() != before {
            debug!(id, "Tour date deleted");
            self.persist(&mut state).await;
        } else {
            debug!(id, "Delete for unknown tour date ignored");
        }

        state.snapshot.tour_dates.clone()
    }

    /// Drop the local draft and fall back to the preset or the default.
    pub async fn reset_to_default(&self) -> Resolved {
        let mut state = self.state.write().await;

        if let Err(e) = self.drafts().clear().await {
            warn!(error = %e, "Failed to clear draft");
        }

        *state = self.resolver.resolve_fallback();
        info!(source = %state.source, "Site content reset");
        state.clone()
    }

    async fn persist(&self, state: &mut Resolved) {
        state.source = SnapshotSource::Draft;
        if let Err(e) = self.drafts().save(&state.snapshot).await {
            warn!(error = %e, "Failed to persist draft");
        }
    }
}
