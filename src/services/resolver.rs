//! Startup resolution of the site snapshot.
//!
//! Sources are tried in strict priority, first usable one wins:
//! 1. a shareable token taken from a `/deploy/<token>` path
//! 2. the locally persisted draft
//! 3. the operator preset
//! 4. the built-in default
//!
//! Step 1 is applied per request by [`SiteStore::resolve_path`] over the
//! site loaded from steps 2-4. Resolution only reads. Nothing here writes to
//! the draft store.
//!
//! [`SiteStore::resolve_path`]: super::SiteStore::resolve_path

use serde::Serialize;
use squeeze_models::{decode_snapshot, Snapshot, TourDate};
use squeeze_storage::DraftStore;
use tracing::{debug, info, warn};

use super::defaults::{default_snapshot, default_tour};

/// Marker preceding a shareable token in a navigation path.
const DEPLOY_SEGMENT: &str = "/deploy/";

/// Where a resolved snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotSource {
    Deployed,
    Draft,
    Preset,
    Default,
}

impl SnapshotSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotSource::Deployed => "deployed",
            SnapshotSource::Draft => "draft",
            SnapshotSource::Preset => "preset",
            SnapshotSource::Default => "default",
        }
    }
}

impl std::fmt::Display for SnapshotSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A snapshot together with the source that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub source: SnapshotSource,
    pub snapshot: Snapshot,
}

impl Resolved {
    pub fn new(source: SnapshotSource, snapshot: Snapshot) -> Self {
        Self { source, snapshot }
    }
}

/// Extract the shareable token from a navigation path.
///
/// Everything after the first `/deploy/` is the token, slashes included.
pub fn deploy_token(path: &str) -> Option<&str> {
    path.split_once(DEPLOY_SEGMENT)
        .map(|(_, token)| token)
        .filter(|token| !token.is_empty())
}

/// Picks the snapshot to show from the configured sources.
pub struct Resolver {
    drafts: DraftStore,
    preset: Option<Snapshot>,
}

impl Resolver {
    /// Create a resolver. The preset token is decoded once; an undecodable
    /// or empty preset disables that step.
    pub fn new(drafts: DraftStore, preset_token: Option<&str>) -> Self {
        let preset = preset_token.and_then(|token| match decode_snapshot(token) {
            Some(snapshot) if snapshot.has_content() => Some(snapshot),
            Some(_) => {
                warn!("Preset has no content, ignoring");
                None
            }
            None => {
                warn!("Preset token does not decode, ignoring");
                None
            }
        });

        Self { drafts, preset }
    }

    pub fn drafts(&self) -> &DraftStore {
        &self.drafts
    }

    pub fn has_preset(&self) -> bool {
        self.preset.is_some()
    }

    /// Step 1 alone: the snapshot packed into `token`, if it decodes to
    /// something with content.
    pub fn resolve_deployed(&self, token: &str) -> Option<Snapshot> {
        let snapshot = decode_snapshot(token)?;
        if !snapshot.has_content() {
            debug!("Deploy token decoded to empty content, falling through");
            return None;
        }
        info!(
            content = snapshot.content.len(),
            tour_dates = snapshot.tour_dates.len(),
            "Resolved deployed snapshot"
        );
        Some(snapshot)
    }

    /// Resolution without a deploy token: draft, then preset, then default.
    pub async fn resolve_local(&self) -> Resolved {
        if let Some(snapshot) = self.load_draft().await {
            info!(
                content = snapshot.content.len(),
                tour_dates = snapshot.tour_dates.len(),
                "Resolved local draft"
            );
            return Resolved::new(SnapshotSource::Draft, snapshot);
        }
        self.resolve_fallback()
    }

    /// Preset if configured, otherwise the built-in default.
    pub fn resolve_fallback(&self) -> Resolved {
        match &self.preset {
            Some(preset) => {
                debug!("Resolved operator preset");
                Resolved::new(SnapshotSource::Preset, preset.clone())
            }
            None => {
                debug!("Resolved built-in default");
                Resolved::new(SnapshotSource::Default, default_snapshot())
            }
        }
    }

    /// The persisted draft, if its content entry exists, parses and is
    /// non-empty.
    ///
    /// A missing tour entry reads as no dates; a corrupt one is replaced by
    /// the default tour.
    async fn load_draft(&self) -> Option<Snapshot> {
        let content = match self.drafts.load_content().await {
            Ok(Some(content)) if content.is_empty() => {
                debug!("Draft has no content, falling through");
                return None;
            }
            Ok(Some(content)) => content,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Draft content unreadable, treating draft as absent");
                return None;
            }
        };

        let tour_dates: Vec<TourDate> = match self.drafts.load_tour().await {
            Ok(Some(tour_dates)) => tour_dates,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Draft tour unreadable, using default tour");
                default_tour()
            }
        };

        Some(Snapshot::new(content, tour_dates))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use squeeze_models::{encode_snapshot, ContentBlock, ContentType};
    use squeeze_storage::{KeyValueStore, MemoryStore, CONTENT_KEY, TOUR_KEY};

    fn drafts() -> (DraftStore, Arc<MemoryStore>) {
        let kv = Arc::new(MemoryStore::new());
        (DraftStore::new(kv.clone()), kv)
    }

    fn sample(id: &str) -> Snapshot {
        Snapshot::new(
            vec![ContentBlock::placeholder(id, ContentType::Text)],
            vec![TourDate::placeholder(format!("{}-tour", id))],
        )
    }

    #[test]
    fn test_resolve_deployed() {
        let (drafts, _) = drafts();
        let resolver = Resolver::new(drafts, None);
        let deployed = sample("deployed");

        assert_eq!(resolver.resolve_deployed(&deployed.to_token()), Some(deployed));
        assert_eq!(resolver.resolve_deployed("%%%not-base64"), None);
        let empty = encode_snapshot(&[], &[TourDate::placeholder("t")]);
        assert_eq!(resolver.resolve_deployed(&empty), None);
    }

    #[test]
    fn test_deploy_token() {
        assert_eq!(deploy_token("/deploy/abc=="), Some("abc=="));
        assert_eq!(deploy_token("/site/deploy/a/b+c"), Some("a/b+c"));
        assert_eq!(deploy_token("/deploy/"), None);
        assert_eq!(deploy_token("/"), None);
    }

    #[tokio::test]
    async fn test_priority_draft_over_preset() {
        let (drafts, _) = drafts();
        let draft = sample("draft");
        drafts.save(&draft).await.unwrap();

        let resolver = Resolver::new(drafts, Some(sample("preset").to_token().as_str()));
        let resolved = resolver.resolve_local().await;

        assert_eq!(resolved.source, SnapshotSource::Draft);
        assert_eq!(resolved.snapshot, draft);
    }

    #[tokio::test]
    async fn test_empty_draft_falls_through_to_preset() {
        let (drafts, _) = drafts();
        drafts
            .save(&Snapshot::new(vec![], vec![TourDate::placeholder("kept")]))
            .await
            .unwrap();
        let preset = sample("preset");

        let resolver = Resolver::new(drafts.clone(), Some(preset.to_token().as_str()));
        let resolved = resolver.resolve_local().await;
        assert_eq!(resolved.source, SnapshotSource::Preset);
        assert_eq!(resolved.snapshot, preset);

        let resolved = Resolver::new(drafts, None).resolve_local().await;
        assert_eq!(resolved.source, SnapshotSource::Default);
    }

    #[tokio::test]
    async fn test_preset_then_default() {
        let (drafts, _) = drafts();
        let preset = sample("preset");

        let with_preset = Resolver::new(drafts.clone(), Some(preset.to_token().as_str()));
        let resolved = with_preset.resolve_local().await;
        assert_eq!(resolved.source, SnapshotSource::Preset);
        assert_eq!(resolved.snapshot, preset);

        let broken_preset = Resolver::new(drafts, Some("garbage"));
        assert!(!broken_preset.has_preset());
        let resolved = broken_preset.resolve_local().await;
        assert_eq!(resolved.source, SnapshotSource::Default);
        assert_eq!(resolved.snapshot, default_snapshot());
    }

    #[tokio::test]
    async fn test_corrupt_draft_content_is_absent() {
        let (drafts, kv) = drafts();
        kv.set(CONTENT_KEY, "not json").await.unwrap();
        kv.set(TOUR_KEY, "[]").await.unwrap();

        let preset = sample("preset");
        let resolver = Resolver::new(drafts, Some(preset.to_token().as_str()));
        let resolved = resolver.resolve_local().await;

        assert_eq!(resolved.source, SnapshotSource::Preset);
    }

    #[tokio::test]
    async fn test_corrupt_draft_tour_uses_default_tour() {
        let (drafts, kv) = drafts();
        let draft = sample("draft");
        drafts.save_content(&draft.content).await.unwrap();
        kv.set(TOUR_KEY, "{oops").await.unwrap();

        let resolver = Resolver::new(drafts, None);
        let resolved = resolver.resolve_local().await;

        assert_eq!(resolved.source, SnapshotSource::Draft);
        assert_eq!(resolved.snapshot.content, draft.content);
        assert_eq!(resolved.snapshot.tour_dates, default_tour());
    }

    #[tokio::test]
    async fn test_missing_draft_tour_is_empty() {
        let (drafts, _) = drafts();
        let draft = sample("draft");
        drafts.save_content(&draft.content).await.unwrap();

        let resolver = Resolver::new(drafts, None);
        let resolved = resolver.resolve_local().await;

        assert_eq!(resolved.source, SnapshotSource::Draft);
        assert!(resolved.snapshot.tour_dates.is_empty());
    }

    #[tokio::test]
    async fn test_resolution_never_writes() {
        let (drafts, kv) = drafts();
        let resolver = Resolver::new(drafts, None);

        assert!(resolver.resolve_deployed(&sample("x").to_token()).is_some());
        resolver.resolve_local().await;
        resolver.resolve_fallback();

        assert!(kv.get(CONTENT_KEY).await.unwrap().is_none());
        assert!(kv.get(TOUR_KEY).await.unwrap().is_none());
    }
}
