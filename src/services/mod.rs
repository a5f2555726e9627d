//! Service layer for squeeze.
//!
//! - Resolver (pick the snapshot from deploy token, draft, preset or default)
//! - SiteStore (in-memory editing with draft persistence)
//! - EditGate (edit-mode flag)
//! - Publisher (shareable links)
//! - Generation (band bio and poster via the generative API)

pub mod defaults;
mod edit_gate;
mod generation;
mod publisher;
pub mod resolver;
mod site_store;

pub use edit_gate::{EditGate, GateStatus, ERROR_FLASH};
pub use generation::{GenerationService, EMPTY_BIO_FALLBACK, FAILED_BIO_FALLBACK};
pub use publisher::{PublishReceipt, Publisher, PUBLISH_STEPS};
pub use resolver::{Resolved, Resolver, SnapshotSource};
pub use site_store::SiteStore;
