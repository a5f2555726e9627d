//! Data models for squeeze.
//!
//! Defines the site content types (content blocks, tour dates), the
//! `Snapshot` that bundles them, and the token codec used for shareable
//! links. Also carries the small mapping helpers the page needs: video
//! embed normalization, social platform classification and the sections
//! projection.

mod codec;
mod content;
mod embed;
mod sections;
mod snapshot;
mod social;
mod tour;

pub use codec::*;
pub use content::*;
pub use embed::*;
pub use sections::*;
pub use snapshot::*;
pub use social::*;
pub use tour::*;

use chrono::Utc;

/// Generate a timestamp-derived id that is not already taken.
///
/// Starts from the current Unix time in milliseconds and bumps it until it
/// no longer collides with `taken`.
pub fn new_id<F>(taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut millis = Utc::now().timestamp_millis();
    loop {
        let candidate = millis.to_string();
        if !taken(&candidate) {
            return candidate;
        }
        millis += 1;
    }
}
