//! squeeze - site content service for the Soul To Squeeze promo page
//!
//! Serves the band's page content, lets an editor change it behind a
//! light edit switch, keeps a local draft, and packs the whole site into
//! shareable `/deploy/<token>` links.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

pub use config::config;
pub use error::{Error, Result};
pub use state::AppState;
