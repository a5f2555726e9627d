//! Middleware for squeeze.
//!
//! - `edit_mode` - rejects mutating requests while editing is locked

mod edit_mode;

pub use edit_mode::require_editing;
