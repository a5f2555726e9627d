//! Snapshot token codec.
//!
//! A token is `base64(percent_encode(json({"c": content, "t": tourDates})))`,
//! the same layout the browser build produced with
//! `btoa(encodeURIComponent(JSON.stringify(...)))`, so links published by
//! either side decode on the other.
//!
//! `pack` / `unpack` report failures as [`CodecError`]; `encode_snapshot` /
//! `decode_snapshot` are the boundary wrappers that log and convert failures
//! to an empty string or `None`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::{ContentBlock, Snapshot, TourDate};

/// Error types for the snapshot codec.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Empty token")]
    Empty,

    #[error("Invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Token is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct PackedRef<'a> {
    c: &'a [ContentBlock],
    t: &'a [TourDate],
}

#[derive(Deserialize)]
struct Packed {
    c: Vec<ContentBlock>,
    #[serde(default)]
    t: Vec<TourDate>,
}

/// Encode collections into a token.
pub fn pack(content: &[ContentBlock], tour_dates: &[TourDate]) -> Result<String, CodecError> {
    let json = serde_json::to_string(&PackedRef {
        c: content,
        t: tour_dates,
    })?;
    let escaped = urlencoding::encode(&json);
    Ok(STANDARD.encode(escaped.as_bytes()))
}

/// Decode a token into a snapshot.
pub fn unpack(token: &str) -> Result<Snapshot, CodecError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(CodecError::Empty);
    }

    let bytes = STANDARD.decode(token)?;
    let escaped = String::from_utf8(bytes)?;
    let json = urlencoding::decode(&escaped)?;
    let packed: Packed = serde_json::from_str(&json)?;

    Ok(Snapshot::new(packed.c, packed.t))
}

/// Encode collections into a token, or `""` if they cannot be encoded.
pub fn encode_snapshot(content: &[ContentBlock], tour_dates: &[TourDate]) -> String {
    match pack(content, tour_dates) {
        Ok(token) => token,
        Err(e) => {
            error!(error = %e, "Snapshot serialization failed");
            String::new()
        }
    }
}

/// Decode a token, or `None` if it is empty or malformed.
pub fn decode_snapshot(token: &str) -> Option<Snapshot> {
    if token.is_empty() {
        return None;
    }

    match unpack(token) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!(error = %e, token_len = token.len(), "Snapshot deserialization failed");
            None
        }
    }
}

impl Snapshot {
    /// Shareable token for this snapshot (`""` on failure).
    pub fn to_token(&self) -> String {
        encode_snapshot(&self.content, &self.tour_dates)
    }
}
