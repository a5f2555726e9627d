//! Error types for squeeze.
//!
//! Uses thiserror for ergonomic error definitions that integrate
//! with axum's response system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Edit gate
    #[error("Editing is locked")]
    EditingLocked,

    #[error("Confirmation required: {0}")]
    ConfirmationRequired(String),

    // Validation errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Publish failed: {0}")]
    Publish(String),

    // Generic errors
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 403
            Self::EditingLocked => StatusCode::FORBIDDEN,

            // 428
            Self::ConfirmationRequired(_) => StatusCode::PRECONDITION_REQUIRED,

            // 400
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,

            // 500
            Self::Publish(_) | Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EditingLocked => "EDITING_LOCKED",
            Self::ConfirmationRequired(_) => "CONFIRMATION_REQUIRED",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Publish(_) => "PUBLISH_FAILED",
            Self::Other(_) => "UNKNOWN_ERROR",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.to_string();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
