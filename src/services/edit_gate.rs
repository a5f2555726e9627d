//! Edit-mode gate.
//!
//! A single "editing enabled" flag switched on by typing a shared literal.
//! This keeps casual visitors out of the editor UI; it is not
//! authentication and protects nothing.

use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// How long the error indicator stays raised after a wrong attempt.
pub const ERROR_FLASH: Duration = Duration::from_secs(2);

/// What a client sees of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GateStatus {
    pub editing: bool,
    pub error: bool,
}

#[derive(Debug, Default)]
struct GateState {
    editing: bool,
    error_until: Option<Instant>,
}

pub struct EditGate {
    passphrase: String,
    state: RwLock<GateState>,
}

impl EditGate {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: normalize(&passphrase.into()),
            state: RwLock::new(GateState::default()),
        }
    }

    /// Try to enable editing. Returns whether `attempt` matched.
    pub async fn unlock(&self, attempt: &str) -> bool {
        self.unlock_at(attempt, Instant::now()).await
    }

    pub async fn unlock_at(&self, attempt: &str, now: Instant) -> bool {
        let mut state = self.state.write().await;

        if normalize(attempt) == self.passphrase {
            state.editing = true;
            state.error_until = None;
            info!("Editing enabled");
            true
        } else {
            state.error_until = Some(now + ERROR_FLASH);
            debug!("Edit unlock attempt rejected");
            false
        }
    }

    pub async fn lock(&self) {
        let mut state = self.state.write().await;
        state.editing = false;
        info!("Editing disabled");
    }

    pub async fn is_editing(&self) -> bool {
        self.state.read().await.editing
    }

    pub async fn status(&self) -> GateStatus {
        self.status_at(Instant::now()).await
    }

    pub async fn status_at(&self, now: Instant) -> GateStatus {
        let state = self.state.read().await;
        GateStatus {
            editing: state.editing,
            error: state.error_until.map_or(false, |until| now < until),
        }
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
