//! History bridge
//!
//! Back/forward navigation replays the path stored with a history entry
//! through the navigator without pushing a new entry.

use serde_json::Value;
use std::sync::Arc;

use only_router::HistoryState;

use crate::error::HistoryError;
use crate::host::MemoryHistory;
use crate::navigator::{Navigation, Navigator};

pub type Result<T> = std::result::Result<T, HistoryError>;

#[derive(Clone)]
pub struct HistoryBridge {
    navigator: Arc<Navigator>,
}

impl HistoryBridge {
    pub fn new(navigator: Arc<Navigator>) -> Self {
        Self { navigator }
    }

    /// Replay a history entry
    pub async fn pop_state(&self, state: &HistoryState) -> Result<Navigation> {
        tracing::debug!(path = %state.path, "Replaying history entry");
        Ok(self.navigator.load(state.path.clone(), false).await?)
    }

    /// Replay a raw history state object of the form `{"path": [...]}`
    pub async fn pop_state_value(&self, state: &Value) -> Result<Navigation> {
        if state.get("path").is_none() {
            return Err(HistoryError::MissingPath);
        }
        let state: HistoryState = serde_json::from_value(state.clone())?;
        self.pop_state(&state).await
    }

    /// Step back in `history` and replay the entry reached. Returns `None`
    /// at the oldest entry.
    pub async fn back(&self, history: &MemoryHistory) -> Result<Option<Navigation>> {
        match history.back() {
            Some(state) => Ok(Some(self.pop_state(&state).await?)),
            None => Ok(None),
        }
    }

    /// Step forward in `history` and replay the entry reached. Returns
    /// `None` at the newest entry.
    pub async fn forward(&self, history: &MemoryHistory) -> Result<Option<Navigation>> {
        match history.forward() {
            Some(state) => Ok(Some(self.pop_state(&state).await?)),
            None => Ok(None),
        }
    }
}
