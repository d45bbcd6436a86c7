//! Navigation capability: change the current view and carry transient state to it.

use serde_json::Value;
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Something that can move the console to another view.
pub trait Navigator: Send + Sync {
    fn push(&self, path: &str, state: Option<Value>);
}

/// One entry pushed onto a [`History`].
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub path: String,
    pub state: Option<Value>,
}

/// In-process navigation history.
#[derive(Debug, Default)]
pub struct History {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every entry pushed so far, oldest first.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn current(&self) -> Option<HistoryEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for History {
    fn push(&self, path: &str, state: Option<Value>) {
        info!(path, has_state = state.is_some(), "Navigate");
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(HistoryEntry {
                path: path.to_owned(),
                state,
            });
    }
}
