//! In-memory host
//!
//! Headless implementations of the host contracts: a document with a title
//! and a body node, and a history stack with a back/forward cursor.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use only_router::{BrowserHistory, Document, HistoryState, HtmlNode};

#[derive(Debug, Default)]
pub struct MemoryNode {
    html: RwLock<String>,
}

impl HtmlNode for MemoryNode {
    fn inner_html(&self) -> String {
        self.html.read().clone()
    }

    fn set_inner_html(&self, html: &str) {
        *self.html.write() = html.to_string();
    }

    fn append_html(&self, html: &str) {
        self.html.write().push_str(html);
    }
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
    title: RwLock<String>,
    body: MemoryNode,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Document for MemoryDocument {
    fn title(&self) -> String {
        self.title.read().clone()
    }

    fn set_title(&self, title: &str) {
        *self.title.write() = title.to_string();
    }

    fn body(&self) -> &dyn HtmlNode {
        &self.body
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub state: HistoryState,
    pub title: String,
    pub url: String,
    pub pushed_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct HistoryStack {
    entries: Vec<HistoryRecord>,
    /// Index of the current entry
    cursor: Option<usize>,
}

#[derive(Debug, Default)]
pub struct MemoryHistory {
    stack: RwLock<HistoryStack>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<HistoryRecord> {
        self.stack.read().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.stack.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.read().entries.is_empty()
    }

    pub fn current(&self) -> Option<HistoryRecord> {
        let stack = self.stack.read();
        stack.cursor.map(|i| stack.entries[i].clone())
    }

    /// Move the cursor one entry back and return that entry's state
    pub fn back(&self) -> Option<HistoryState> {
        let mut stack = self.stack.write();
        let index = stack.cursor?.checked_sub(1)?;
        stack.cursor = Some(index);
        Some(stack.entries[index].state.clone())
    }

    /// Move the cursor one entry forward and return that entry's state
    pub fn forward(&self) -> Option<HistoryState> {
        let mut stack = self.stack.write();
        let index = stack.cursor? + 1;
        if index >= stack.entries.len() {
            return None;
        }
        stack.cursor = Some(index);
        Some(stack.entries[index].state.clone())
    }
}

impl BrowserHistory for MemoryHistory {
    fn push_state(&self, state: HistoryState, title: &str, url: &str) {
        let mut stack = self.stack.write();

        // Pushing drops every entry ahead of the cursor
        let keep = stack.cursor.map_or(0, |i| i + 1);
        stack.entries.truncate(keep);
        stack.entries.push(HistoryRecord {
            state,
            title: title.to_string(),
            url: url.to_string(),
            pushed_at: Utc::now(),
        });
        stack.cursor = Some(stack.entries.len() - 1);

        tracing::trace!(url = %url, "Pushed history entry");
    }
}

/// Document and history pair for running a site without a browser
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    pub document: Arc<MemoryDocument>,
    pub history: Arc<MemoryHistory>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }
}
