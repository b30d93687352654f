//! Journal data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    pub name: String,
    /// Where the journal JSON is fetched from
    pub url: String,
    /// Entries, once loaded
    pub entries: Option<Value>,
    /// Last time entries were replaced
    pub updated_at: Option<DateTime<Utc>>,
}

impl Journal {
    pub fn new(name: String, url: String) -> Self {
        Self {
            name,
            url,
            entries: None,
            updated_at: None,
        }
    }

    pub fn set_entries(&mut self, entries: Value) {
        self.entries = Some(entries);
        self.updated_at = Some(Utc::now());
    }

    pub fn is_loaded(&self) -> bool {
        self.entries.is_some()
    }

    /// Number of entries, if loaded
    pub fn entry_count(&self) -> Option<usize> {
        self.entries.as_ref().map(|entries| match entries {
            Value::Object(map) => map.len(),
            Value::Array(list) => list.len(),
            _ => 0,
        })
    }
}
