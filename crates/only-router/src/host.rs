//! Host environment contracts
//!
//! The router never touches a page directly. Title changes, markup injection,
//! history entries and tab highlighting go through these traits.

use serde::{Deserialize, Serialize};

use crate::path::RoutePath;

/// A node whose markup can be read and replaced
pub trait HtmlNode: Send + Sync {
    fn inner_html(&self) -> String;

    fn set_inner_html(&self, html: &str);

    fn append_html(&self, html: &str) {
        let mut current = self.inner_html();
        current.push_str(html);
        self.set_inner_html(&current);
    }

    fn clear(&self) {
        self.set_inner_html("");
    }
}

pub trait Document: Send + Sync {
    fn title(&self) -> String;

    fn set_title(&self, title: &str);

    fn body(&self) -> &dyn HtmlNode;
}

/// State stored with each pushed history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub path: RoutePath,
}

impl HistoryState {
    pub fn new(path: RoutePath) -> Self {
        Self { path }
    }
}

pub trait BrowserHistory: Send + Sync {
    fn push_state(&self, state: HistoryState, title: &str, url: &str);
}

/// Collaborator told which path is being shown, so it can highlight the
/// matching top-level entry
pub trait TabSelector: Send + Sync {
    fn select(&self, path: &RoutePath);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_state_shape() {
        let state = HistoryState::new(RoutePath::parse("a/b"));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json, serde_json::json!({ "path": ["a", "b"] }));
    }
}
