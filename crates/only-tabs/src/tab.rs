//! Tab data structure

use serde::{Deserialize, Serialize};

use only_router::RoutePath;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Top-level segment this tab stands for
    pub name: String,
    pub selected: bool,
}

impl Tab {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selected: false,
        }
    }

    /// Path a click on this tab navigates to
    pub fn route(&self) -> RoutePath {
        RoutePath::from_segments([self.name.as_str()])
    }

    /// Whether this tab stands for the top-level segment of `path`
    pub fn matches(&self, path: &RoutePath) -> bool {
        path.head() == Some(self.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tab() {
        let tab = Tab::new("docs");
        assert!(!tab.selected);
        assert_eq!(tab.route(), RoutePath::parse("docs"));
    }

    #[test]
    fn test_matches_head_segment() {
        let tab = Tab::new("docs");
        assert!(tab.matches(&RoutePath::parse("docs/intro")));
        assert!(!tab.matches(&RoutePath::parse("blog/docs")));
        assert!(!tab.matches(&RoutePath::root()));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(Tab::new("docs")).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "docs", "selected": false }));
    }
}
