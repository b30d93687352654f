//! Tab Manager
//!
//! Keeps the tab list and the current selection.

use parking_lot::RwLock;
use std::sync::Arc;

use only_router::{RoutePath, Sitemap, TabSelector};

use crate::error::TabError;
use crate::tab::Tab;
use crate::Result;

type TabCallback = Arc<dyn Fn(&Tab) + Send + Sync>;

#[derive(Default)]
pub struct TabManager {
    tabs: Arc<RwLock<Vec<Tab>>>,
    on_select: Arc<RwLock<Option<TabCallback>>>,
    on_deselect: Arc<RwLock<Option<TabCallback>>>,
}

impl TabManager {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            tabs: Arc::new(RwLock::new(names.into_iter().map(Tab::new).collect())),
            on_select: Arc::new(RwLock::new(None)),
            on_deselect: Arc::new(RwLock::new(None)),
        }
    }

    /// One tab per top-level page that has a target directive, in sitemap
    /// order
    pub fn from_sitemap(sitemap: &Sitemap) -> Self {
        let names = sitemap
            .root()
            .children()
            .filter(|(_, node)| node.has_target())
            .map(|(name, _)| name.to_string());
        let manager = Self::new(names);

        tracing::debug!(count = manager.tabs.read().len(), "Created tabs from sitemap");

        manager
    }

    /// Set the function invoked when a tab is selected
    pub fn set_on_select(&self, callback: impl Fn(&Tab) + Send + Sync + 'static) {
        *self.on_select.write() = Some(Arc::new(callback));
    }

    /// Set the function invoked when a tab is deselected
    pub fn set_on_deselect(&self, callback: impl Fn(&Tab) + Send + Sync + 'static) {
        *self.on_deselect.write() = Some(Arc::new(callback));
    }

    /// Hand every tab to `builder`, e.g. to create its widget
    pub fn build(&self, mut builder: impl FnMut(&Tab)) {
        for tab in self.tabs.read().iter() {
            builder(tab);
        }
    }

    pub fn tabs(&self) -> Vec<Tab> {
        self.tabs.read().clone()
    }

    pub fn get(&self, name: &str) -> Result<Tab> {
        self.tabs
            .read()
            .iter()
            .find(|t| t.name == name)
            .cloned()
            .ok_or_else(|| TabError::NotFound(name.to_string()))
    }

    pub fn selected(&self) -> Option<Tab> {
        self.tabs.read().iter().find(|t| t.selected).cloned()
    }

    /// Select the tab named by the first segment of `path`, deselecting any
    /// other. Paths outside every tab only deselect.
    pub fn select(&self, path: &RoutePath) {
        // (tab, selected) in list order
        let mut events = Vec::new();

        {
            let mut tabs = self.tabs.write();
            for tab in tabs.iter_mut() {
                if tab.matches(path) {
                    tab.selected = true;
                    events.push((tab.clone(), true));
                } else if tab.selected {
                    tab.selected = false;
                    events.push((tab.clone(), false));
                }
            }
        }

        // Callbacks run without the lock so they may query the manager
        let on_select = self.on_select.read().clone();
        let on_deselect = self.on_deselect.read().clone();

        for (tab, selected) in &events {
            if *selected {
                tracing::debug!(tab = %tab.name, "Tab selected");
                if let Some(callback) = &on_select {
                    callback(tab);
                }
            } else {
                tracing::debug!(tab = %tab.name, "Tab deselected");
                if let Some(callback) = &on_deselect {
                    callback(tab);
                }
            }
        }
    }
}

impl TabSelector for TabManager {
    fn select(&self, path: &RoutePath) {
        TabManager::select(self, path);
    }
}

impl Clone for TabManager {
    fn clone(&self) -> Self {
        Self {
            tabs: Arc::clone(&self.tabs),
            on_select: Arc::clone(&self.on_select),
            on_deselect: Arc::clone(&self.on_deselect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use only_router::{Handler, SitemapNode};
    use std::sync::Mutex;

    fn sitemap() -> Sitemap {
        let noop = || Handler::sync(|_| Ok(()));
        Sitemap::new(
            SitemapNode::new()
                .target(noop())
                .child("home", SitemapNode::new().target(noop()))
                .child("assets", SitemapNode::new().wildcard(noop()))
                .child(
                    "docs",
                    SitemapNode::new()
                        .target(noop())
                        .child("intro", SitemapNode::new().target(noop())),
                ),
        )
        .unwrap()
    }

    #[test]
    fn test_tabs_from_sitemap() {
        let manager = TabManager::from_sitemap(&sitemap());
        let names: Vec<String> = manager.tabs().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["home", "docs"]);
        assert!(manager.selected().is_none());
    }

    #[test]
    fn test_build_visits_every_tab() {
        let manager = TabManager::from_sitemap(&sitemap());
        let mut built = Vec::new();
        manager.build(|tab| built.push(tab.route().to_url()));
        assert_eq!(built, vec!["/home", "/docs"]);
    }

    #[test]
    fn test_select_and_deselect() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let on_select = Arc::clone(&events);
        let on_deselect = Arc::clone(&events);
        let manager = TabManager::from_sitemap(&sitemap());
        manager.set_on_select(move |tab| on_select.lock().unwrap().push(format!("+{}", tab.name)));
        manager.set_on_deselect(move |tab| on_deselect.lock().unwrap().push(format!("-{}", tab.name)));

        manager.select(&RoutePath::parse("docs/intro"));
        assert_eq!(manager.selected().unwrap().name, "docs");

        manager.select(&RoutePath::parse("home"));
        assert_eq!(manager.selected().unwrap().name, "home");
        assert!(!manager.get("docs").unwrap().selected);

        manager.select(&RoutePath::parse("elsewhere"));
        assert!(manager.selected().is_none());

        assert_eq!(*events.lock().unwrap(), vec!["+docs", "+home", "-docs", "-home"]);
    }

    #[test]
    fn test_deselect_runs_in_list_order() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let on_select = Arc::clone(&events);
        let on_deselect = Arc::clone(&events);
        let manager = TabManager::from_sitemap(&sitemap());
        manager.set_on_select(move |tab| on_select.lock().unwrap().push(format!("+{}", tab.name)));
        manager.set_on_deselect(move |tab| on_deselect.lock().unwrap().push(format!("-{}", tab.name)));

        manager.select(&RoutePath::parse("home"));
        events.lock().unwrap().clear();

        // "home" precedes "docs", so it is deselected first
        manager.select(&RoutePath::parse("docs"));
        assert_eq!(*events.lock().unwrap(), vec!["-home", "+docs"]);
    }

    #[test]
    fn test_select_through_trait() {
        let manager = TabManager::from_sitemap(&sitemap());
        let selector: &dyn TabSelector = &manager;
        selector.select(&RoutePath::parse("home"));
        assert_eq!(manager.selected().unwrap().name, "home");
    }

    #[test]
    fn test_unknown_tab() {
        let manager = TabManager::new(["a"]);
        assert!(matches!(manager.get("b"), Err(TabError::NotFound(_))));
    }
}
