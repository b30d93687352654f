//! Site state container
//!
//! Wires the navigator, tabs, journals and fetcher together around one
//! sitemap and one host.

use std::sync::Arc;

use only_fetch::Fetcher;
use only_journals::JournalManager;
use only_router::{BrowserHistory, Document, RoutePath, Sitemap};
use only_tabs::TabManager;

use crate::config::Config;
use crate::history::HistoryBridge;
use crate::navigator::{Navigation, Navigator};
use crate::Result;

pub struct Site {
    config: Config,
    navigator: Arc<Navigator>,
    tabs: TabManager,
    journals: JournalManager,
    fetcher: Fetcher,
}

impl Site {
    pub fn new(
        config: Config,
        sitemap: Sitemap,
        document: Arc<dyn Document>,
        history: Arc<dyn BrowserHistory>,
    ) -> Result<Self> {
        let mut fetcher = Fetcher::new()?;
        if let Some(base) = &config.fetch_base_url {
            fetcher = fetcher.with_base(base.clone());
        }

        let tabs = TabManager::from_sitemap(&sitemap);
        let navigator = Navigator::new(&config, sitemap, document, history)
            .with_tabs(Arc::new(tabs.clone()));
        let journals = JournalManager::new(fetcher.clone());

        tracing::info!(app = %config.app_name, tabs = tabs.tabs().len(), "Site initialized");

        Ok(Self {
            config,
            navigator: Arc::new(navigator),
            tabs,
            journals,
            fetcher,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn navigator(&self) -> &Arc<Navigator> {
        &self.navigator
    }

    pub fn history_bridge(&self) -> HistoryBridge {
        HistoryBridge::new(Arc::clone(&self.navigator))
    }

    pub fn tabs(&self) -> &TabManager {
        &self.tabs
    }

    pub fn journals(&self) -> &JournalManager {
        &self.journals
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    pub async fn navigate(&self, path: impl Into<RoutePath>) -> Result<Navigation> {
        Ok(self.navigator.navigate(path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use only_fetch::FetchError;
    use only_router::{Handler, SitemapNode};
    use url::Url;

    fn site(config: Config, host: &MemoryHost) -> Site {
        let page = |html: &'static str, document: Arc<crate::host::MemoryDocument>| {
            SitemapNode::new().target(Handler::sync(move |_| {
                document.body().set_inner_html(html);
                Ok(())
            }))
        };
        let sitemap = Sitemap::new(
            SitemapNode::new()
                .redirect("home")
                .child("home", page("<h1>Home</h1>", host.document.clone()))
                .child("blog", page("<h1>Blog</h1>", host.document.clone())),
        )
        .unwrap();

        Site::new(config, sitemap, host.document.clone(), host.history.clone()).unwrap()
    }

    #[tokio::test]
    async fn test_navigation_selects_tab() {
        let host = MemoryHost::new();
        let site = site(Config::new("Demo"), &host);

        let nav = site.navigate("").await.unwrap();

        assert_eq!(nav.path, RoutePath::parse("home"));
        assert_eq!(site.tabs().selected().unwrap().name, "home");
        assert_eq!(host.document.title(), "Demo | home");
        assert_eq!(host.document.body().inner_html(), "<h1>Home</h1>");

        site.navigate("blog").await.unwrap();
        assert_eq!(site.tabs().selected().unwrap().name, "blog");
    }

    #[tokio::test]
    async fn test_history_bridge_replays() {
        let host = MemoryHost::new();
        let site = site(Config::default(), &host);
        site.navigate("home").await.unwrap();
        site.navigate("blog").await.unwrap();

        site.history_bridge().back(&host.history).await.unwrap();

        assert_eq!(site.tabs().selected().unwrap().name, "home");
        assert_eq!(host.history.len(), 2);
    }

    #[test]
    fn test_fetcher_uses_configured_base() {
        let host = MemoryHost::new();
        let config = Config {
            fetch_base_url: Some(Url::parse("http://localhost/site/").unwrap()),
            ..Config::default()
        };
        let site = site(config, &host);

        assert_eq!(
            site.fetcher().resolve_url("journal.json").unwrap().as_str(),
            "http://localhost/site/journal.json"
        );
        assert!(matches!(
            Fetcher::new().unwrap().resolve_url("journal.json"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_journals_share_site() {
        let host = MemoryHost::new();
        let site = site(Config::default(), &host);
        site.journals().create("posts", "posts.json");
        site.journals()
            .set_entries("posts", serde_json::json!([{ "title": "Routing" }]))
            .unwrap();

        let found = site
            .journals()
            .search("posts", "rout", &["title"], false)
            .unwrap();
        assert_eq!(found, vec!["0"]);
    }
}
