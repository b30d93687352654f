//! only.js Core
//!
//! Coordination layer: configuration, the navigator that runs resolved
//! action queues, the history bridge for back/forward replay, and an
//! in-memory host for running a site headless.

mod config;
mod error;
mod history;
mod host;
mod navigator;
mod site;

pub use config::Config;
pub use error::{CoreError, HistoryError, NavigateError};
pub use history::HistoryBridge;
pub use host::{HistoryRecord, MemoryDocument, MemoryHistory, MemoryHost, MemoryNode};
pub use navigator::{default_not_found, Navigation, Navigator, Outcome, TitleFormatter};
pub use site::Site;

// Re-export the router and collaborator crates
pub use only_fetch::{empty_node, inject_html, FetchError, Fetcher};
pub use only_journals::{search_entries, Journal, JournalError, JournalManager};
pub use only_router::{
    BrowserHistory, Directive, Document, FallbackHandler, Handler, HistoryState, HtmlNode,
    NavigationError, QueueEntry, Resolution, ResolutionError, Resolver, RoutePath, RouteTarget,
    Sitemap, SitemapError, SitemapNode, TabSelector,
};
pub use only_tabs::{Tab, TabError, TabManager};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging. `RUST_LOG` takes precedence over the configured
/// filter.
pub fn init_logging(config: &Config) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    fmt().with_env_filter(filter).with_target(true).init();
}
