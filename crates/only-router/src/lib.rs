//! only.js Router
//!
//! Sitemap-driven path resolution:
//! - Sitemap: nested route tree with `.`-prefixed directive slots
//! - Resolver: threads a path through the sitemap into an ordered action queue
//! - Host contracts: document, history and tab collaborators the navigator drives

mod directive;
mod error;
mod handler;
mod host;
mod path;
mod resolver;
mod sitemap;

pub use directive::{Directive, NOT_FOUND_KEY, ORDER_KEY};
pub use error::{NavigationError, ResolutionError, SitemapError};
pub use handler::{FallbackHandler, Handler, HandlerFuture};
pub use host::{BrowserHistory, Document, HistoryState, HtmlNode, TabSelector};
pub use path::{RoutePath, SEPARATOR};
pub use resolver::{QueueEntry, Resolution, Resolver, DEFAULT_MAX_REDIRECTS};
pub use sitemap::{RouteTarget, Sitemap, SitemapNode};

pub type Result<T> = std::result::Result<T, SitemapError>;
