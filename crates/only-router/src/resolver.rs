//! Directive resolution
//!
//! Threads a path through the sitemap one segment at a time and collects the
//! handlers that fire along the way into an ordered action queue.
//!
//! Per node visited:
//! 1. pick up the node's `.404` as the current fallback
//! 2. stop with a `NotFound` entry if the node is missing, or is the target
//!    without `.*` or `..`
//! 3. evaluate every directive in the node's order; a redirecting `..`
//!    restarts resolution from the root, `.!` blocks further descent
//! 4. descend into the child named by the next segment

use crate::directive::Directive;
use crate::error::ResolutionError;
use crate::handler::{FallbackHandler, Handler};
use crate::path::RoutePath;
use crate::sitemap::{RouteTarget, Sitemap, SitemapNode};

pub const DEFAULT_MAX_REDIRECTS: usize = 16;

#[derive(Debug, Clone)]
pub enum QueueEntry {
    /// Run `handler(remaining)`
    Action {
        directive: Directive,
        /// Path of the sitemap node the directive belongs to
        node: RoutePath,
        handler: Handler,
        remaining: RoutePath,
    },
    /// Fail the chain at this point
    Error(ResolutionError),
}

impl QueueEntry {
    pub fn is_error(&self) -> bool {
        matches!(self, QueueEntry::Error(_))
    }

    pub fn handler(&self) -> Option<&Handler> {
        match self {
            QueueEntry::Action { handler, .. } => Some(handler),
            QueueEntry::Error(_) => None,
        }
    }
}

/// Result of resolving one path
#[derive(Debug, Clone)]
pub struct Resolution {
    pub queue: Vec<QueueEntry>,
    /// Most specific `.404` seen on the final walk, or the resolver default
    pub fallback: FallbackHandler,
    /// Path actually resolved; differs from the input only after redirects
    pub path: RoutePath,
    pub redirects: usize,
}

impl Resolution {
    /// Whether resolution ended in an error entry
    pub fn is_miss(&self) -> bool {
        self.queue.last().is_some_and(QueueEntry::is_error)
    }
}

enum Walk {
    Done {
        queue: Vec<QueueEntry>,
        fallback: FallbackHandler,
    },
    Redirect {
        to: RoutePath,
        fallback: FallbackHandler,
    },
}

#[derive(Debug, Clone)]
pub struct Resolver {
    sitemap: Option<Sitemap>,
    default_fallback: FallbackHandler,
    max_redirects: usize,
}

impl Resolver {
    pub fn new(sitemap: Sitemap) -> Self {
        Self {
            sitemap: Some(sitemap),
            default_fallback: FallbackHandler::ignore(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    /// Resolver without a sitemap; every path misses at the root
    pub fn unmapped() -> Self {
        Self {
            sitemap: None,
            default_fallback: FallbackHandler::ignore(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    pub fn with_default_fallback(mut self, fallback: FallbackHandler) -> Self {
        self.default_fallback = fallback;
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn sitemap(&self) -> Option<&Sitemap> {
        self.sitemap.as_ref()
    }

    pub fn default_fallback(&self) -> &FallbackHandler {
        &self.default_fallback
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    pub fn resolve(&self, path: &RoutePath) -> Resolution {
        let mut path = path.clone();
        let mut redirects = 0;

        loop {
            match self.walk(&path) {
                Walk::Done { queue, fallback } => {
                    return Resolution {
                        queue,
                        fallback,
                        path,
                        redirects,
                    };
                }
                Walk::Redirect { to, fallback } => {
                    if redirects == self.max_redirects {
                        tracing::warn!(
                            path = %path,
                            limit = self.max_redirects,
                            "Redirect limit reached"
                        );
                        return Resolution {
                            queue: vec![QueueEntry::Error(ResolutionError::TooManyRedirects {
                                limit: self.max_redirects,
                            })],
                            fallback,
                            path,
                            redirects,
                        };
                    }

                    tracing::debug!(from = %path, to = %to, "Following sitemap redirect");
                    redirects += 1;
                    path = to;
                }
            }
        }
    }

    fn walk(&self, path: &RoutePath) -> Walk {
        let mut queue = Vec::new();
        let mut fallback = self.default_fallback.clone();
        let mut node = self.sitemap.as_ref().map(Sitemap::root);
        let mut depth = 0;

        loop {
            let is_target = depth == path.len();

            if let Some(handler) = node.and_then(SitemapNode::not_found_handler) {
                fallback = handler.clone();
            }

            let current = match node {
                Some(n) if !is_target || n.wildcard_handler().is_some() || n.has_target() => n,
                _ => {
                    tracing::debug!(path = %path, depth, "No sitemap match");
                    queue.push(QueueEntry::Error(ResolutionError::NotFound));
                    return Walk::Done { queue, fallback };
                }
            };

            let node_path = path.take(depth);
            let remaining = path.skip(depth);
            let mut stop = false;

            for directive in current.directive_order() {
                if !directive.fires_at(is_target) {
                    continue;
                }

                let handler = match directive {
                    Directive::Wildcard => current.wildcard_handler(),
                    Directive::Target => match current.route_target() {
                        Some(RouteTarget::Redirect(to)) => {
                            return Walk::Redirect {
                                to: to.clone(),
                                fallback,
                            };
                        }
                        Some(RouteTarget::Handler(handler)) => Some(handler),
                        None => None,
                    },
                    Directive::Intermediate => current.intermediate_handler(),
                    Directive::Terminal => {
                        let handler = current.terminal_handler();
                        // Only descent stops; the rest of this node still runs
                        stop |= handler.is_some();
                        handler
                    }
                };

                if let Some(handler) = handler {
                    tracing::trace!(node = %node_path, %directive, "Queued handler");
                    queue.push(QueueEntry::Action {
                        directive,
                        node: node_path.clone(),
                        handler: handler.clone(),
                        remaining: remaining.clone(),
                    });
                }
            }

            if stop || is_target {
                return Walk::Done { queue, fallback };
            }

            node = current.get_child(&path.segments()[depth]);
            depth += 1;
        }
    }
}
