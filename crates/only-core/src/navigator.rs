//! Navigator
//!
//! Drives one navigation end to end:
//! 1. resolve the path against the sitemap
//! 2. select the matching tab, set the title, push history if asked
//! 3. run the action queue one entry at a time
//! 4. on the first failure, hand the error to the fallback handler

use serde::Serialize;
use std::sync::Arc;

use only_router::{
    BrowserHistory, Document, FallbackHandler, HistoryState, NavigationError, QueueEntry,
    Resolution, Resolver, RoutePath, Sitemap, TabSelector,
};

use crate::config::Config;
use crate::error::NavigateError;

pub type TitleFormatter = Arc<dyn Fn(&RoutePath) -> String + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Every queued handler succeeded
    Completed,
    /// A handler or the resolution failed and the fallback handled it
    Recovered,
}

/// Summary of a finished navigation
#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    /// Path that was shown, after redirects
    pub path: RoutePath,
    pub redirects: usize,
    pub outcome: Outcome,
}

pub struct Navigator {
    resolver: Resolver,
    document: Arc<dyn Document>,
    history: Arc<dyn BrowserHistory>,
    tabs: Option<Arc<dyn TabSelector>>,
    title_formatter: TitleFormatter,
}

impl Navigator {
    pub fn new(
        config: &Config,
        sitemap: Sitemap,
        document: Arc<dyn Document>,
        history: Arc<dyn BrowserHistory>,
    ) -> Self {
        let resolver = Resolver::new(sitemap)
            .with_max_redirects(config.max_redirects)
            .with_default_fallback(default_not_found(Arc::clone(&document)));

        let title_config = config.clone();

        Self {
            resolver,
            document,
            history,
            tabs: None,
            title_formatter: Arc::new(move |path| title_config.title_for(path)),
        }
    }

    pub fn with_tabs(mut self, tabs: Arc<dyn TabSelector>) -> Self {
        self.tabs = Some(tabs);
        self
    }

    pub fn with_title_formatter(
        mut self,
        formatter: impl Fn(&RoutePath) -> String + Send + Sync + 'static,
    ) -> Self {
        self.title_formatter = Arc::new(formatter);
        self
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn resolve(&self, path: impl Into<RoutePath>) -> Resolution {
        self.resolver.resolve(&path.into())
    }

    /// Navigate and record the page in history
    pub async fn navigate(&self, path: impl Into<RoutePath>) -> Result<Navigation, NavigateError> {
        self.load(path, true).await
    }

    /// Navigate to `path`. History is pushed only when `record_history` is
    /// set; replays of existing entries pass `false`.
    pub async fn load(
        &self,
        path: impl Into<RoutePath>,
        record_history: bool,
    ) -> Result<Navigation, NavigateError> {
        let requested = path.into();
        let Resolution {
            queue,
            fallback,
            path,
            redirects,
        } = self.resolver.resolve(&requested);

        if let Some(tabs) = &self.tabs {
            tabs.select(&path);
        }

        let title = (self.title_formatter)(&path);
        self.document.set_title(&title);

        if record_history {
            self.history
                .push_state(HistoryState::new(path.clone()), &title, &path.to_url());
        }

        tracing::info!(
            requested = %requested,
            path = %path,
            redirects,
            actions = queue.len(),
            "Navigating"
        );

        let outcome = match run_queue(&queue).await {
            Ok(()) => Outcome::Completed,
            Err(err) => {
                tracing::warn!(path = %path, error = %err, "Navigation failed, running fallback");
                fallback
                    .call(path.clone(), err)
                    .await
                    .map_err(|cause| NavigateError::Fallback {
                        path: path.clone(),
                        cause,
                    })?;
                Outcome::Recovered
            }
        };

        Ok(Navigation {
            path,
            redirects,
            outcome,
        })
    }
}

/// Run queued entries in order, each after the previous one settles
async fn run_queue(queue: &[QueueEntry]) -> Result<(), NavigationError> {
    for entry in queue {
        match entry {
            QueueEntry::Action {
                directive,
                node,
                handler,
                remaining,
            } => {
                tracing::trace!(node = %node, %directive, "Running handler");
                handler
                    .call(remaining.clone())
                    .await
                    .map_err(NavigationError::Handler)?;
            }
            QueueEntry::Error(err) => return Err(err.clone().into()),
        }
    }
    Ok(())
}

/// Fallback used when no `.404` applies: the body shows the error message
pub fn default_not_found(document: Arc<dyn Document>) -> FallbackHandler {
    FallbackHandler::sync(move |_path, err| {
        document.body().set_inner_html(&err.to_string());
        Ok(())
    })
}
