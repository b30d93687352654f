//! Core error types

use thiserror::Error;

use only_router::RoutePath;

/// Failure that escapes a navigation: the fallback handler itself failed
#[derive(Error, Debug)]
pub enum NavigateError {
    #[error("Fallback handler failed for /{path}: {cause}")]
    Fallback { path: RoutePath, cause: anyhow::Error },
}

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("History state has no path")]
    MissingPath,

    #[error("Invalid history state: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Navigate(#[from] NavigateError),
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Sitemap error: {0}")]
    Sitemap(#[from] only_router::SitemapError),

    #[error("Tab error: {0}")]
    Tab(#[from] only_tabs::TabError),

    #[error("Journal error: {0}")]
    Journal(#[from] only_journals::JournalError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] only_fetch::FetchError),

    #[error("Navigation error: {0}")]
    Navigate(#[from] NavigateError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
