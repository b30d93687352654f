//! Router error types

use thiserror::Error;

use crate::directive::Directive;

/// Failure to thread a path through the sitemap. Queued as a sentinel entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("404 page not found.")]
    NotFound,

    #[error("Too many redirects (limit {limit})")]
    TooManyRedirects { limit: usize },
}

/// Error handed to a fallback handler when a navigation fails
#[derive(Error, Debug)]
pub enum NavigationError {
    #[error(transparent)]
    Miss(#[from] ResolutionError),

    #[error(transparent)]
    Handler(anyhow::Error),
}

impl NavigationError {
    pub fn is_miss(&self) -> bool {
        matches!(self, NavigationError::Miss(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SitemapError {
    #[error("Invalid segment name {name:?} under /{parent}")]
    InvalidSegment { parent: String, name: String },

    #[error("Directive {directive} listed twice in the order of /{node}")]
    DuplicateDirective { node: String, directive: Directive },
}
