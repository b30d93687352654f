//! Journal error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Journal not found: {0}")]
    NotFound(String),

    #[error("Journal {0} has not been loaded")]
    NotLoaded(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] only_fetch::FetchError),
}
