//! only.js Journals
//!
//! Named collections of JSON records fetched from a URL, with
//! substring search over selected record fields.

mod error;
mod journal;
mod manager;
mod search;

pub use error::JournalError;
pub use journal::Journal;
pub use manager::JournalManager;
pub use search::search_entries;

pub type Result<T> = std::result::Result<T, JournalError>;
