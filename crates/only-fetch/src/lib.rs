//! only.js Fetch Helpers
//!
//! - `Fetcher`: GET with 404 detection and an optional URL-keyed body cache
//! - Markup helpers that splice fetched HTML into host nodes

mod error;
mod fetcher;
mod fill;

pub use error::FetchError;
pub use fetcher::Fetcher;
pub use fill::{empty_node, inject_html};

pub type Result<T> = std::result::Result<T, FetchError>;
