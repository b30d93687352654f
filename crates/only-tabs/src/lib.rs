//! only.js Tabs
//!
//! One tab per top-level sitemap page that can be navigated to directly.
//! The navigator reports every path it shows; the tab named by the first
//! segment becomes selected and any other selected tab is deselected.

mod error;
mod manager;
mod tab;

pub use error::TabError;
pub use manager::TabManager;
pub use tab::Tab;

pub type Result<T> = std::result::Result<T, TabError>;
