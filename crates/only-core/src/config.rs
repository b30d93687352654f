//! Site configuration

use serde::{Deserialize, Serialize};
use url::Url;

use only_router::{RoutePath, DEFAULT_MAX_REDIRECTS};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix of every page title
    pub app_name: String,
    /// Redirects followed before a navigation fails
    pub max_redirects: usize,
    /// Filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Base for relative fetch and journal URLs
    pub fetch_base_url: Option<Url>,
}

impl Config {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        if config.app_name.trim().is_empty() {
            return Err(CoreError::Config("app_name cannot be empty".to_string()));
        }
        Ok(config)
    }

    /// Default page title: `"<app_name> | <path>"`
    pub fn title_for(&self, path: &RoutePath) -> String {
        format!("{} | {}", self.app_name, path.join())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "only.js".to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            log_filter: "info".to_string(),
            fetch_base_url: None,
        }
    }
}
