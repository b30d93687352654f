//! HTTP fetcher with a URL-keyed body cache
//!
//! Cached bodies live as long as the fetcher (and its clones). There is no
//! eviction; callers pick a cached read or a refetch per call.

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

use only_router::HtmlNode;

use crate::error::FetchError;
use crate::Result;

#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    /// Base for relative URLs
    base: Option<Url>,
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("only.js fetcher")
            .build()?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self {
            client,
            base: None,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn with_base(mut self, base: Url) -> Self {
        self.base = Some(base);
        self
    }

    pub fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    /// Resolve `url` against the base URL, if one is set
    pub fn resolve_url(&self, url: &str) -> Result<Url> {
        let parsed = match &self.base {
            Some(base) => base.join(url),
            None => Url::parse(url),
        };
        parsed.map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))
    }

    /// GET `url`, failing on 404 and other non-success statuses
    pub async fn fetch(&self, url: &str) -> Result<reqwest::Response> {
        let url = self.resolve_url(url)?;
        let resp = self.client.get(url.clone()).send().await?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(url = %url, "Fetch returned 404");
            return Err(FetchError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(resp)
    }

    /// Fetch the body of `url` as text. With `use_cache`, a previously
    /// fetched body is returned without a request.
    pub async fn fetch_text(&self, url: &str, use_cache: bool) -> Result<String> {
        let key = self.resolve_url(url)?.to_string();

        if use_cache {
            if let Some(body) = self.cache.read().get(&key) {
                tracing::trace!(url = %key, "Fetch cache hit");
                return Ok(body.clone());
            }
        }

        let body = self.fetch(&key).await?.text().await?;
        self.cache.write().insert(key, body.clone());
        Ok(body)
    }

    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        Ok(self.fetch(url).await?.json::<T>().await?)
    }

    /// Replace the content of `node` with the markup found at `url`
    pub async fn fetch_and_fill(&self, url: &str, node: &dyn HtmlNode, use_cache: bool) -> Result<()> {
        let html = self.fetch_text(url, use_cache).await?;
        node.set_inner_html(&html);
        Ok(())
    }

    /// Cached body for `url`, if any
    pub fn cached(&self, url: &str) -> Option<String> {
        let key = self.resolve_url(url).ok()?.to_string();
        self.cache.read().get(&key).cloned()
    }

    /// Store `body` as the cached body for `url`
    pub fn prime(&self, url: &str, body: impl Into<String>) -> Result<()> {
        let key = self.resolve_url(url)?.to_string();
        self.cache.write().insert(key, body.into());
        Ok(())
    }

    pub fn invalidate(&self, url: &str) {
        if let Ok(key) = self.resolve_url(url) {
            self.cache.write().remove(key.as_str());
        }
    }

    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }
}
