//! Journal manager

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

use only_fetch::Fetcher;

use crate::error::JournalError;
use crate::journal::Journal;
use crate::search::search_entries;
use crate::Result;

pub struct JournalManager {
    journals: Arc<RwLock<IndexMap<String, Journal>>>,
    fetcher: Fetcher,
}

impl JournalManager {
    pub fn new(fetcher: Fetcher) -> Self {
        Self {
            journals: Arc::new(RwLock::new(IndexMap::new())),
            fetcher,
        }
    }

    /// Register a journal; replaces any journal with the same name
    pub fn create(&self, name: impl Into<String>, url: impl Into<String>) -> Journal {
        let journal = Journal::new(name.into(), url.into());
        self.journals
            .write()
            .insert(journal.name.clone(), journal.clone());

        tracing::info!(journal = %journal.name, url = %journal.url, "Created journal");

        journal
    }

    pub fn get(&self, name: &str) -> Result<Journal> {
        self.journals
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| JournalError::NotFound(name.to_string()))
    }

    pub fn names(&self) -> Vec<String> {
        self.journals.read().keys().cloned().collect()
    }

    /// Fetch fresh entries from the journal URL
    pub async fn update(&self, name: &str) -> Result<()> {
        let url = self.get(name)?.url;
        let entries: Value = self.fetcher.fetch_json(&url).await?;
        self.set_entries(name, entries)?;

        tracing::info!(journal = %name, "Updated journal");

        Ok(())
    }

    pub fn set_entries(&self, name: &str, entries: Value) -> Result<()> {
        let mut journals = self.journals.write();
        let journal = journals
            .get_mut(name)
            .ok_or_else(|| JournalError::NotFound(name.to_string()))?;
        journal.set_entries(entries);
        Ok(())
    }

    /// Keys of the entries in `name` whose `fields` contain `term`
    pub fn search(
        &self,
        name: &str,
        term: &str,
        fields: &[&str],
        case_sensitive: bool,
    ) -> Result<Vec<String>> {
        let journals = self.journals.read();
        let journal = journals
            .get(name)
            .ok_or_else(|| JournalError::NotFound(name.to_string()))?;
        let entries = journal
            .entries
            .as_ref()
            .ok_or_else(|| JournalError::NotLoaded(name.to_string()))?;

        let results = search_entries(entries, term, fields, case_sensitive);
        tracing::debug!(journal = %name, term = %term, results = results.len(), "Searched journal");

        Ok(results)
    }
}

impl Clone for JournalManager {
    fn clone(&self) -> Self {
        Self {
            journals: Arc::clone(&self.journals),
            fetcher: self.fetcher.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manager() -> JournalManager {
        JournalManager::new(Fetcher::new().unwrap())
    }

    #[test]
    fn test_journal_manager() {
        let manager = manager();
        manager.create("blog", "http://localhost/blog.json");
        manager.create("notes", "http://localhost/notes.json");
        assert_eq!(manager.names(), vec!["blog", "notes"]);

        manager
            .set_entries(
                "blog",
                json!({
                    "2024/hello": { "title": "Hello World", "tags": ["intro"] },
                    "2024/routing": { "title": "Sitemaps", "tags": ["router", "Intro"] }
                }),
            )
            .unwrap();

        let found = manager.search("blog", "intro", &["tags"], false).unwrap();
        assert_eq!(found, vec!["2024/hello", "2024/routing"]);

        let found = manager.search("blog", "Intro", &["tags"], true).unwrap();
        assert_eq!(found, vec!["2024/routing"]);
    }

    #[test]
    fn test_search_errors() {
        let manager = manager();
        assert!(matches!(
            manager.search("missing", "x", &["title"], false),
            Err(JournalError::NotFound(_))
        ));

        manager.create("blog", "http://localhost/blog.json");
        assert!(matches!(
            manager.search("blog", "x", &["title"], false),
            Err(JournalError::NotLoaded(_))
        ));
    }

    #[tokio::test]
    async fn test_update_unknown_journal() {
        let manager = manager();
        assert!(matches!(
            manager.update("missing").await,
            Err(JournalError::NotFound(_))
        ));
    }
}
