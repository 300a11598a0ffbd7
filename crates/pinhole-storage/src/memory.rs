use async_trait::async_trait;
use parking_lot::Mutex;
use pinhole_core::{Entry, LinkId, Result, Store, StoreError};
use smol_str::SmolStr;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Maps {
    links: HashMap<SmolStr, String>,
    visits: HashMap<SmolStr, u64>,
}

/// In-process, non-persistent implementation of the [`Store`] trait.
///
/// Entries live until explicitly deleted or the process ends; no
/// expiration is enforced. One mutex covers both maps so that a
/// concurrent expansion never observes a url without its counter.
/// Cloning shares the underlying maps.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    maps: Arc<Mutex<Maps>>,
}

impl MemoryStore {
    /// Creates a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn add_link(&self, id: &LinkId, url: &str) -> Result<()> {
        let mut maps = self.maps.lock();

        if maps.links.contains_key(id.as_str()) {
            return Err(StoreError::AlreadyExists);
        }

        let key = SmolStr::new(id.as_str());
        maps.links.insert(key.clone(), url.to_owned());
        maps.visits.insert(key, 0);

        Ok(())
    }

    async fn expand_link(&self, id: &LinkId) -> Result<Entry> {
        let mut maps = self.maps.lock();

        let Some(url) = maps.links.get(id.as_str()).cloned() else {
            return Err(StoreError::NotFound);
        };

        let visits = maps
            .visits
            .entry(SmolStr::new(id.as_str()))
            .and_modify(|count| *count += 1)
            .or_insert(1);

        Ok(Entry {
            url,
            visits: *visits,
        })
    }

    async fn delete_link(&self, id: &LinkId) -> Result<()> {
        let mut maps = self.maps.lock();

        maps.links.remove(id.as_str());
        maps.visits.remove(id.as_str());

        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn id(s: &str) -> LinkId {
        LinkId::new(s)
    }

    #[tokio::test]
    async fn add_and_expand() {
        let store = MemoryStore::new();

        store.add_link(&id("abc123"), "https://example.com").await.unwrap();

        let entry = store.expand_link(&id("abc123")).await.unwrap();
        assert_eq!(entry.url, "https://example.com");
        assert_eq!(entry.visits, 1);

        let entry = store.expand_link(&id("abc123")).await.unwrap();
        assert_eq!(entry.visits, 2);
    }

    #[tokio::test]
    async fn add_conflict() {
        let store = MemoryStore::new();

        store.add_link(&id("abc123"), "https://example.com").await.unwrap();

        let err = store
            .add_link(&id("abc123"), "https://other.com")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists));

        // Losing the race must not clobber the stored url.
        let entry = store.expand_link(&id("abc123")).await.unwrap();
        assert_eq!(entry.url, "https://example.com");
    }

    #[tokio::test]
    async fn expand_nonexistent() {
        let store = MemoryStore::new();

        let err = store.expand_link(&id("nope")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::new();

        store.add_link(&id("abc123"), "https://example.com").await.unwrap();

        store.delete_link(&id("abc123")).await.unwrap();
        store.delete_link(&id("abc123")).await.unwrap();

        let err = store.expand_link(&id("abc123")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_both_halves() {
        let store = MemoryStore::new();

        store.add_link(&id("abc123"), "https://example.com").await.unwrap();
        store.expand_link(&id("abc123")).await.unwrap();
        store.delete_link(&id("abc123")).await.unwrap();

        // Re-adding starts the counter from zero again.
        store.add_link(&id("abc123"), "https://example.com").await.unwrap();
        let entry = store.expand_link(&id("abc123")).await.unwrap();
        assert_eq!(entry.visits, 1);
    }

    #[tokio::test]
    async fn ping_and_close() {
        let store = MemoryStore::new();

        store.ping().await.unwrap();
        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.add_link(&id("abc123"), "https://example.com").await.unwrap();

        let entry = other.expand_link(&id("abc123")).await.unwrap();
        assert_eq!(entry.url, "https://example.com");
    }

    #[tokio::test]
    async fn concurrent_expands_count_every_visit() {
        let store = MemoryStore::new();
        store.add_link(&id("abc123"), "https://example.com").await.unwrap();

        let mut handles = vec![];
        for _ in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.expand_link(&LinkId::new("abc123")).await.unwrap().visits
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            seen.insert(handle.await.unwrap());
        }

        // Every expansion observed a distinct count in 1..=50.
        assert_eq!(seen, (1..=50).collect::<HashSet<u64>>());
    }
}
