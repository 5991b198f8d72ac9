//! In-memory TTL cache for discovered resources.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::CacheResult;
use crate::traits::cache::{CacheEntry, ResourceCache};

/// In-memory resource cache.
///
/// Useful for testing and single-process deployments. Data is lost on
/// restart.
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }
}

#[async_trait]
impl ResourceCache for MemoryCache {
    async fn get(&self, technology: &str) -> CacheResult<Option<CacheEntry>> {
        let key = technology.to_lowercase();
        Ok(self
            .entries
            .read()
            .unwrap()
            .get(&key)
            .filter(|entry| !entry.is_expired())
            .cloned())
    }

    async fn put(&self, entry: CacheEntry) -> CacheResult<()> {
        self.entries
            .write()
            .unwrap()
            .insert(entry.technology.clone(), entry);
        Ok(())
    }

    async fn evict_expired(&self) -> CacheResult<usize> {
        let mut entries = self.entries.write().unwrap();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        Ok(before - entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::resource::Resource;

    fn entry(technology: &str, ttl: chrono::Duration) -> CacheEntry {
        let resource = Resource::search_fallback(technology, "https://www.youtube.com/results");
        CacheEntry::new(technology, resource, ttl)
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let cache = MemoryCache::new();
        cache.put(entry("rust", chrono::Duration::days(1))).await.unwrap();

        let hit = cache.get("rust").await.unwrap();
        assert!(hit.is_some());
        assert_eq!(hit.unwrap().technology, "rust");
    }

    #[tokio::test]
    async fn test_get_is_case_insensitive() {
        let cache = MemoryCache::new();
        cache.put(entry("JavaScript", chrono::Duration::days(1))).await.unwrap();

        assert!(cache.get("javascript").await.unwrap().is_some());
        assert!(cache.get("JAVASCRIPT").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_expired_entry_is_a_miss() {
        let cache = MemoryCache::new();
        cache.put(entry("rust", chrono::Duration::seconds(-1))).await.unwrap();

        assert!(cache.get("rust").await.unwrap().is_none());
        // Still physically present until evicted
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_evict_expired() {
        let cache = MemoryCache::new();
        cache.put(entry("rust", chrono::Duration::seconds(-1))).await.unwrap();
        cache.put(entry("python", chrono::Duration::days(1))).await.unwrap();

        let evicted = cache.evict_expired().await.unwrap();
        assert_eq!(evicted, 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("python").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let cache = MemoryCache::new();
        cache.put(entry("rust", chrono::Duration::days(1))).await.unwrap();
        cache.put(entry("rust", chrono::Duration::days(2))).await.unwrap();
        assert_eq!(cache.len(), 1);
    }
}
