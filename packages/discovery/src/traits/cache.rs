//! Resource cache seam.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CacheResult;
use crate::types::resource::Resource;

/// A cached resource with its TTL bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Lowercased technology name this entry is keyed under.
    pub technology: String,
    pub resource: Resource,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Create an entry valid for `ttl` from now.
    pub fn new(technology: impl Into<String>, resource: Resource, ttl: chrono::Duration) -> Self {
        let now = Utc::now();
        Self {
            technology: technology.into().to_lowercase(),
            resource,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Whether this entry has outlived its TTL.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// TTL cache of discovered resources, keyed by technology name.
#[async_trait]
pub trait ResourceCache: Send + Sync {
    /// Look up an unexpired entry. Expired entries are misses.
    async fn get(&self, technology: &str) -> CacheResult<Option<CacheEntry>>;

    /// Store an entry under its technology key.
    async fn put(&self, entry: CacheEntry) -> CacheResult<()>;

    /// Remove expired entries, returning how many were dropped.
    async fn evict_expired(&self) -> CacheResult<usize>;
}

#[async_trait]
impl<T: ResourceCache + ?Sized> ResourceCache for std::sync::Arc<T> {
    async fn get(&self, technology: &str) -> CacheResult<Option<CacheEntry>> {
        (**self).get(technology).await
    }

    async fn put(&self, entry: CacheEntry) -> CacheResult<()> {
        (**self).put(entry).await
    }

    async fn evict_expired(&self) -> CacheResult<usize> {
        (**self).evict_expired().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::resource::Resource;

    fn resource() -> Resource {
        Resource::search_fallback("rust", "https://www.youtube.com/results")
    }

    #[test]
    fn test_entry_lowercases_key() {
        let entry = CacheEntry::new("JavaScript", resource(), chrono::Duration::days(1));
        assert_eq!(entry.technology, "javascript");
    }

    #[test]
    fn test_entry_expiry() {
        let fresh = CacheEntry::new("rust", resource(), chrono::Duration::days(1));
        assert!(!fresh.is_expired());

        let stale = CacheEntry::new("rust", resource(), chrono::Duration::seconds(-1));
        assert!(stale.is_expired());
    }
}
