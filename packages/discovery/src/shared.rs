//! Shared resource index.
//!
//! Maps lowercased technology names to resources that cover several
//! topics at once, so sibling topics reuse one discovery instead of
//! searching again. Lookups fall back to matcher equivalence when the
//! exact key misses; registration remaps existing equivalent keys so
//! the closure stays transitive.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::traits::matcher::TechMatcher;
use crate::types::resource::Resource;

/// In-memory index of resources shared across technologies.
#[derive(Default)]
pub struct SharedResourceIndex {
    entries: RwLock<HashMap<String, Arc<Resource>>>,
}

impl SharedResourceIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered technology keys.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }

    /// Registered technology keys.
    pub fn keys(&self) -> Vec<String> {
        self.entries.read().unwrap().keys().cloned().collect()
    }

    /// Find a resource for a technology: exact key first, then an
    /// equivalence scan over the registered keys.
    pub async fn lookup(
        &self,
        technology: &str,
        matcher: &dyn TechMatcher,
    ) -> Option<Arc<Resource>> {
        let key = technology.to_lowercase();

        // Collect under the lock, match outside it: the matcher may await.
        let (exact, existing_keys) = {
            let entries = self.entries.read().unwrap();
            (entries.get(&key).cloned(), entries.keys().cloned().collect::<Vec<_>>())
        };

        if exact.is_some() {
            return exact;
        }

        for existing in existing_keys {
            if matcher.are_equivalent(&key, &existing).await {
                debug!(technology = %key, matched = %existing, "shared index equivalence hit");
                return self.entries.read().unwrap().get(&existing).cloned();
            }
        }

        None
    }

    /// Register a resource under every given technology name.
    ///
    /// Any already-registered key equivalent to one of the new names is
    /// remapped to this resource, so a topic that resolved through an
    /// old name keeps resolving after the newer registration.
    pub async fn register(
        &self,
        technologies: &[String],
        resource: Arc<Resource>,
        matcher: &dyn TechMatcher,
    ) {
        let new_keys: Vec<String> = technologies.iter().map(|t| t.to_lowercase()).collect();
        if new_keys.is_empty() {
            return;
        }

        let existing_keys: Vec<String> = self.keys();
        let mut remapped: Vec<String> = Vec::new();
        for existing in &existing_keys {
            if new_keys.contains(existing) {
                continue;
            }
            for new_key in &new_keys {
                if matcher.are_equivalent(existing, new_key).await {
                    remapped.push(existing.clone());
                    break;
                }
            }
        }

        let mut entries = self.entries.write().unwrap();
        for key in new_keys {
            debug!(technology = %key, title = %resource.title, "registered shared resource");
            entries.insert(key, resource.clone());
        }
        for key in remapped {
            entries.insert(key, resource.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::heuristic::HeuristicMatcher;

    fn resource(title: &str) -> Arc<Resource> {
        let mut r = Resource::search_fallback(title, "https://www.youtube.com/results");
        r.title = title.to_string();
        Arc::new(r)
    }

    #[tokio::test]
    async fn test_exact_lookup() {
        let index = SharedResourceIndex::new();
        let matcher = HeuristicMatcher::new();
        index
            .register(&["javascript".into()], resource("JS Course"), &matcher)
            .await;

        let hit = index.lookup("JavaScript", &matcher).await;
        assert_eq!(hit.unwrap().title, "JS Course");
    }

    #[tokio::test]
    async fn test_equivalence_lookup() {
        let index = SharedResourceIndex::new();
        let matcher = HeuristicMatcher::new();
        index
            .register(&["javascript".into()], resource("JS Course"), &matcher)
            .await;

        // "js" is a synonym of "javascript"
        let hit = index.lookup("JS", &matcher).await;
        assert!(hit.is_some());
    }

    #[tokio::test]
    async fn test_miss() {
        let index = SharedResourceIndex::new();
        let matcher = HeuristicMatcher::new();
        index
            .register(&["javascript".into()], resource("JS Course"), &matcher)
            .await;

        assert!(index.lookup("python", &matcher).await.is_none());
    }

    #[tokio::test]
    async fn test_later_registration_remaps_equivalent_keys() {
        let index = SharedResourceIndex::new();
        let matcher = HeuristicMatcher::new();

        index
            .register(&["js".into()], resource("Old JS Course"), &matcher)
            .await;
        index
            .register(
                &["javascript".into(), "html".into()],
                resource("Web Dev Bootcamp"),
                &matcher,
            )
            .await;

        // The old "js" key must now resolve to the newer resource
        let hit = index.lookup("js", &matcher).await;
        assert_eq!(hit.unwrap().title, "Web Dev Bootcamp");
    }

    #[tokio::test]
    async fn test_multi_key_registration() {
        let index = SharedResourceIndex::new();
        let matcher = HeuristicMatcher::new();
        index
            .register(
                &["HTML".into(), "CSS".into()],
                resource("HTML & CSS Course"),
                &matcher,
            )
            .await;

        assert_eq!(index.len(), 2);
        assert!(index.lookup("html", &matcher).await.is_some());
        assert!(index.lookup("css", &matcher).await.is_some());
    }
}
