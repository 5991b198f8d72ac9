//! Technology matching seam.

use async_trait::async_trait;

/// Relevance, equivalence, and extraction over technology names.
///
/// Infallible by contract: implementations degrade internally (an
/// LLM-backed matcher falls back to heuristics) rather than surfacing
/// errors to the selector.
#[async_trait]
pub trait TechMatcher: Send + Sync {
    /// Is this title about the given technology?
    async fn is_relevant(&self, title: &str, technology: &str) -> bool;

    /// Do these two names refer to the same technology
    /// (e.g. "JS" and "JavaScript")?
    async fn are_equivalent(&self, a: &str, b: &str) -> bool;

    /// Extract the technology names a title covers.
    async fn extract_technologies(&self, title: &str) -> Vec<String>;
}

#[async_trait]
impl<T: TechMatcher + ?Sized> TechMatcher for std::sync::Arc<T> {
    async fn is_relevant(&self, title: &str, technology: &str) -> bool {
        (**self).is_relevant(title, technology).await
    }

    async fn are_equivalent(&self, a: &str, b: &str) -> bool {
        (**self).are_equivalent(a, b).await
    }

    async fn extract_technologies(&self, title: &str) -> Vec<String> {
        (**self).extract_technologies(title).await
    }
}
