//! Error types for the discovery engine.
//!
//! Upstream failures (search gateway, cache, LLM) are typed per concern
//! but degrade inside the selector: they are logged and the pipeline
//! continues with whatever survived. Only contract violations surface
//! to callers as [`DiscoveryError`].

use thiserror::Error;

/// Result type for selector operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Result type for search source operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Result type for cache operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;

/// Contract errors surfaced by the selector.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The topic was empty or whitespace-only.
    #[error("topic must not be empty")]
    EmptyTopic,
}

/// Errors from a video search source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the search gateway
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Errors from a resource cache backend.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Underlying storage failure
    #[error("Storage error: {0}")]
    Storage(String),
}
