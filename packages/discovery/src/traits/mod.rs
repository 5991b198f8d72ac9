//! Trait seams between the selector and its collaborators.

pub mod cache;
pub mod matcher;
pub mod search;

pub use cache::{CacheEntry, ResourceCache};
pub use matcher::TechMatcher;
pub use search::VideoSearch;
