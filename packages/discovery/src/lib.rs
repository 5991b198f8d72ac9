//! Learning-resource discovery and ranking.
//!
//! Given a list of topics, the selector finds the best long-form video
//! or playlist for each: it searches a video platform, scores the
//! candidates on duration, engagement, and recency, and picks a winner
//! per topic. Results are cached with a TTL and indexed in-process so
//! topics covered by one multi-technology resource share a single
//! discovery. When nothing clears the bar the selector returns a
//! search-link fallback instead of a weak resource.
//!
//! Seams are traits: [`traits::VideoSearch`] for the upstream search
//! gateway, [`traits::TechMatcher`] for technology relevance and
//! equivalence (heuristic or LLM-backed), and [`traits::ResourceCache`]
//! for persistence.

pub mod error;
pub mod gateway;
pub mod matcher;
pub mod normalize;
pub mod score;
pub mod selector;
pub mod shared;
pub mod sources;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

pub use error::{CacheError, DiscoveryError, Result, SourceError};
pub use selector::ResourceSelector;
pub use shared::SharedResourceIndex;
pub use types::candidate::{DurationValue, PlaylistCandidate, VideoCandidate};
pub use types::config::DiscoveryConfig;
pub use types::resource::{Resource, ResourceKind};
