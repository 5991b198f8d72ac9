//! Core types for discovery.

pub mod candidate;
pub mod config;
pub mod resource;

pub use candidate::{DurationValue, PlaylistCandidate, VideoCandidate};
pub use config::DiscoveryConfig;
pub use resource::{Resource, ResourceKind, VideoSummary};
