//! Configuration for the resource selector.

use std::time::Duration;

use crate::score;

/// Tunables for selection and the operational knobs around it.
///
/// Scoring constants (gates, bonus tiers) live with the scorers; this
/// config covers the thresholds the selector compares against and the
/// pacing of outbound calls.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// A video at or above this native score wins outright. Default: 4.5.
    pub excellent_video_score: f32,

    /// Minimum normalized (out of 10) playlist score to keep. Default: 6.0.
    pub acceptable_playlist_score: f32,

    /// Normalized playlist score that skips video search entirely.
    /// Default: 8.0.
    pub exceptional_playlist_score: f32,

    /// Maximum videos requested per search. Default: 8.
    pub video_search_limit: usize,

    /// Maximum playlist candidates evaluated per search. Default: 6.
    pub playlist_candidates: usize,

    /// Concurrent detail fetches per batch. Default: 5.
    pub detail_batch_size: usize,

    /// Pause between detail batches. Default: 500 ms.
    pub batch_pause: Duration,

    /// Pause between topics in multi-topic discovery. Default: 1 s.
    pub topic_pause: Duration,

    /// How long cached resources stay valid. Default: 7 days.
    pub cache_ttl: chrono::Duration,

    /// Base URL for the fallback search link.
    pub search_link_base: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            excellent_video_score: score::video::EXCELLENT_SCORE,
            acceptable_playlist_score: 6.0,
            exceptional_playlist_score: 8.0,
            video_search_limit: 8,
            playlist_candidates: 6,
            detail_batch_size: 5,
            batch_pause: Duration::from_millis(500),
            topic_pause: Duration::from_secs(1),
            cache_ttl: chrono::Duration::days(7),
            search_link_base: "https://www.youtube.com/results".to_string(),
        }
    }
}

impl DiscoveryConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cache TTL.
    pub fn with_cache_ttl(mut self, ttl: chrono::Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Set the playlist thresholds (normalized out of 10).
    pub fn with_playlist_thresholds(mut self, acceptable: f32, exceptional: f32) -> Self {
        self.acceptable_playlist_score = acceptable;
        self.exceptional_playlist_score = exceptional;
        self
    }

    /// Set the video search limit.
    pub fn with_video_search_limit(mut self, limit: usize) -> Self {
        self.video_search_limit = limit;
        self
    }

    /// Set the pause between detail batches.
    pub fn with_batch_pause(mut self, pause: Duration) -> Self {
        self.batch_pause = pause;
        self
    }

    /// Set the pause between topics.
    pub fn with_topic_pause(mut self, pause: Duration) -> Self {
        self.topic_pause = pause;
        self
    }

    /// Set the base URL used for fallback search links.
    pub fn with_search_link_base(mut self, base: impl Into<String>) -> Self {
        self.search_link_base = base.into();
        self
    }
}
