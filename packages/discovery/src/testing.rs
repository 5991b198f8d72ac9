//! Test doubles for the search and matcher seams.
//!
//! Used by the integration tests and available to downstream crates
//! that want deterministic discovery in their own tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{SourceError, SourceResult};
use crate::traits::matcher::TechMatcher;
use crate::traits::search::VideoSearch;
use crate::types::candidate::{PlaylistCandidate, VideoCandidate};

/// Canned search source with per-endpoint call counters.
#[derive(Default)]
pub struct MockVideoSearch {
    videos: Vec<VideoCandidate>,
    playlists: Vec<PlaylistCandidate>,
    details: HashMap<String, VideoCandidate>,
    fail: bool,
    video_searches: AtomicUsize,
    playlist_searches: AtomicUsize,
    detail_fetches: AtomicUsize,
}

impl MockVideoSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a video to the canned search results.
    pub fn with_video(mut self, video: VideoCandidate) -> Self {
        self.videos.push(video);
        self
    }

    /// Add a playlist to the canned search results.
    pub fn with_playlist(mut self, playlist: PlaylistCandidate) -> Self {
        self.playlists.push(playlist);
        self
    }

    /// Register a detail response for a video URL.
    pub fn with_detail(mut self, url: impl Into<String>, detail: VideoCandidate) -> Self {
        self.details.insert(url.into(), detail);
        self
    }

    /// Make every call return a network error.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn video_searches(&self) -> usize {
        self.video_searches.load(Ordering::SeqCst)
    }

    pub fn playlist_searches(&self) -> usize {
        self.playlist_searches.load(Ordering::SeqCst)
    }

    pub fn detail_fetches(&self) -> usize {
        self.detail_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VideoSearch for MockVideoSearch {
    async fn search_videos(&self, _query: &str, limit: usize) -> SourceResult<Vec<VideoCandidate>> {
        self.video_searches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SourceError::Network("mock failure".into()));
        }
        Ok(self.videos.iter().take(limit).cloned().collect())
    }

    async fn search_playlists(
        &self,
        _query: &str,
        limit: usize,
    ) -> SourceResult<Vec<PlaylistCandidate>> {
        self.playlist_searches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SourceError::Network("mock failure".into()));
        }
        Ok(self.playlists.iter().take(limit).cloned().collect())
    }

    async fn video_details(&self, url: &str) -> SourceResult<VideoCandidate> {
        self.detail_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SourceError::Network("mock failure".into()));
        }
        self.details
            .get(url)
            .cloned()
            .ok_or_else(|| SourceError::Api {
                status: 404,
                message: format!("no detail for {url}"),
            })
    }
}

/// Matcher with fixed equivalence pairs and title verdicts.
///
/// Titles are relevant unless listed as irrelevant; names are equivalent
/// when equal ignoring case or listed as a pair (either order).
#[derive(Default)]
pub struct StaticMatcher {
    equivalent: Vec<(String, String)>,
    irrelevant_titles: Vec<String>,
    technologies: HashMap<String, Vec<String>>,
}

impl StaticMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare two technology names equivalent.
    pub fn with_equivalent(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.equivalent
            .push((a.into().to_lowercase(), b.into().to_lowercase()));
        self
    }

    /// Mark a title (exact match) as never relevant.
    pub fn with_irrelevant_title(mut self, title: impl Into<String>) -> Self {
        self.irrelevant_titles.push(title.into());
        self
    }

    /// Fix the technologies extracted from a title.
    pub fn with_technologies(mut self, title: impl Into<String>, techs: Vec<String>) -> Self {
        self.technologies.insert(title.into(), techs);
        self
    }
}

#[async_trait]
impl TechMatcher for StaticMatcher {
    async fn is_relevant(&self, title: &str, _technology: &str) -> bool {
        !self.irrelevant_titles.iter().any(|t| t == title)
    }

    async fn are_equivalent(&self, a: &str, b: &str) -> bool {
        if a.eq_ignore_ascii_case(b) {
            return true;
        }
        let (a, b) = (a.to_lowercase(), b.to_lowercase());
        self.equivalent
            .iter()
            .any(|(x, y)| (*x == a && *y == b) || (*x == b && *y == a))
    }

    async fn extract_technologies(&self, title: &str) -> Vec<String> {
        self.technologies.get(title).cloned().unwrap_or_default()
    }
}
