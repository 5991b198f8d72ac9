//! Video search source seam.

use async_trait::async_trait;

use crate::error::SourceResult;
use crate::types::candidate::{PlaylistCandidate, VideoCandidate};

/// A source of video and playlist search results.
///
/// Implementations normalize their wire formats into candidates; the
/// selector never sees raw gateway responses.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Search for videos matching a query.
    async fn search_videos(&self, query: &str, limit: usize) -> SourceResult<Vec<VideoCandidate>>;

    /// Search for playlists matching a query.
    async fn search_playlists(
        &self,
        query: &str,
        limit: usize,
    ) -> SourceResult<Vec<PlaylistCandidate>>;

    /// Fetch full details (duration, engagement) for a single video.
    async fn video_details(&self, url: &str) -> SourceResult<VideoCandidate>;
}

#[async_trait]
impl<T: VideoSearch + ?Sized> VideoSearch for std::sync::Arc<T> {
    async fn search_videos(&self, query: &str, limit: usize) -> SourceResult<Vec<VideoCandidate>> {
        (**self).search_videos(query, limit).await
    }

    async fn search_playlists(
        &self,
        query: &str,
        limit: usize,
    ) -> SourceResult<Vec<PlaylistCandidate>> {
        (**self).search_playlists(query, limit).await
    }

    async fn video_details(&self, url: &str) -> SourceResult<VideoCandidate> {
        (**self).video_details(url).await
    }
}
