//! Selected learning resources.

use serde::{Deserialize, Serialize};

use crate::normalize::duration;
use crate::types::candidate::{PlaylistCandidate, VideoCandidate};

/// What kind of resource was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Video,
    Playlist,
    /// Fallback sentinel pointing at a search results page
    SearchLink,
}

/// A member video carried by a playlist resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSummary {
    pub title: String,
    pub url: String,
    pub duration_minutes: Option<u64>,
}

/// The outcome of discovery for one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub kind: ResourceKind,
    pub title: String,
    pub url: String,
    pub channel: String,

    /// Native scorer output: [0, 6] for videos, [0, 6.8] for playlists,
    /// 0 for the fallback sentinel.
    pub score: f32,

    pub thumbnail: Option<String>,

    /// Sampled member videos (playlists only).
    #[serde(default)]
    pub members: Vec<VideoSummary>,

    /// Technologies this resource covers. Populated only when the
    /// resource was registered as shared across several topics.
    #[serde(default)]
    pub technologies: Vec<String>,

    /// True for the search-link sentinel returned when nothing survived
    /// selection.
    #[serde(default)]
    pub fallback: bool,
}

impl Resource {
    /// Build a resource from a winning video candidate.
    pub fn from_video(candidate: &VideoCandidate, score: f32) -> Self {
        Self {
            kind: ResourceKind::Video,
            title: candidate.title.clone(),
            url: candidate.url.clone(),
            channel: candidate.channel.clone(),
            score,
            thumbnail: candidate.thumbnail.clone(),
            members: Vec::new(),
            technologies: Vec::new(),
            fallback: false,
        }
    }

    /// Build a resource from a winning playlist candidate.
    pub fn from_playlist(candidate: &PlaylistCandidate, score: f32) -> Self {
        let members = candidate
            .members
            .iter()
            .map(|m| VideoSummary {
                title: m.title.clone(),
                url: m.url.clone(),
                duration_minutes: duration::minutes(&m.duration),
            })
            .collect();

        Self {
            kind: ResourceKind::Playlist,
            title: candidate.title.clone(),
            url: candidate.url.clone(),
            channel: candidate.channel.clone(),
            score,
            thumbnail: candidate.members.first().and_then(|m| m.thumbnail.clone()),
            members,
            technologies: Vec::new(),
            fallback: false,
        }
    }

    /// Build the fallback sentinel: a search-results link for the topic.
    ///
    /// Returned when neither a playlist nor a video survived selection,
    /// so callers always get something clickable.
    pub fn search_fallback(topic: &str, search_base: &str) -> Self {
        let query: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("search_query", topic)
            .finish();

        Self {
            kind: ResourceKind::SearchLink,
            title: format!("Search results for {topic}"),
            url: format!("{search_base}?{query}"),
            channel: String::new(),
            score: 0.0,
            thumbnail: None,
            members: Vec::new(),
            technologies: Vec::new(),
            fallback: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::candidate::DurationValue;

    #[test]
    fn test_from_video() {
        let candidate = VideoCandidate::new("Rust Course", "https://example.com/v/1")
            .with_channel("RustConf")
            .with_thumbnail("https://example.com/t.jpg");
        let resource = Resource::from_video(&candidate, 4.2);

        assert_eq!(resource.kind, ResourceKind::Video);
        assert_eq!(resource.score, 4.2);
        assert_eq!(resource.channel, "RustConf");
        assert!(!resource.fallback);
        assert!(resource.members.is_empty());
    }

    #[test]
    fn test_from_playlist_carries_members() {
        let playlist = PlaylistCandidate::new("Rust Series", "https://example.com/p/1", 10)
            .with_member(
                VideoCandidate::new("Part 1", "https://example.com/v/1")
                    .with_duration(DurationValue::Text("45:00".into())),
            )
            .with_member(VideoCandidate::new("Part 2", "https://example.com/v/2"));

        let resource = Resource::from_playlist(&playlist, 4.5);

        assert_eq!(resource.kind, ResourceKind::Playlist);
        assert_eq!(resource.members.len(), 2);
        assert_eq!(resource.members[0].duration_minutes, Some(45));
        assert_eq!(resource.members[1].duration_minutes, None);
    }

    #[test]
    fn test_search_fallback_encodes_topic() {
        let resource = Resource::search_fallback("C++ Basics", "https://www.youtube.com/results");

        assert_eq!(resource.kind, ResourceKind::SearchLink);
        assert!(resource.fallback);
        assert_eq!(resource.score, 0.0);
        assert!(resource.url.starts_with("https://www.youtube.com/results?"));
        assert!(resource.url.contains("C%2B%2B+Basics"));
    }
}
