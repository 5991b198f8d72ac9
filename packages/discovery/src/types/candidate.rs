//! Search result candidates.
//!
//! Candidates are the normalized form of what the search gateway
//! returns. Duck-typed wire fields (channel as string-or-object,
//! counts as number-or-formatted-string) are resolved at the HTTP
//! boundary so these types stay plain.

use serde::{Deserialize, Serialize};

/// A duration as reported by the search gateway.
///
/// A bare number means minutes; seconds only ever arrive explicitly
/// typed. Text values cover clock formats like `"1:05:30"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationValue {
    /// Explicit seconds (e.g. a `duration_seconds` field)
    Seconds(u64),
    /// Bare minutes
    Minutes(u64),
    /// Clock-format or free-form text (`"1:05:30"`, `"90"`)
    Text(String),
    /// No duration reported
    #[default]
    Unknown,
}

/// A single video returned by search or detail lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoCandidate {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub publish_year: Option<i32>,
    #[serde(default)]
    pub duration: DurationValue,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl VideoCandidate {
    /// Create a candidate with just a title and URL.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the channel name.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Set the view count.
    pub fn with_views(mut self, views: u64) -> Self {
        self.views = Some(views);
        self
    }

    /// Set the like count.
    pub fn with_likes(mut self, likes: u64) -> Self {
        self.likes = Some(likes);
        self
    }

    /// Set the publish year.
    pub fn with_publish_year(mut self, year: i32) -> Self {
        self.publish_year = Some(year);
        self
    }

    /// Set the duration.
    pub fn with_duration(mut self, duration: DurationValue) -> Self {
        self.duration = duration;
        self
    }

    /// Set the thumbnail URL.
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }
}

/// A playlist returned by search.
///
/// `members` holds the sampled prefix the gateway includes with the
/// search result; `member_count` is the total size of the playlist,
/// which is usually larger than the sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistCandidate {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub member_count: usize,
    #[serde(default)]
    pub members: Vec<VideoCandidate>,
}

impl PlaylistCandidate {
    /// Create a playlist candidate.
    pub fn new(title: impl Into<String>, url: impl Into<String>, member_count: usize) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            member_count,
            ..Default::default()
        }
    }

    /// Set the channel name.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Add a sampled member video.
    pub fn with_member(mut self, member: VideoCandidate) -> Self {
        self.members.push(member);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_builder() {
        let video = VideoCandidate::new("Rust Course", "https://example.com/v/1")
            .with_channel("RustConf")
            .with_views(120_000)
            .with_duration(DurationValue::Seconds(5400));

        assert_eq!(video.title, "Rust Course");
        assert_eq!(video.views, Some(120_000));
        assert_eq!(video.likes, None);
        assert_eq!(video.duration, DurationValue::Seconds(5400));
    }

    #[test]
    fn test_duration_defaults_to_unknown() {
        let video = VideoCandidate::new("t", "u");
        assert_eq!(video.duration, DurationValue::Unknown);
    }

    #[test]
    fn test_playlist_builder() {
        let playlist = PlaylistCandidate::new("Course", "https://example.com/p/1", 12)
            .with_member(VideoCandidate::new("Part 1", "https://example.com/v/1"))
            .with_member(VideoCandidate::new("Part 2", "https://example.com/v/2"));

        assert_eq!(playlist.member_count, 12);
        assert_eq!(playlist.members.len(), 2);
    }
}
