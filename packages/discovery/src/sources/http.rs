//! HTTP video search source.
//!
//! Talks to a search gateway exposing `/search/videos`,
//! `/search/playlists`, and `/videos/details`. The gateway is loose
//! about field types (channel as string or object, counts as numbers or
//! formatted strings, duration as seconds or text), so this boundary
//! normalizes everything into plain candidates.

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use crate::error::{SourceError, SourceResult};
use crate::normalize::metrics;
use crate::traits::search::VideoSearch;
use crate::types::candidate::{DurationValue, PlaylistCandidate, VideoCandidate};

/// Search source backed by a REST gateway.
#[derive(Clone)]
pub struct HttpVideoSearch {
    http_client: Client,
    base_url: String,
}

impl HttpVideoSearch {
    /// Create a source for the given gateway base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> SourceResult<T> {
        let response = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .query(params)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, path, "search gateway request failed");
                SourceError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = %status, path, "search gateway error");
            return Err(SourceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))
    }
}

#[async_trait]
impl VideoSearch for HttpVideoSearch {
    async fn search_videos(&self, query: &str, limit: usize) -> SourceResult<Vec<VideoCandidate>> {
        let limit = limit.to_string();
        let response: SearchVideosResponse = self
            .get_json("/search/videos", &[("query", query), ("limit", &limit)])
            .await?;

        let current_year = Utc::now().year();
        Ok(response
            .results
            .into_iter()
            .map(|raw| raw.into_candidate(current_year))
            .collect())
    }

    async fn search_playlists(
        &self,
        query: &str,
        limit: usize,
    ) -> SourceResult<Vec<PlaylistCandidate>> {
        let limit = limit.to_string();
        let response: SearchPlaylistsResponse = self
            .get_json("/search/playlists", &[("query", query), ("limit", &limit)])
            .await?;

        let current_year = Utc::now().year();
        Ok(response
            .results
            .into_iter()
            .map(|raw| raw.into_candidate(current_year))
            .collect())
    }

    async fn video_details(&self, url: &str) -> SourceResult<VideoCandidate> {
        let raw: RawVideo = self.get_json("/videos/details", &[("url", url)]).await?;
        Ok(raw.into_candidate(Utc::now().year()))
    }
}

// Wire types. Untagged enums absorb the gateway's duck typing.

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ChannelField {
    Name(String),
    Detailed { name: String },
}

impl ChannelField {
    fn into_name(self) -> String {
        match self {
            ChannelField::Name(name) => name,
            ChannelField::Detailed { name } => name,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CountField {
    Number(u64),
    Formatted(String),
}

impl CountField {
    fn as_count(&self) -> Option<u64> {
        match self {
            CountField::Number(n) => Some(*n),
            CountField::Formatted(s) => metrics::parse_count(s),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDuration {
    // A bare number means minutes; explicit seconds arrive separately.
    Minutes(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RawVideo {
    title: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    channel: Option<ChannelField>,
    #[serde(default)]
    views: Option<CountField>,
    #[serde(default)]
    views_formatted: Option<String>,
    #[serde(default)]
    likes: Option<CountField>,
    #[serde(default)]
    likes_formatted: Option<String>,
    #[serde(default)]
    publish_date: Option<String>,
    #[serde(default)]
    duration_seconds: Option<u64>,
    #[serde(default)]
    duration: Option<RawDuration>,
    #[serde(default)]
    thumbnail: Option<String>,
}

impl RawVideo {
    fn into_candidate(self, current_year: i32) -> VideoCandidate {
        let url = self
            .url
            .or_else(|| {
                self.id
                    .map(|id| format!("https://www.youtube.com/watch?v={id}"))
            })
            .unwrap_or_default();

        let views = self
            .views
            .and_then(|v| v.as_count())
            .or_else(|| self.views_formatted.as_deref().and_then(metrics::parse_count));
        let likes = self
            .likes
            .and_then(|l| l.as_count())
            .or_else(|| self.likes_formatted.as_deref().and_then(metrics::parse_count));

        let duration = match (self.duration_seconds, self.duration) {
            (Some(s), _) => DurationValue::Seconds(s),
            (None, Some(RawDuration::Minutes(m))) => DurationValue::Minutes(m),
            (None, Some(RawDuration::Text(t))) => DurationValue::Text(t),
            (None, None) => DurationValue::Unknown,
        };

        VideoCandidate {
            title: self.title,
            url,
            channel: self.channel.map(ChannelField::into_name).unwrap_or_default(),
            views,
            likes,
            publish_year: self
                .publish_date
                .and_then(|d| metrics::publish_year(&d, current_year)),
            duration,
            thumbnail: self.thumbnail,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPlaylist {
    title: String,
    url: String,
    #[serde(default)]
    channel: Option<ChannelField>,
    #[serde(default)]
    video_count: Option<CountField>,
    #[serde(default)]
    videos: Vec<RawVideo>,
}

impl RawPlaylist {
    fn into_candidate(self, current_year: i32) -> PlaylistCandidate {
        let sampled: Vec<VideoCandidate> = self
            .videos
            .into_iter()
            .map(|raw| raw.into_candidate(current_year))
            .collect();
        let member_count = self
            .video_count
            .and_then(|c| c.as_count())
            .map(|c| c as usize)
            .unwrap_or(sampled.len());

        PlaylistCandidate {
            title: self.title,
            url: self.url,
            channel: self.channel.map(ChannelField::into_name).unwrap_or_default(),
            member_count,
            members: sampled,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchVideosResponse {
    #[serde(default)]
    results: Vec<RawVideo>,
}

#[derive(Debug, Deserialize)]
struct SearchPlaylistsResponse {
    #[serde(default)]
    results: Vec<RawPlaylist>,
}
