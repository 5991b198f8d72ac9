//! Resource selection state machine.
//!
//! For each topic: shared index, then cache, then playlist discovery,
//! then video discovery, then selection, then finalize. Only Finalize
//! writes (cache + shared index), so aborting between topics never
//! leaves partial state. Upstream failures degrade: a failed search or
//! cache call is logged and the machine moves on with what it has.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use futures::future::join_all;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{DiscoveryError, Result};
use crate::normalize::{duration, query};
use crate::score::{playlist, video};
use crate::shared::SharedResourceIndex;
use crate::traits::cache::{CacheEntry, ResourceCache};
use crate::traits::matcher::TechMatcher;
use crate::traits::search::VideoSearch;
use crate::types::candidate::{DurationValue, PlaylistCandidate, VideoCandidate};
use crate::types::config::DiscoveryConfig;
use crate::types::resource::Resource;

/// Discovers and ranks one learning resource per topic.
pub struct ResourceSelector<S, M, C> {
    search: S,
    matcher: M,
    cache: C,
    shared: SharedResourceIndex,
    config: DiscoveryConfig,
}

impl<S, M, C> ResourceSelector<S, M, C>
where
    S: VideoSearch,
    M: TechMatcher,
    C: ResourceCache,
{
    /// Create a selector with default configuration.
    pub fn new(search: S, matcher: M, cache: C) -> Self {
        Self {
            search,
            matcher,
            cache,
            shared: SharedResourceIndex::new(),
            config: DiscoveryConfig::default(),
        }
    }

    /// Override the configuration.
    pub fn with_config(mut self, config: DiscoveryConfig) -> Self {
        self.config = config;
        self
    }

    /// The shared resource index.
    pub fn shared_index(&self) -> &SharedResourceIndex {
        &self.shared
    }

    /// Discover the best resource for a topic.
    ///
    /// `sibling_topics` is the full set of topics being discovered
    /// together; a winner covering several of them is registered as
    /// shared so the siblings skip their own searches. `is_advanced`
    /// is accepted for callers that classify topics but does not change
    /// the search strategy.
    pub async fn discover(
        &self,
        topic: &str,
        is_advanced: bool,
        sibling_topics: &[String],
    ) -> Result<Resource> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(DiscoveryError::EmptyTopic);
        }

        let normalized = query::normalize_topic(topic);
        let technology = query::technology_name(&normalized);
        debug!(topic = %normalized, technology = %technology, is_advanced, "discovering resource");

        // 1. Shared index
        if let Some(resource) = self.shared.lookup(&technology, &self.matcher).await {
            debug!(title = %resource.title, "shared index hit");
            return Ok((*resource).clone());
        }

        // 2. Cache
        match self.cache.get(&technology).await {
            Ok(Some(entry)) => {
                debug!(title = %entry.resource.title, "cache hit");
                return Ok(entry.resource);
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "cache lookup failed"),
        }

        let current_year = Utc::now().year();

        // 3. Playlist discovery
        let playlist_pick = self
            .discover_playlist(&normalized, &technology, current_year)
            .await;
        let exceptional = playlist_pick
            .as_ref()
            .is_some_and(|pick| pick.normalized >= self.config.exceptional_playlist_score);
        if exceptional {
            debug!("exceptional playlist, skipping video search");
        }

        // 4. Video discovery
        let video_pick = if exceptional {
            None
        } else {
            self.discover_video(&normalized, &technology, current_year)
                .await
        };

        // 5. Selection
        let winner = match (video_pick, playlist_pick) {
            (Some(v), Some(p)) => {
                let video_normalized = video::normalized(v.score);
                debug!(
                    video = video_normalized,
                    playlist = p.normalized,
                    "comparing video against playlist"
                );
                if v.score >= self.config.excellent_video_score
                    || video_normalized > p.normalized
                {
                    v.resource
                } else {
                    p.resource
                }
            }
            (Some(v), None) => v.resource,
            (None, Some(p)) => p.resource,
            (None, None) => {
                debug!(topic = %normalized, "no suitable resource, returning search link");
                return Ok(Resource::search_fallback(
                    &normalized,
                    &self.config.search_link_base,
                ));
            }
        };

        // 6. Finalize
        Ok(self.finalize(winner, &technology, sibling_topics).await)
    }

    /// Discover resources for a list of topics sequentially.
    ///
    /// Checks the token between topics and returns what was completed
    /// before cancellation.
    pub async fn discover_all(
        &self,
        topics: &[String],
        cancel: &CancellationToken,
    ) -> Result<Vec<Resource>> {
        let mut resources = Vec::with_capacity(topics.len());

        for (i, topic) in topics.iter().enumerate() {
            if cancel.is_cancelled() {
                debug!(completed = resources.len(), "discovery cancelled");
                break;
            }
            if i > 0 {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!(completed = resources.len(), "discovery cancelled");
                        break;
                    }
                    _ = tokio::time::sleep(self.config.topic_pause) => {}
                }
            }
            resources.push(self.discover(topic, false, topics).await?);
        }

        Ok(resources)
    }

    async fn discover_playlist(
        &self,
        topic: &str,
        technology: &str,
        current_year: i32,
    ) -> Option<PlaylistPick> {
        let search_query = query::playlist_query(topic);
        let candidates = match self
            .search
            .search_playlists(&search_query, self.config.playlist_candidates)
            .await
        {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(error = %e, query = %search_query, "playlist search failed");
                return None;
            }
        };

        let mut best: Option<(PlaylistCandidate, f32, f32)> = None;
        for candidate in candidates.into_iter().take(self.config.playlist_candidates) {
            if !self.matcher.is_relevant(&candidate.title, technology).await {
                debug!(title = %candidate.title, "playlist title not relevant");
                continue;
            }

            let rating = playlist::score_playlist(&candidate, technology, current_year);
            if !rating.passed {
                continue;
            }
            let normalized = rating.normalized();
            if normalized < self.config.acceptable_playlist_score {
                debug!(title = %candidate.title, normalized, "playlist below threshold");
                continue;
            }

            let better = best
                .as_ref()
                .is_none_or(|(_, _, best_normalized)| normalized > *best_normalized);
            if better {
                let exceptional = normalized >= self.config.exceptional_playlist_score;
                best = Some((candidate, rating.score, normalized));
                if exceptional {
                    break;
                }
            }
        }

        best.map(|(candidate, score, normalized)| PlaylistPick {
            resource: Resource::from_playlist(&candidate, score),
            normalized,
        })
    }

    async fn discover_video(
        &self,
        topic: &str,
        technology: &str,
        current_year: i32,
    ) -> Option<VideoPick> {
        let search_query = query::video_query(topic, technology);
        let candidates = match self
            .search
            .search_videos(&search_query, self.config.video_search_limit)
            .await
        {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(error = %e, query = %search_query, "video search failed");
                return None;
            }
        };

        let mut relevant = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if self.matcher.is_relevant(&candidate.title, technology).await {
                relevant.push(candidate);
            } else {
                debug!(title = %candidate.title, "video title not relevant");
            }
        }
        if relevant.is_empty() {
            return None;
        }

        let enriched = self.enrich_details(relevant).await;

        // Highest score wins; ties break to the longer video, then the
        // one seen first.
        let mut best: Option<(VideoCandidate, f32, u64)> = None;
        for candidate in enriched {
            let score = video::score_video(&candidate, true, current_year);
            if score <= 0.0 {
                continue;
            }
            let minutes = duration::estimate_minutes(&candidate.duration, &candidate.title);
            let replace = match &best {
                None => true,
                Some((_, best_score, best_minutes)) => {
                    score > *best_score || (score == *best_score && minutes > *best_minutes)
                }
            };
            if replace {
                best = Some((candidate, score, minutes));
            }
        }

        best.map(|(candidate, score, _)| VideoPick {
            resource: Resource::from_video(&candidate, score),
            score,
        })
    }

    /// Fetch full details for candidates in concurrent batches, pausing
    /// between batches. A failed fetch keeps the search-result fields.
    async fn enrich_details(&self, candidates: Vec<VideoCandidate>) -> Vec<VideoCandidate> {
        let mut enriched = Vec::with_capacity(candidates.len());
        let mut first_batch = true;

        for chunk in candidates.chunks(self.config.detail_batch_size.max(1)) {
            if !first_batch {
                tokio::time::sleep(self.config.batch_pause).await;
            }
            first_batch = false;

            let fetches = chunk.iter().cloned().map(|c| self.fetch_detail(c));
            enriched.extend(join_all(fetches).await);
        }

        enriched
    }

    async fn fetch_detail(&self, candidate: VideoCandidate) -> VideoCandidate {
        match self.search.video_details(&candidate.url).await {
            Ok(detail) => merge_detail(candidate, detail),
            Err(e) => {
                warn!(error = %e, url = %candidate.url, "detail fetch failed");
                candidate
            }
        }
    }

    /// The only writing step: extract technologies from the winning
    /// title, keep those matching sibling topics, and register/cache.
    async fn finalize(
        &self,
        mut resource: Resource,
        technology: &str,
        sibling_topics: &[String],
    ) -> Resource {
        let extracted = self.matcher.extract_technologies(&resource.title).await;

        let mut matching: Vec<String> = Vec::new();
        for tech in extracted {
            for sibling in sibling_topics {
                let sibling_tech = query::technology_name(&query::normalize_topic(sibling));
                if self.matcher.are_equivalent(&tech, &sibling_tech).await {
                    if !matching.iter().any(|m| m.eq_ignore_ascii_case(&tech)) {
                        matching.push(tech.clone());
                    }
                    break;
                }
            }
        }

        let keys: Vec<String> = if matching.len() >= 2 {
            resource.technologies = matching.clone();
            matching
        } else {
            vec![technology.to_string()]
        };

        self.shared
            .register(&keys, Arc::new(resource.clone()), &self.matcher)
            .await;

        for key in &keys {
            let entry = CacheEntry::new(key.clone(), resource.clone(), self.config.cache_ttl);
            if let Err(e) = self.cache.put(entry).await {
                warn!(error = %e, technology = %key, "cache write failed");
            }
        }

        resource
    }
}

struct PlaylistPick {
    resource: Resource,
    normalized: f32,
}

struct VideoPick {
    resource: Resource,
    score: f32,
}

fn merge_detail(base: VideoCandidate, detail: VideoCandidate) -> VideoCandidate {
    VideoCandidate {
        title: if detail.title.is_empty() {
            base.title
        } else {
            detail.title
        },
        url: base.url,
        channel: if detail.channel.is_empty() {
            base.channel
        } else {
            detail.channel
        },
        views: detail.views.or(base.views),
        likes: detail.likes.or(base.likes),
        publish_year: detail.publish_year.or(base.publish_year),
        duration: if detail.duration == DurationValue::Unknown {
            base.duration
        } else {
            detail.duration
        },
        thumbnail: detail.thumbnail.or(base.thumbnail),
    }
}
