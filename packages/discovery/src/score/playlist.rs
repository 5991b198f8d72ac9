//! Playlist scoring.

use std::collections::HashMap;

use tracing::debug;

use crate::matcher::heuristic::HeuristicMatcher;
use crate::normalize::duration;
use crate::types::candidate::PlaylistCandidate;

/// Maximum playlist score.
pub const MAX_SCORE: f32 = 6.8;

/// Minimum total member count.
pub const MIN_MEMBERS: usize = 5;

/// Minimum estimated total duration in minutes.
pub const MIN_TOTAL_MINUTES: u64 = 90;

/// How many sampled members feed the engagement estimate.
pub const ENGAGEMENT_SAMPLE: usize = 8;

const STRUCTURED_FLOW_TERMS: &[&str] = &[
    "full series",
    "beginner to advanced",
    "complete",
    "step by step",
    "from scratch",
    "tutorial series",
    "crash course",
    "bootcamp",
];

const MODULE_TERMS: &[&str] = &["module", "part", "day", "session", "lesson", "chapter"];

const BONUS_LABELS: &[&str] = &["complete course", "one shot", "step-by-step", "from scratch"];

/// The outcome of rating a playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistRating {
    /// Native score in [0, 6.8]; 0 when the gates failed.
    pub score: f32,
    /// Whether the hard gates passed.
    pub passed: bool,
    /// Estimated total duration in minutes.
    pub estimated_minutes: u64,
}

impl PlaylistRating {
    fn failed(estimated_minutes: u64) -> Self {
        Self {
            score: 0.0,
            passed: false,
            estimated_minutes,
        }
    }

    /// This rating on the shared 10-point selection scale.
    pub fn normalized(&self) -> f32 {
        normalized(self.score)
    }
}

/// Normalize a playlist score onto the shared 10-point selection scale.
pub fn normalized(score: f32) -> f32 {
    score / MAX_SCORE * 10.0
}

/// Rate a playlist in [0, 6.8].
///
/// Hard gates (rating fails): the title must match the technology name
/// (substring/synonym), the playlist must have at least 5 members in
/// total, and the estimated total duration must reach 90 minutes.
/// Recency comes from the majority publish year of the sampled members;
/// engagement from a prefix of at most 8 samples.
pub fn score_playlist(
    playlist: &PlaylistCandidate,
    technology: &str,
    current_year: i32,
) -> PlaylistRating {
    if playlist.members.is_empty() {
        return PlaylistRating::failed(0);
    }

    if !HeuristicMatcher::title_relevant(&playlist.title, technology) {
        debug!(title = %playlist.title, technology, "playlist failed title relevance");
        return PlaylistRating::failed(0);
    }

    let member_count = if playlist.member_count > 0 {
        playlist.member_count
    } else {
        playlist.members.len()
    };
    if member_count < MIN_MEMBERS {
        debug!(title = %playlist.title, member_count, "playlist too small");
        return PlaylistRating::failed(0);
    }

    let estimated_minutes = duration::estimate_playlist_minutes(&playlist.members, member_count);
    if estimated_minutes < MIN_TOTAL_MINUTES {
        debug!(title = %playlist.title, estimated_minutes, "playlist too short");
        return PlaylistRating::failed(estimated_minutes);
    }

    let mut score = 0.0f32;

    // Recency: majority publish year of sampled members
    let years: Vec<i32> = playlist.members.iter().filter_map(|m| m.publish_year).collect();
    if let Some(majority) = majority_year(&years) {
        if majority >= current_year {
            score += 1.5;
        } else if majority >= current_year - 2 {
            score += 1.0;
        } else {
            score += 0.5;
        }
    }

    // Engagement from the sampled prefix
    let sample = &playlist.members[..playlist.members.len().min(ENGAGEMENT_SAMPLE)];
    let avg_views =
        sample.iter().map(|m| m.views.unwrap_or(0)).sum::<u64>() as f64 / sample.len() as f64;
    let avg_likes =
        sample.iter().map(|m| m.likes.unwrap_or(0)).sum::<u64>() as f64 / sample.len() as f64;

    if avg_views >= 100_000.0 {
        score += 2.0;
    } else if avg_views >= 50_000.0 {
        score += 1.5;
    } else if avg_views >= 20_000.0 {
        score += 1.0;
    }

    if avg_views > 0.0 {
        let ratio = avg_likes / avg_views;
        if ratio >= 0.04 {
            score += 0.5;
        } else if ratio >= 0.02 {
            score += 0.25;
        }
    }

    // Structure clarity from the title
    let title = playlist.title.to_lowercase();
    if STRUCTURED_FLOW_TERMS.iter().any(|t| title.contains(t)) {
        score += 0.5;
    }
    if MODULE_TERMS.iter().any(|t| title.contains(t)) {
        score += 0.5;
    }
    if BONUS_LABELS.iter().any(|t| title.contains(t)) {
        score += 0.3;
    }

    PlaylistRating {
        score: score.min(MAX_SCORE),
        passed: true,
        estimated_minutes,
    }
}

/// The most common year, ties broken toward the more recent one.
fn majority_year(years: &[i32]) -> Option<i32> {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for year in years {
        *counts.entry(*year).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by_key(|(year, count)| (*count, *year))
        .map(|(year, _)| year)
}
