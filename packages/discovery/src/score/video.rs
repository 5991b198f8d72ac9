//! Single-video scoring.

use tracing::debug;

use crate::normalize::duration;
use crate::types::candidate::VideoCandidate;

/// Maximum video score.
pub const MAX_SCORE: f32 = 6.0;

/// Minimum duration in minutes for a video to be considered at all.
pub const MIN_MINUTES: u64 = 40;

/// Score at which a video wins selection outright.
pub const EXCELLENT_SCORE: f32 = 4.5;

/// Title markers for one-shot / complete-course videos.
const ONESHOT_MARKERS: &[&str] = &["oneshot", "one shot", "complete course", "full course"];

/// Score a video in [0, 6].
///
/// Hard gates return 0: the title must be relevant to the topic and the
/// resolved duration must be at least 40 minutes. Everything above the
/// gates is additive and capped at 6.
pub fn score_video(candidate: &VideoCandidate, relevant: bool, current_year: i32) -> f32 {
    if !relevant {
        return 0.0;
    }

    let minutes = duration::estimate_minutes(&candidate.duration, &candidate.title);
    if minutes < MIN_MINUTES {
        debug!(title = %candidate.title, minutes, "video below minimum duration");
        return 0.0;
    }

    let mut score = 0.0f32;

    if minutes >= 180 {
        score += 0.5;
    } else if minutes >= 90 {
        score += 0.3;
    }

    let title = candidate.title.to_lowercase();
    if ONESHOT_MARKERS.iter().any(|m| title.contains(m)) {
        score += 0.7;
    }

    let views = candidate.views.unwrap_or(0);
    let likes = candidate.likes.unwrap_or(0);

    if views >= 500_000 {
        score += 3.0;
    } else if views >= 250_000 {
        score += 2.0;
    } else if views >= 100_000 {
        score += 1.0;
    }

    if likes >= 5_000 {
        score += 1.5;
    } else if likes >= 2_000 {
        score += 1.0;
    } else if likes >= 1_000 {
        score += 0.5;
    }

    if views > 0 && likes > 0 {
        let ratio = likes as f64 / views as f64;
        if ratio >= 0.04 {
            score += 0.5;
        } else if ratio >= 0.02 {
            score += 0.25;
        }
    }

    if let Some(year) = candidate.publish_year {
        if year >= current_year {
            score += 1.0;
        } else if year >= current_year - 2 {
            score += 0.5;
        }
    }

    score.min(MAX_SCORE)
}

/// Normalize a video score onto the shared 10-point selection scale.
pub fn normalized(score: f32) -> f32 {
    score / MAX_SCORE * 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::candidate::DurationValue;

    const YEAR: i32 = 2026;

    fn long_video() -> VideoCandidate {
        VideoCandidate::new("Rust Tutorial", "u").with_duration(DurationValue::Minutes(200))
    }

    #[test]
    fn test_irrelevant_is_zero() {
        let video = long_video().with_views(1_000_000).with_likes(50_000);
        assert_eq!(score_video(&video, false, YEAR), 0.0);
    }

    #[test]
    fn test_short_video_is_zero() {
        let video = VideoCandidate::new("Rust Tutorial", "u")
            .with_duration(DurationValue::Minutes(39))
            .with_views(1_000_000);
        assert_eq!(score_video(&video, true, YEAR), 0.0);
    }

    #[test]
    fn test_forty_minutes_passes_gate() {
        let video = VideoCandidate::new("Rust Tutorial", "u")
            .with_duration(DurationValue::Minutes(40))
            .with_views(100_000);
        assert_eq!(score_video(&video, true, YEAR), 1.0);
    }

    #[test]
    fn test_duration_bonus_tiers() {
        let three_hours =
            VideoCandidate::new("Rust", "u").with_duration(DurationValue::Minutes(180));
        assert_eq!(score_video(&three_hours, true, YEAR), 0.5);

        let ninety =
            VideoCandidate::new("Rust", "u").with_duration(DurationValue::Minutes(90));
        assert!((score_video(&ninety, true, YEAR) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_oneshot_bonus() {
        let video = VideoCandidate::new("Rust Complete Course", "u")
            .with_duration(DurationValue::Minutes(60));
        assert!((score_video(&video, true, YEAR) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_engagement_and_recency() {
        let video = long_video()
            .with_views(600_000)
            .with_likes(30_000) // ratio 0.05
            .with_publish_year(YEAR);
        // 0.5 duration + 3.0 views + 1.5 likes + 0.5 ratio + 1.0 recency = 6.5, capped
        assert_eq!(score_video(&video, true, YEAR), MAX_SCORE);
    }

    #[test]
    fn test_recency_tiers() {
        let recent = long_video().with_publish_year(YEAR - 2);
        assert_eq!(score_video(&recent, true, YEAR), 1.0); // 0.5 duration + 0.5

        let old = long_video().with_publish_year(YEAR - 5);
        assert_eq!(score_video(&old, true, YEAR), 0.5); // duration only
    }

    #[test]
    fn test_missing_duration_uses_course_default() {
        // "full course" defaults to 90 minutes, clearing the gate
        let video = VideoCandidate::new("Python Full Course", "u").with_views(300_000);
        let score = score_video(&video, true, YEAR);
        // 0.3 duration + 0.7 oneshot + 2.0 views
        assert!((score - 3.0).abs() < 1e-6);

        // plain tutorials default to 25 minutes and fail the gate
        let plain = VideoCandidate::new("Python Variables", "u").with_views(300_000);
        assert_eq!(score_video(&plain, true, YEAR), 0.0);
    }

    #[test]
    fn test_normalized_scale() {
        assert_eq!(normalized(6.0), 10.0);
        assert_eq!(normalized(3.0), 5.0);
    }
}
