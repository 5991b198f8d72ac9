//! Duration normalization.
//!
//! Everything downstream works in whole minutes. Seconds only convert
//! when the value is explicitly seconds-typed; a bare number already
//! means minutes.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::candidate::{DurationValue, VideoCandidate};

/// Default minutes assumed for a full course with no duration data.
pub const DEFAULT_COURSE_MINUTES: u64 = 90;

/// Default minutes assumed for a regular tutorial with no duration data.
pub const DEFAULT_TUTORIAL_MINUTES: u64 = 25;

static HOURS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(?:hours|hour|hrs|hr)").expect("valid regex"));
static MINUTES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(?:minutes|minute|mins|min)").expect("valid regex"));

/// Resolve an explicit duration value to minutes.
///
/// Returns `None` when the value is unknown or unparseable.
pub fn minutes(value: &DurationValue) -> Option<u64> {
    match value {
        DurationValue::Seconds(s) => Some(s / 60),
        DurationValue::Minutes(m) => Some(*m),
        DurationValue::Text(t) => parse_text(t),
        DurationValue::Unknown => None,
    }
}

/// Parse a textual duration: `"1:05:30"` is 65 minutes, `"15:30"` is 15,
/// a bare numeric string is already minutes.
pub fn parse_text(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.contains(':') {
        let parts: Vec<u64> = raw
            .split(':')
            .map(|p| p.trim().parse().unwrap_or(0))
            .collect();
        return match parts.len() {
            3 => Some(parts[0] * 60 + parts[1]),
            2 => Some(parts[0]),
            _ => None,
        };
    }

    raw.parse().ok()
}

/// Estimate minutes from patterns like "5 hours" or "45 min" in a title.
pub fn from_title(title: &str) -> Option<u64> {
    let hours = HOURS_RE
        .captures(title)
        .and_then(|c| c[1].parse::<u64>().ok());
    let mins = MINUTES_RE
        .captures(title)
        .and_then(|c| c[1].parse::<u64>().ok());

    match (hours, mins) {
        (None, None) => None,
        (h, m) => Some(h.unwrap_or(0) * 60 + m.unwrap_or(0)),
    }
}

/// Default duration when nothing else resolves: full courses get 90
/// minutes, regular tutorials 25.
pub fn default_minutes(title: &str) -> u64 {
    let title = title.to_lowercase();
    let is_course = title.contains("complete course")
        || title.contains("full course")
        || title.contains("oneshot")
        || title.contains("one shot")
        || (title.contains("complete") && title.contains("tutorial"));

    if is_course {
        DEFAULT_COURSE_MINUTES
    } else {
        DEFAULT_TUTORIAL_MINUTES
    }
}

/// Best-effort minutes for a video: explicit value, then title patterns,
/// then keyword defaults. Never returns 0.
pub fn estimate_minutes(value: &DurationValue, title: &str) -> u64 {
    minutes(value)
        .filter(|m| *m > 0)
        .or_else(|| from_title(title).filter(|m| *m > 0))
        .unwrap_or_else(|| default_minutes(title))
}

/// Estimate a playlist's total minutes: average of the sampled members
/// with explicit durations, times the total member count.
///
/// Samples without any duration data yield 0; title defaults apply to
/// standalone videos only.
pub fn estimate_playlist_minutes(members: &[VideoCandidate], total_count: usize) -> u64 {
    let known: Vec<u64> = members
        .iter()
        .filter_map(|m| minutes(&m.duration).filter(|d| *d > 0))
        .collect();

    if known.is_empty() {
        return 0;
    }

    let avg = known.iter().sum::<u64>() as f64 / known.len() as f64;
    (avg * total_count as f64).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clock_format() {
        assert_eq!(parse_text("1:05:30"), Some(65));
        assert_eq!(parse_text("15:30"), Some(15));
        assert_eq!(parse_text("0:45:00"), Some(45));
    }

    #[test]
    fn test_bare_number_is_minutes() {
        assert_eq!(minutes(&DurationValue::Minutes(90)), Some(90));
        assert_eq!(parse_text("90"), Some(90));
    }

    #[test]
    fn test_seconds_convert_only_when_typed() {
        assert_eq!(minutes(&DurationValue::Seconds(5400)), Some(90));
        assert_eq!(minutes(&DurationValue::Seconds(59)), Some(0));
    }

    #[test]
    fn test_unparseable_text() {
        assert_eq!(parse_text("soon"), None);
        assert_eq!(parse_text(""), None);
        assert_eq!(parse_text("1:2:3:4"), None);
    }

    #[test]
    fn test_title_patterns() {
        assert_eq!(from_title("Rust in 5 Hours"), Some(300));
        assert_eq!(from_title("Quick intro (45 min)"), Some(45));
        assert_eq!(from_title("2 hours 30 minutes of SQL"), Some(150));
        assert_eq!(from_title("Rust Course"), None);
    }

    #[test]
    fn test_defaults_by_title() {
        assert_eq!(
            estimate_minutes(&DurationValue::Unknown, "Python Full Course for Beginners"),
            90
        );
        assert_eq!(
            estimate_minutes(&DurationValue::Unknown, "Python Variables Explained"),
            25
        );
    }

    #[test]
    fn test_explicit_beats_default() {
        assert_eq!(
            estimate_minutes(&DurationValue::Text("2:00:00".into()), "Full Course"),
            120
        );
    }

    #[test]
    fn test_playlist_estimate() {
        let members = vec![
            VideoCandidate::new("a", "u1").with_duration(DurationValue::Minutes(30)),
            VideoCandidate::new("b", "u2").with_duration(DurationValue::Minutes(60)),
            VideoCandidate::new("c", "u3"),
        ];
        // avg 45 over the two known, times 10 members
        assert_eq!(estimate_playlist_minutes(&members, 10), 450);
    }

    #[test]
    fn test_playlist_estimate_no_durations() {
        let members = vec![VideoCandidate::new("a", "u1"), VideoCandidate::new("b", "u2")];
        assert_eq!(estimate_playlist_minutes(&members, 10), 0);
    }

    proptest! {
        #[test]
        fn prop_hms_parses_to_hours_and_minutes(h in 0u64..100, m in 0u64..60, s in 0u64..60) {
            let text = format!("{h}:{m:02}:{s:02}");
            prop_assert_eq!(parse_text(&text), Some(h * 60 + m));
        }

        #[test]
        fn prop_bare_minutes_round_trip(m in 0u64..100_000) {
            prop_assert_eq!(parse_text(&m.to_string()), Some(m));
        }
    }
}
