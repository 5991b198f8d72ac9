//! Engagement count and publish date normalization.

use std::sync::LazyLock;

use regex::Regex;

static YEARS_AGO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*year").expect("valid regex"));

/// Parse a view/like count that may arrive formatted: `"1.2M"`, `"500K"`,
/// `"3B"`, `"12,345"`, or a plain integer string.
pub fn parse_count(raw: &str) -> Option<u64> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }

    if let Ok(n) = cleaned.parse::<u64>() {
        return Some(n);
    }

    let upper = cleaned.to_uppercase();
    for (suffix, multiplier) in [("K", 1e3), ("M", 1e6), ("B", 1e9)] {
        if upper.contains(suffix) {
            let number_part = upper.replace(suffix, "");
            let value: f64 = number_part.trim().parse().ok()?;
            if value < 0.0 {
                return None;
            }
            return Some((value * multiplier).round() as u64);
        }
    }

    None
}

/// Extract a publish year from the formats the gateway emits: compact
/// `YYYYMMDD`, ISO-style `YYYY-...`, a bare year, or relative phrases
/// ("2 years ago", "3 months ago").
pub fn publish_year(raw: &str, current_year: i32) -> Option<i32> {
    let raw = raw.trim();

    if raw.len() == 8 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw[..4].parse().ok();
    }

    if raw.len() >= 4 && raw.as_bytes()[..4].iter().all(|b| b.is_ascii_digit()) {
        if raw.len() == 4 || raw.as_bytes()[4] == b'-' {
            return raw[..4].parse().ok();
        }
    }

    let lower = raw.to_lowercase();
    if let Some(caps) = YEARS_AGO_RE.captures(&lower) {
        let years: i32 = caps[1].parse().ok()?;
        return Some(current_year - years);
    }

    const RECENT_TERMS: &[&str] = &["month", "week", "day", "hour", "minute", "second"];
    if RECENT_TERMS.iter().any(|t| lower.contains(t)) {
        return Some(current_year);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_plain() {
        assert_eq!(parse_count("1234"), Some(1234));
        assert_eq!(parse_count("12,345"), Some(12345));
    }

    #[test]
    fn test_parse_count_suffixes() {
        assert_eq!(parse_count("1.2M"), Some(1_200_000));
        assert_eq!(parse_count("500K"), Some(500_000));
        assert_eq!(parse_count("3B"), Some(3_000_000_000));
        assert_eq!(parse_count("2.5k"), Some(2_500));
    }

    #[test]
    fn test_parse_count_garbage() {
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("lots"), None);
    }

    #[test]
    fn test_publish_year_compact() {
        assert_eq!(publish_year("20240115", 2026), Some(2024));
    }

    #[test]
    fn test_publish_year_iso() {
        assert_eq!(publish_year("2023-06-01T00:00:00Z", 2026), Some(2023));
        assert_eq!(publish_year("2023", 2026), Some(2023));
    }

    #[test]
    fn test_publish_year_relative() {
        assert_eq!(publish_year("2 years ago", 2026), Some(2024));
        assert_eq!(publish_year("3 months ago", 2026), Some(2026));
        assert_eq!(publish_year("1 week ago", 2026), Some(2026));
    }

    #[test]
    fn test_publish_year_unknown() {
        assert_eq!(publish_year("recently", 2026), None);
        assert_eq!(publish_year("", 2026), None);
    }
}
