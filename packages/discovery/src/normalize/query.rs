//! Topic and search query normalization.

/// Qualifier phrases stripped when reducing a topic to a technology name.
const QUALIFIER_PHRASES: &[&str] = &["for beginners", "one shot", "crash course"];

/// Single-word qualifiers stripped when reducing a topic to a technology
/// name.
const QUALIFIER_WORDS: &[&str] = &[
    "complete",
    "full",
    "tutorial",
    "course",
    "oneshot",
    "masterclass",
];

/// Collapse whitespace and drop duplicate words case-insensitively,
/// keeping the first occurrence of each: `"HTML HTML Basics"` becomes
/// `"HTML Basics"`, `"Git Basics Git"` becomes `"Git Basics"`.
///
/// Idempotent: normalizing a normalized topic is a no-op.
pub fn normalize_topic(topic: &str) -> String {
    let mut seen: Vec<String> = Vec::new();
    let mut words: Vec<&str> = Vec::new();
    for word in topic.split_whitespace() {
        let lower = word.to_lowercase();
        if !seen.contains(&lower) {
            seen.push(lower);
            words.push(word);
        }
    }
    words.join(" ")
}

/// Reduce a topic to its technology name by stripping course-shaped
/// qualifiers, preserving the casing of what remains.
///
/// Falls back to the trimmed topic when stripping would leave nothing.
pub fn technology_name(topic: &str) -> String {
    let tokens: Vec<&str> = topic.split_whitespace().collect();
    let mut kept: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if i + 1 < tokens.len() {
            let pair = format!(
                "{} {}",
                tokens[i].to_lowercase(),
                tokens[i + 1].to_lowercase()
            );
            if QUALIFIER_PHRASES.contains(&pair.as_str()) {
                i += 2;
                continue;
            }
        }
        let lower = tokens[i].to_lowercase();
        if !QUALIFIER_WORDS.contains(&lower.as_str()) {
            kept.push(tokens[i]);
        }
        i += 1;
    }

    if kept.is_empty() {
        topic.trim().to_string()
    } else {
        kept.join(" ")
    }
}

/// Build the video search query.
///
/// Topics already phrased as "complete ..." keep their own wording;
/// everything else searches for a complete oneshot course on the
/// technology name.
pub fn video_query(topic: &str, technology: &str) -> String {
    if topic.to_lowercase().contains("complete") {
        format!("{topic} course full oneshot")
    } else {
        format!("Complete {technology} course full oneshot")
    }
}

/// Build the playlist search query.
pub fn playlist_query(topic: &str) -> String {
    if topic.to_lowercase().contains("complete") {
        format!("{topic} course")
    } else {
        format!("complete {topic} course")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_dedupes_repeated_words() {
        assert_eq!(normalize_topic("HTML HTML Basics"), "HTML Basics");
        assert_eq!(normalize_topic("css css CSS grid"), "css grid");
    }

    #[test]
    fn test_dedupes_non_adjacent_repeats() {
        assert_eq!(normalize_topic("Git Basics Git"), "Git Basics");
        assert_eq!(normalize_topic("java intro JAVA advanced java"), "java intro advanced");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize_topic("  React   Hooks "), "React Hooks");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_topic("HTML HTML Basics");
        assert_eq!(normalize_topic(&once), once);
    }

    #[test]
    fn test_technology_name_strips_qualifiers() {
        assert_eq!(technology_name("Complete React course"), "React");
        assert_eq!(technology_name("Python full tutorial for beginners"), "Python");
        assert_eq!(technology_name("Node.js crash course"), "Node.js");
        assert_eq!(technology_name("machine learning one shot"), "machine learning");
    }

    #[test]
    fn test_technology_name_falls_back_when_empty() {
        assert_eq!(technology_name("complete course"), "complete course");
    }

    #[test]
    fn test_video_query() {
        assert_eq!(
            video_query("Rust", "Rust"),
            "Complete Rust course full oneshot"
        );
        assert_eq!(
            video_query("Complete Rust guide", "Rust guide"),
            "Complete Rust guide course full oneshot"
        );
    }

    #[test]
    fn test_playlist_query() {
        assert_eq!(playlist_query("Rust"), "complete Rust course");
        assert_eq!(playlist_query("Complete Rust"), "Complete Rust course");
    }

    proptest! {
        #[test]
        fn prop_normalize_topic_idempotent(topic in "[a-zA-Z ]{0,40}") {
            let once = normalize_topic(&topic);
            prop_assert_eq!(normalize_topic(&once), once);
        }
    }
}
