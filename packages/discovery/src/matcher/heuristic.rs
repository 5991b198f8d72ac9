//! Deterministic technology matching.
//!
//! Pure string heuristics: word-boundary matching with a synonym table
//! for relevance, alphanumeric squashing for equivalence, and a known
//! technology table for extraction. Also serves as the fallback when
//! the LLM-backed matcher cannot get an answer.

use async_trait::async_trait;

use crate::traits::matcher::TechMatcher;

/// Known synonym pairs, both directions.
const SYNONYMS: &[(&str, &str)] = &[
    ("javascript", "js"),
    ("python", "py"),
    ("typescript", "ts"),
    ("kubernetes", "k8s"),
    ("machine learning", "ml"),
    ("node.js", "nodejs"),
    ("node.js", "node js"),
    ("c++", "cpp"),
    ("c#", "csharp"),
    ("postgresql", "postgres"),
    ("react", "reactjs"),
    ("vue", "vuejs"),
    ("next.js", "nextjs"),
    ("golang", "go"),
];

/// Compound technology names checked before single words during
/// extraction, so "machine learning" doesn't also yield nothing or
/// partial words.
const COMPOUND_TECHNOLOGIES: &[&str] = &[
    "machine learning",
    "deep learning",
    "data science",
    "react native",
    "ruby on rails",
    "spring boot",
    "node js",
];

/// Single-word technology names recognized in titles.
const TECHNOLOGIES: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "react",
    "angular",
    "vue",
    "svelte",
    "node.js",
    "nodejs",
    "express",
    "django",
    "flask",
    "html",
    "css",
    "sass",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "git",
    "rust",
    "golang",
    "php",
    "laravel",
    "swift",
    "kotlin",
    "flutter",
    "c++",
    "c#",
];

/// Deterministic matcher over the tables above.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMatcher;

impl HeuristicMatcher {
    /// Create a heuristic matcher.
    pub fn new() -> Self {
        Self
    }

    /// Whether a title is about the given technology.
    ///
    /// Single-word technologies need a word-boundary hit of the word or
    /// a known synonym; multi-word ones need at least half (rounded up)
    /// of their significant words in the title.
    pub fn title_relevant(title: &str, technology: &str) -> bool {
        let title = title.to_lowercase();
        let tech = technology.trim().to_lowercase();
        if tech.is_empty() {
            return false;
        }

        let significant: Vec<&str> = tech
            .split_whitespace()
            .filter(|w| w.len() > 2)
            .collect();

        if significant.len() >= 2 {
            let required = significant.len().div_ceil(2);
            let present = significant.iter().filter(|w| title.contains(*w)).count();
            return present >= required;
        }

        let needle = significant.first().copied().unwrap_or(tech.as_str());
        if contains_word(&title, needle) {
            return true;
        }
        for alt in synonyms_of(needle) {
            if contains_word(&title, alt) {
                return true;
            }
        }
        false
    }

    /// Whether two names refer to the same technology.
    pub fn names_equivalent(a: &str, b: &str) -> bool {
        let sa = squash(a);
        let sb = squash(b);
        if sa.is_empty() || sb.is_empty() {
            return false;
        }
        if sa == sb {
            return true;
        }
        SYNONYMS.iter().any(|(x, y)| {
            let sx = squash(x);
            let sy = squash(y);
            (sa == sx && sb == sy) || (sa == sy && sb == sx)
        })
    }

    /// Extract known technology names from a title, compounds first.
    pub fn technologies_in(title: &str) -> Vec<String> {
        let title = title.to_lowercase();
        let mut found: Vec<String> = Vec::new();

        for compound in COMPOUND_TECHNOLOGIES {
            if title.contains(compound) {
                found.push((*compound).to_string());
            }
        }

        for tech in TECHNOLOGIES {
            if !contains_word(&title, tech) {
                continue;
            }
            // Skip words already covered by a matched compound
            if found.iter().any(|c| c.contains(tech)) {
                continue;
            }
            found.push((*tech).to_string());
        }

        found
    }
}

#[async_trait]
impl TechMatcher for HeuristicMatcher {
    async fn is_relevant(&self, title: &str, technology: &str) -> bool {
        Self::title_relevant(title, technology)
    }

    async fn are_equivalent(&self, a: &str, b: &str) -> bool {
        Self::names_equivalent(a, b)
    }

    async fn extract_technologies(&self, title: &str) -> Vec<String> {
        Self::technologies_in(title)
    }
}

/// Word-boundary containment: the needle occurs with no alphanumeric
/// neighbors. Works for needles with symbols ("c++", "node.js").
fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(i, _)| {
        let before_ok = haystack[..i]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = haystack[i + needle.len()..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

fn squash(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

fn synonyms_of(name: &str) -> impl Iterator<Item = &'static str> + '_ {
    SYNONYMS.iter().filter_map(move |(a, b)| {
        if *a == name {
            Some(*b)
        } else if *b == name {
            Some(*a)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relevant_word_boundary() {
        assert!(HeuristicMatcher::title_relevant("Learn Java in 4 Hours", "java"));
        // "java" inside "javascript" is not a word-boundary hit
        assert!(!HeuristicMatcher::title_relevant("JavaScript Crash Course", "java"));
    }

    #[test]
    fn test_relevant_via_synonym() {
        assert!(HeuristicMatcher::title_relevant("JS Full Course", "JavaScript"));
        assert!(HeuristicMatcher::title_relevant("k8s for Beginners", "Kubernetes"));
    }

    #[test]
    fn test_relevant_short_names() {
        // names of two letters or fewer match as the whole needle
        assert!(HeuristicMatcher::title_relevant("Go Crash Course", "go"));
        assert!(HeuristicMatcher::title_relevant("Golang Tutorial", "go"));
        assert!(!HeuristicMatcher::title_relevant("Gopher Photos", "go"));
    }

    #[test]
    fn test_relevant_multi_word() {
        assert!(HeuristicMatcher::title_relevant(
            "Machine Learning Full Course",
            "machine learning"
        ));
        // one of two significant words present is enough
        assert!(HeuristicMatcher::title_relevant(
            "Learning from Data",
            "machine learning"
        ));
        assert!(!HeuristicMatcher::title_relevant(
            "Cooking Basics",
            "machine learning"
        ));
    }

    #[test]
    fn test_relevant_symbols() {
        assert!(HeuristicMatcher::title_relevant("C++ Full Course", "c++"));
        assert!(!HeuristicMatcher::title_relevant("Rust Course", "c++"));
    }

    #[test]
    fn test_irrelevant_title() {
        assert!(!HeuristicMatcher::title_relevant("Cooking Pasta at Home", "python"));
    }

    #[test]
    fn test_equivalent_squashed() {
        assert!(HeuristicMatcher::names_equivalent("Node.js", "nodejs"));
        assert!(HeuristicMatcher::names_equivalent("node js", "NodeJS"));
    }

    #[test]
    fn test_equivalent_synonyms() {
        assert!(HeuristicMatcher::names_equivalent("JavaScript", "JS"));
        assert!(HeuristicMatcher::names_equivalent("js", "javascript"));
        assert!(HeuristicMatcher::names_equivalent("C++", "cpp"));
        assert!(!HeuristicMatcher::names_equivalent("JavaScript", "Java"));
    }

    #[test]
    fn test_extract_single() {
        let techs = HeuristicMatcher::technologies_in("Complete Python Course 2026");
        assert_eq!(techs, vec!["python"]);
    }

    #[test]
    fn test_extract_multiple() {
        let techs = HeuristicMatcher::technologies_in("HTML and CSS Full Course");
        assert!(techs.contains(&"html".to_string()));
        assert!(techs.contains(&"css".to_string()));
    }

    #[test]
    fn test_extract_compound_suppresses_parts() {
        let techs = HeuristicMatcher::technologies_in("Machine Learning with Python");
        assert!(techs.contains(&"machine learning".to_string()));
        assert!(techs.contains(&"python".to_string()));
    }

    #[test]
    fn test_extract_nothing() {
        assert!(HeuristicMatcher::technologies_in("My Travel Vlog").is_empty());
    }
}
