//! LLM-backed technology matching.
//!
//! Each operation asks the gateway for a small JSON verdict; any
//! gateway error or malformed reply degrades to the deterministic
//! heuristics, so the matcher never fails.

use async_trait::async_trait;
use tracing::debug;

use crate::gateway::LlmGateway;
use crate::matcher::heuristic::HeuristicMatcher;
use crate::traits::matcher::TechMatcher;

const RELEVANCE_SYSTEM: &str = "You are a technology content relevance checker. \
Decide whether a video title is about a specific technology topic.\n\
Rules:\n\
1. Focus only on the technology name, not words like \"tutorial\", \"course\", \"complete\".\n\
2. The title must specifically mention the technology or a common abbreviation \
(JS for JavaScript, k8s for Kubernetes).\n\
3. Be strict: the title must clearly be about the technology.\n\
Respond with a JSON object: {\"is_relevant\": boolean}";

const EQUIVALENCE_SYSTEM: &str = "You decide whether two technology names refer to \
the same technology (for example \"JS\" and \"JavaScript\", or \"k8s\" and \
\"Kubernetes\"). Different technologies that merely relate to each other are not \
equivalent.\n\
Respond with a JSON object: {\"equivalent\": boolean}";

const EXTRACTION_SYSTEM: &str = "You extract technology names from video titles. \
List only real technologies (languages, frameworks, databases, tools), not \
filler words.\n\
Respond with a JSON object: {\"technologies\": [\"...\"]}";

/// Matcher that asks an LLM first and falls back to
/// [`HeuristicMatcher`] when no usable answer comes back.
pub struct LlmMatcher {
    gateway: LlmGateway,
}

impl LlmMatcher {
    /// Create a matcher over the given gateway.
    pub fn new(gateway: LlmGateway) -> Self {
        Self { gateway }
    }

    async fn relevance_verdict(&self, title: &str, technology: &str) -> Option<bool> {
        let user = format!("Video title: \"{title}\"\nTechnology: \"{technology}\"");
        let value = self.gateway.complete_json(RELEVANCE_SYSTEM, &user).await.ok()?;
        value.get("is_relevant")?.as_bool()
    }

    async fn equivalence_verdict(&self, a: &str, b: &str) -> Option<bool> {
        let user = format!("Name 1: \"{a}\"\nName 2: \"{b}\"");
        let value = self
            .gateway
            .complete_json(EQUIVALENCE_SYSTEM, &user)
            .await
            .ok()?;
        value.get("equivalent")?.as_bool()
    }

    async fn extraction_verdict(&self, title: &str) -> Option<Vec<String>> {
        let user = format!("Video title: \"{title}\"");
        let value = self
            .gateway
            .complete_json(EXTRACTION_SYSTEM, &user)
            .await
            .ok()?;
        let items = value.get("technologies")?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(|v| v.as_str())
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }
}

#[async_trait]
impl TechMatcher for LlmMatcher {
    async fn is_relevant(&self, title: &str, technology: &str) -> bool {
        match self.relevance_verdict(title, technology).await {
            Some(verdict) => verdict,
            None => {
                debug!(title, technology, "relevance check degraded to heuristics");
                HeuristicMatcher::title_relevant(title, technology)
            }
        }
    }

    async fn are_equivalent(&self, a: &str, b: &str) -> bool {
        // Cheap exact/synonym hits don't need a model call
        if HeuristicMatcher::names_equivalent(a, b) {
            return true;
        }
        match self.equivalence_verdict(a, b).await {
            Some(verdict) => verdict,
            None => {
                debug!(a, b, "equivalence check degraded to heuristics");
                false
            }
        }
    }

    async fn extract_technologies(&self, title: &str) -> Vec<String> {
        match self.extraction_verdict(title).await {
            Some(technologies) if !technologies.is_empty() => technologies,
            _ => {
                debug!(title, "extraction degraded to heuristics");
                HeuristicMatcher::technologies_in(title)
            }
        }
    }
}
