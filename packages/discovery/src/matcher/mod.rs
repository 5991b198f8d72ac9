//! Technology matcher implementations.

pub mod heuristic;
pub mod llm;

pub use heuristic::HeuristicMatcher;
pub use llm::LlmMatcher;
