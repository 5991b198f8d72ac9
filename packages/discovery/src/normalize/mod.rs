//! Normalization of durations, topics, and engagement metrics.
//!
//! The search gateway is loose about formats; everything is normalized
//! here so scorers and the selector see plain minutes, plain counts,
//! and deduplicated topic strings.

pub mod duration;
pub mod metrics;
pub mod query;
