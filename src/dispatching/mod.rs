//! Priority rules for candidate ranking.
//!
//! At every inner step of the station-filling loop the engine asks a rule
//! to order the ready, capacity-fitting candidates from most to least
//! preferred. Rules are a closed set (a tagged variant): an unrecognized
//! rule identifier fails at parse time, never mid-run.
//!
//! # Score Convention
//! Deterministic rules reduce each candidate to an integer score where
//! **lower = higher priority**, then sort stably so exact ties keep input
//! order — results are reproducible across runs.
//!
//! # References
//!
//! - Helgeson & Birnie (1961), "Assembly Line Balancing Using the Ranked
//!   Positional Weight Technique"
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod rules;

pub use rules::PriorityRule;

/// Score assigned to a candidate by a deterministic rule.
///
/// Lower scores = higher priority (selected first).
pub type RuleScore = i64;
