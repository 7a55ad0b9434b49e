//! Greedy balancing engine and balance report.
//!
//! `LineBalancer` runs the full pipeline: cycle-time derivation, graph
//! build, bottleneck and cycle gates, then the greedy station-filling loop.
//! `BalanceReport` aggregates the result: stations, summary statistics, and
//! the step-by-step decision log.
//!
//! # Algorithm
//!
//! The assigner is a greedy bin-filling heuristic: it repeatedly scans the
//! pending set for ready, capacity-fitting candidates, selects the one the
//! active priority rule prefers, and opens a new station when nothing more
//! fits. Not optimal, but deterministic and fast.
//!
//! # References
//!
//! - Helgeson & Birnie (1961), "Assembly Line Balancing Using the Ranked
//!   Positional Weight Technique"
//! - Scholl (1999), "Balancing and Sequencing of Assembly Lines", Ch. 4

mod engine;
mod report;

pub use engine::{BalanceRequest, LineBalancer};
pub use report::{
    cycle_time, efficiency_percent, theoretical_min_stations, BalanceReport, CandidateSnapshot,
    Decision, StationLog,
};
