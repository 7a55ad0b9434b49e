//! Task model.
//!
//! A task is an indivisible unit of assembly work with a fixed duration and
//! a set of predecessor tasks that must be assigned to a station no later
//! than it. `TaskInput` is the raw record as received from the caller;
//! `Task` is the graph-enriched form produced at build time.
//!
//! # Reference
//! Scholl (1999), "Balancing and Sequencing of Assembly Lines", Ch. 2

use serde::{Deserialize, Serialize};

/// A raw task record.
///
/// Identifiers are free-form tokens, case-normalized to uppercase during
/// graph construction. Predecessors are a comma-separated list of
/// identifiers; whitespace and empty segments are tolerated.
///
/// All durations are in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskInput {
    /// Unique task identifier.
    pub id: String,
    /// Processing time (seconds). Must be positive.
    pub duration: i64,
    /// Comma-separated predecessor identifiers (may be empty).
    #[serde(default)]
    pub predecessors: String,
}

impl TaskInput {
    /// Creates a record with no predecessors.
    pub fn new(id: impl Into<String>, duration: i64) -> Self {
        Self {
            id: id.into(),
            duration,
            predecessors: String::new(),
        }
    }

    /// Sets the predecessor list.
    pub fn with_predecessors(mut self, predecessors: impl Into<String>) -> Self {
        self.predecessors = predecessors.into();
        self
    }

    /// The identifier trimmed and uppercased.
    pub fn normalized_id(&self) -> String {
        self.id.trim().to_uppercase()
    }

    /// Parses the predecessor list: split on commas, trim, uppercase,
    /// drop empty segments.
    pub fn predecessor_ids(&self) -> Vec<String> {
        self.predecessors
            .split(',')
            .map(|p| p.trim().to_uppercase())
            .filter(|p| !p.is_empty())
            .collect()
    }
}

/// A task enriched with precedence-graph metrics.
///
/// Built once per balancing run by [`crate::graph::TaskGraph::build`];
/// immutable for the rest of the run. Successor fields are derived, never
/// authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier (uppercase).
    pub id: String,
    /// Processing time (seconds).
    pub duration: i64,
    /// Tasks that must be assigned before this one.
    pub predecessors: Vec<String>,
    /// Tasks whose predecessor set contains this task.
    pub direct_successors: Vec<String>,
    /// Number of transitive successors.
    pub successor_count: usize,
    /// Sum of durations over all transitive successors (seconds).
    pub successor_time_sum: i64,
}

impl Task {
    /// Ranked positional weight: own duration plus all downstream work.
    ///
    /// # Reference
    /// Helgeson & Birnie (1961)
    pub fn positional_weight(&self) -> i64 {
        self.duration + self.successor_time_sum
    }
}
