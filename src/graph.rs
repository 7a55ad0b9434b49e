//! Precedence-graph construction.
//!
//! Builds the identifier → [`Task`] mapping from raw records and computes
//! the derived successor metrics used by the priority rules:
//! direct successors, transitive successor count, and transitive successor
//! time sum.
//!
//! # Algorithm
//!
//! Three passes:
//! 1. Parse each record into a `Task` with empty successor data, preserving
//!    input order (tie-break stability in the assigner depends on it).
//! 2. For every task's predecessor present in the mapping, add the dependent
//!    to the predecessor's `direct_successors`. Predecessors referencing
//!    unknown identifiers are silently ignored.
//! 3. Per task, walk the transitive closure of `direct_successors` with an
//!    explicit-stack DFS and a per-traversal visited set, then sum durations.
//!
//! # Reference
//! Helgeson & Birnie (1961): positional weights require the full
//! transitive-successor time of every task.

use std::collections::{HashMap, HashSet};

use crate::error::BalanceError;
use crate::models::{Task, TaskInput};
use crate::validation;

/// The built precedence graph: tasks keyed by identifier, iteration in
/// input order.
///
/// Immutable after [`TaskGraph::build`]; the engine only reads it.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    tasks: HashMap<String, Task>,
    order: Vec<String>,
}

impl TaskGraph {
    /// Builds the graph from raw records.
    ///
    /// Fails with [`BalanceError::Validation`] if the record set is empty,
    /// an identifier is blank, a duration is non-positive, or an identifier
    /// repeats (identifiers are compared after case normalization).
    pub fn build(records: &[TaskInput]) -> Result<Self, BalanceError> {
        validation::validate_records(records)?;

        let mut tasks = HashMap::with_capacity(records.len());
        let mut order = Vec::with_capacity(records.len());
        for rec in records {
            let id = rec.normalized_id();
            order.push(id.clone());
            tasks.insert(
                id.clone(),
                Task {
                    id,
                    duration: rec.duration,
                    predecessors: rec.predecessor_ids(),
                    direct_successors: Vec::new(),
                    successor_count: 0,
                    successor_time_sum: 0,
                },
            );
        }

        for rec in records {
            let dependent = rec.normalized_id();
            for pred in rec.predecessor_ids() {
                if let Some(parent) = tasks.get_mut(&pred) {
                    parent.direct_successors.push(dependent.clone());
                }
            }
        }

        let mut metrics = Vec::with_capacity(order.len());
        for id in &order {
            let mut visited: HashSet<&str> = HashSet::new();
            let mut stack: Vec<&str> = tasks
                .get(id)
                .map(|t| t.direct_successors.iter().map(String::as_str).collect())
                .unwrap_or_default();
            while let Some(node) = stack.pop() {
                if !visited.insert(node) {
                    continue;
                }
                if let Some(successor) = tasks.get(node) {
                    stack.extend(successor.direct_successors.iter().map(String::as_str));
                }
            }
            let time_sum: i64 = visited
                .iter()
                .filter_map(|s| tasks.get(*s))
                .map(|t| t.duration)
                .sum();
            metrics.push((id.clone(), visited.len(), time_sum));
        }
        for (id, count, time_sum) in metrics {
            if let Some(task) = tasks.get_mut(&id) {
                task.successor_count = count;
                task.successor_time_sum = time_sum;
            }
        }

        Ok(Self { tasks, order })
    }

    /// Looks up a task by identifier.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Task identifiers in input order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Tasks in input order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.order.iter().filter_map(|id| self.tasks.get(id))
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all task durations (seconds).
    pub fn total_duration(&self) -> i64 {
        self.tasks().map(|t| t.duration).sum()
    }
}
