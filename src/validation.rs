//! Input validation for balancing runs.
//!
//! Checks structural integrity of raw task records before graph work, and
//! detects circular precedence dependencies on the built graph. Detects:
//! - Empty record set
//! - Blank identifiers
//! - Non-positive durations
//! - Duplicate identifiers (after case normalization)
//! - Cycles in the predecessor relation, including self-reference
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.3
//! (DFS edge classification)

use std::collections::{HashMap, HashSet};

use crate::error::BalanceError;
use crate::graph::TaskGraph;
use crate::models::TaskInput;

/// Validates raw task records.
///
/// Returns the first integrity failure found, in record order. Duplicate
/// identifiers are rejected outright rather than letting a later record
/// overwrite an earlier one in the mapping.
pub fn validate_records(records: &[TaskInput]) -> Result<(), BalanceError> {
    if records.is_empty() {
        return Err(BalanceError::Validation("task list is empty".into()));
    }

    let mut seen = HashSet::new();
    for rec in records {
        let id = rec.normalized_id();
        if id.is_empty() {
            return Err(BalanceError::Validation(
                "a task is missing its identifier".into(),
            ));
        }
        if rec.duration <= 0 {
            return Err(BalanceError::Validation(format!(
                "task '{id}' has non-positive duration {}",
                rec.duration
            )));
        }
        if !seen.insert(id.clone()) {
            return Err(BalanceError::Validation(format!(
                "duplicate task identifier '{id}'"
            )));
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Detects a cycle in the predecessor relation.
///
/// # Algorithm
/// Three-color DFS treating "depends on" as a directed edge from task to
/// predecessor, run with an explicit stack so deep graphs cannot overflow
/// the call stack. A back-edge to an in-progress node is the cycle signal.
/// Predecessors referencing unknown identifiers carry no edge. The result
/// does not depend on traversal order.
pub fn has_cycle(graph: &TaskGraph) -> bool {
    let mut marks: HashMap<&str, Mark> = graph.ids().map(|id| (id, Mark::Unvisited)).collect();

    for root in graph.ids() {
        if marks.get(root) != Some(&Mark::Unvisited) {
            continue;
        }
        let Some(root_task) = graph.get(root) else {
            continue;
        };

        // Stack of (task, index of next predecessor edge to examine).
        let mut stack = vec![(root_task, 0usize)];
        marks.insert(root, Mark::InProgress);

        while !stack.is_empty() {
            let next_pred = {
                let Some((task, edge)) = stack.last_mut() else {
                    break;
                };
                let task = *task;
                match task.predecessors.get(*edge) {
                    Some(pred_id) => {
                        *edge += 1;
                        Some(pred_id.as_str())
                    }
                    None => None,
                }
            };

            match next_pred {
                Some(pred_id) => {
                    let Some(pred) = graph.get(pred_id) else {
                        continue;
                    };
                    match marks.get(pred.id.as_str()).copied().unwrap_or(Mark::Unvisited) {
                        Mark::InProgress => return true,
                        Mark::Done => {}
                        Mark::Unvisited => {
                            marks.insert(pred.id.as_str(), Mark::InProgress);
                            stack.push((pred, 0));
                        }
                    }
                }
                None => {
                    if let Some((done, _)) = stack.pop() {
                        marks.insert(done.id.as_str(), Mark::Done);
                    }
                }
            }
        }
    }

    false
}
