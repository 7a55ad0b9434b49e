//! Greedy station-filling engine.
//!
//! # Algorithm
//!
//! 1. Derive the cycle time from available time and demand.
//! 2. Build the precedence graph and gate on fatal inputs: a task longer
//!    than the cycle time is an unsalvageable bottleneck, a cyclic
//!    predecessor relation can never be scheduled.
//! 3. Fill stations greedily: scan the pending set for candidates whose
//!    predecessors are all assigned and whose duration fits the remaining
//!    capacity, let the priority rule pick one, repeat until nothing fits,
//!    then open the next station.
//!
//! The candidate set is recomputed from scratch on every inner iteration —
//! O(n²) per station fill. Acceptable at the scale of dozens of tasks, and
//! deliberate: an incremental rescan would change tie-break order.
//!
//! Given the gates above, the loop always terminates with every task
//! assigned: an acyclic graph always has at least one ready task, and every
//! task fits an empty station.
//!
//! # Reference
//! Helgeson & Birnie (1961); Scholl (1999), Ch. 4.2 (station-oriented
//! construction heuristics)

use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::report::{self, BalanceReport, CandidateSnapshot, Decision, StationLog};
use crate::dispatching::PriorityRule;
use crate::error::BalanceError;
use crate::graph::TaskGraph;
use crate::models::{AssignedTask, Station, Task, TaskInput};
use crate::validation;

/// Input container for a balancing run — the request contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRequest {
    /// Available working time per period (minutes).
    pub available_time: i64,
    /// Demand (units per period).
    pub demand: i64,
    /// Raw task records.
    pub tasks: Vec<TaskInput>,
    /// Priority rule; `RPW` when omitted.
    #[serde(default)]
    pub rule: PriorityRule,
}

impl BalanceRequest {
    /// Creates a request with the default rule.
    pub fn new(available_time: i64, demand: i64, tasks: Vec<TaskInput>) -> Self {
        Self {
            available_time,
            demand,
            tasks,
            rule: PriorityRule::default(),
        }
    }

    /// Sets the priority rule.
    pub fn with_rule(mut self, rule: PriorityRule) -> Self {
        self.rule = rule;
        self
    }
}

/// Greedy assembly-line balancer.
///
/// A complete run is one synchronous, side-effect-free computation over
/// immutable input (apart from random-generator consumption under the
/// `RANDOM` rule). Independent runs are safe to execute concurrently; each
/// run owns its own generator state, seeded per balancer when reproducible
/// results are needed.
///
/// # Example
///
/// ```
/// use line_balance::balancer::LineBalancer;
/// use line_balance::models::TaskInput;
///
/// let tasks = vec![
///     TaskInput::new("A", 20),
///     TaskInput::new("B", 30).with_predecessors("A"),
/// ];
/// // 480 min shift, 360 units demanded → 80 s takt.
/// let report = LineBalancer::new().balance(480, 360, &tasks).unwrap();
/// assert_eq!(report.actual_stations, 1);
/// ```
#[derive(Debug, Clone)]
pub struct LineBalancer {
    rule: PriorityRule,
    seed: Option<u64>,
}

impl LineBalancer {
    /// Creates a balancer with the default rule and OS-seeded randomness.
    pub fn new() -> Self {
        Self {
            rule: PriorityRule::default(),
            seed: None,
        }
    }

    /// Sets the priority rule.
    pub fn with_rule(mut self, rule: PriorityRule) -> Self {
        self.rule = rule;
        self
    }

    /// Fixes the random seed, making `RANDOM` runs reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Runs a balancing computation.
    ///
    /// Available time is in minutes, task durations in seconds. All errors
    /// abandon the run wholesale; no partial result is returned.
    pub fn balance(
        &self,
        available_time_min: i64,
        demand: i64,
        records: &[TaskInput],
    ) -> Result<BalanceReport, BalanceError> {
        let cycle_time = report::cycle_time(available_time_min, demand)?;
        let graph = TaskGraph::build(records)?;

        for task in graph.tasks() {
            if task.duration as f64 > cycle_time {
                return Err(BalanceError::Bottleneck {
                    task_id: task.id.clone(),
                    duration: task.duration,
                    cycle_time,
                });
            }
        }
        if validation::has_cycle(&graph) {
            return Err(BalanceError::CyclicDependency);
        }

        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut pending: HashSet<&str> = graph.ids().collect();
        let mut stations = Vec::new();
        let mut decision_log = Vec::new();
        let mut index = 1;

        while !pending.is_empty() {
            let mut station = Station::new(index);
            let mut remaining = cycle_time;
            let mut decisions = Vec::new();

            loop {
                if pending.is_empty() {
                    break;
                }

                // Candidate scan, in input order: pending tasks whose
                // predecessors are all assigned and whose duration fits.
                let candidates: Vec<&Task> = graph
                    .tasks()
                    .filter(|t| pending.contains(t.id.as_str()))
                    .filter(|t| t.predecessors.iter().all(|p| !pending.contains(p.as_str())))
                    .filter(|t| t.duration as f64 <= remaining)
                    .collect();

                let mut decision = Decision {
                    remaining_capacity: remaining,
                    candidates: candidates.iter().map(|t| CandidateSnapshot::from(*t)).collect(),
                    selected: None,
                    rule: self.rule,
                };

                if candidates.is_empty() {
                    decisions.push(decision);
                    break;
                }

                let order = self.rule.rank(&candidates, &mut rng);
                let Some(&best) = order.first() else {
                    break;
                };
                let chosen = candidates[best];

                station.push(AssignedTask {
                    id: chosen.id.clone(),
                    duration: chosen.duration,
                });
                remaining -= chosen.duration as f64;
                pending.remove(chosen.id.as_str());
                decision.selected = Some(chosen.id.clone());
                decisions.push(decision);
            }

            station.close(cycle_time);
            stations.push(station);
            decision_log.push(StationLog {
                station_index: index,
                decisions,
            });
            index += 1;
        }

        Ok(BalanceReport::build(
            cycle_time,
            self.rule,
            graph.total_duration(),
            stations,
            decision_log,
        ))
    }

    /// Runs a balancing computation from a request, using the request's rule.
    pub fn balance_request(&self, request: &BalanceRequest) -> Result<BalanceReport, BalanceError> {
        let balancer = Self {
            rule: request.rule,
            seed: self.seed,
        };
        balancer.balance(request.available_time, request.demand, &request.tasks)
    }
}

impl Default for LineBalancer {
    fn default() -> Self {
        Self::new()
    }
}
