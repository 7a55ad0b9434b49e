//! Balance report: summary statistics and the decision log.
//!
//! Pure aggregation over a completed assignment. The helpers here are
//! stateless functions of their inputs; re-deriving any statistic from the
//! same stations/total-time pair yields identical numbers.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Cycle time (takt) | available time ÷ demand |
//! | Theoretical minimum stations | ceil(total task time / cycle time) |
//! | Efficiency | total task time / (stations × cycle time) × 100 |
//!
//! # Reference
//! Scholl (1999), "Balancing and Sequencing of Assembly Lines", Ch. 1.3

use serde::{Deserialize, Serialize};

use crate::dispatching::PriorityRule;
use crate::error::BalanceError;
use crate::models::{Station, Task};

/// Derives the cycle time (takt time) in seconds.
///
/// Available time is in minutes, demand in units per period. Fails with
/// [`BalanceError::InvalidDemand`] before the division when demand ≤ 0.
pub fn cycle_time(available_time_min: i64, demand: i64) -> Result<f64, BalanceError> {
    if demand <= 0 {
        return Err(BalanceError::InvalidDemand);
    }
    Ok((available_time_min * 60) as f64 / demand as f64)
}

/// Lower bound on station count assuming perfect packing.
pub fn theoretical_min_stations(total_task_time: i64, cycle_time: f64) -> usize {
    if cycle_time > 0.0 {
        (total_task_time as f64 / cycle_time).ceil() as usize
    } else {
        0
    }
}

/// Line efficiency as a percentage, rounded to 2 decimals.
///
/// Zero when either the station count or the cycle time is zero.
pub fn efficiency_percent(total_task_time: i64, station_count: usize, cycle_time: f64) -> f64 {
    if station_count == 0 || cycle_time <= 0.0 {
        return 0.0;
    }
    let raw = total_task_time as f64 / (station_count as f64 * cycle_time) * 100.0;
    (raw * 100.0).round() / 100.0
}

/// A candidate as seen at one decision point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSnapshot {
    /// Task identifier.
    pub id: String,
    /// Processing time (seconds).
    pub duration: i64,
    /// Number of transitive successors.
    pub successor_count: usize,
    /// Sum of transitive successor durations (seconds).
    pub successor_time_sum: i64,
}

impl From<&Task> for CandidateSnapshot {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            duration: task.duration,
            successor_count: task.successor_count,
            successor_time_sum: task.successor_time_sum,
        }
    }
}

/// One micro-decision within a station-filling loop.
///
/// Recorded before the selection is made; a probe that found no candidate
/// has an empty candidate list and `selected = None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Station capacity left at this point (seconds).
    pub remaining_capacity: f64,
    /// Ready, capacity-fitting candidates in input order.
    pub candidates: Vec<CandidateSnapshot>,
    /// Identifier of the selected candidate, if any.
    pub selected: Option<String>,
    /// Rule in effect at this step.
    pub rule: PriorityRule,
}

/// Decision group for one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationLog {
    /// 1-based station index.
    pub station_index: usize,
    /// Decisions in the order they were taken.
    pub decisions: Vec<Decision>,
}

/// The aggregate result of a balancing run.
///
/// Owns its stations and decision log exclusively; the log is purely
/// observational and never feeds back into the algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Cycle time (takt time) in seconds.
    pub cycle_time: f64,
    /// Sum of all task durations (seconds).
    pub total_task_time: i64,
    /// ceil(total task time / cycle time).
    pub theoretical_min_stations: usize,
    /// Number of stations actually opened.
    pub actual_stations: usize,
    /// Line efficiency, percent, rounded to 2 decimals.
    pub efficiency_percent: f64,
    /// Rule used for candidate ranking.
    pub rule: PriorityRule,
    /// Closed stations in line order.
    pub stations: Vec<Station>,
    /// Step-by-step audit trail, one group per station.
    pub decision_log: Vec<StationLog>,
}

impl BalanceReport {
    /// Assembles the report from a completed assignment.
    pub fn build(
        cycle_time: f64,
        rule: PriorityRule,
        total_task_time: i64,
        stations: Vec<Station>,
        decision_log: Vec<StationLog>,
    ) -> Self {
        let actual_stations = stations.len();
        Self {
            cycle_time,
            total_task_time,
            theoretical_min_stations: theoretical_min_stations(total_task_time, cycle_time),
            actual_stations,
            efficiency_percent: efficiency_percent(total_task_time, actual_stations, cycle_time),
            rule,
            stations,
            decision_log,
        }
    }

    /// Task identifiers per station, in line and assignment order.
    pub fn station_layout(&self) -> Vec<Vec<&str>> {
        self.stations.iter().map(|s| s.task_ids()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_time() {
        // 480 min × 60 / 360 units = 80 s per unit.
        assert!((cycle_time(480, 360).unwrap() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_cycle_time_rejects_non_positive_demand() {
        assert_eq!(cycle_time(480, 0).unwrap_err(), BalanceError::InvalidDemand);
        assert_eq!(cycle_time(480, -3).unwrap_err(), BalanceError::InvalidDemand);
    }

    #[test]
    fn test_theoretical_min_stations() {
        assert_eq!(theoretical_min_stations(360, 80.0), 5); // 4.5 → 5
        assert_eq!(theoretical_min_stations(320, 80.0), 4); // exact
        assert_eq!(theoretical_min_stations(360, 0.0), 0);
    }

    #[test]
    fn test_efficiency_percent() {
        assert!((efficiency_percent(360, 5, 80.0) - 90.0).abs() < 1e-9);
        assert!((efficiency_percent(360, 6, 80.0) - 75.0).abs() < 1e-9);
        assert_eq!(efficiency_percent(360, 0, 80.0), 0.0);
        assert_eq!(efficiency_percent(360, 5, 0.0), 0.0);
    }

    #[test]
    fn test_efficiency_rounding() {
        // 100/(3×40) × 100 = 83.333... → 83.33
        assert!((efficiency_percent(100, 3, 40.0) - 83.33).abs() < 1e-9);
    }

    #[test]
    fn test_statistics_are_idempotent() {
        let first = (
            theoretical_min_stations(360, 80.0),
            efficiency_percent(360, 5, 80.0),
        );
        let second = (
            theoretical_min_stations(360, 80.0),
            efficiency_percent(360, 5, 80.0),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_build() {
        let mut s1 = Station::new(1);
        s1.push(crate::models::AssignedTask {
            id: "A".into(),
            duration: 60,
        });
        s1.close(80.0);

        let report = BalanceReport::build(80.0, PriorityRule::Rpw, 60, vec![s1], vec![]);
        assert_eq!(report.actual_stations, 1);
        assert_eq!(report.theoretical_min_stations, 1);
        assert!((report.efficiency_percent - 75.0).abs() < 1e-9);
        assert_eq!(report.station_layout(), vec![vec!["A"]]);
    }
}
