//! Workstation model.
//!
//! A station is an ordered group of tasks performed within one cycle-time
//! budget. Stations are created in sequence order starting at index 1 and
//! become immutable once the assignment loop closes them.

use serde::{Deserialize, Serialize};

/// A task placed in a station, by copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedTask {
    /// Task identifier.
    pub id: String,
    /// Processing time (seconds).
    pub duration: i64,
}

/// An ordered group of tasks within one cycle-time budget.
///
/// Invariant: `total_duration <= cycle_time` for every closed station.
/// `idle_time` is meaningful only after [`Station::close`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    /// 1-based position in the line.
    pub index: usize,
    /// Tasks in assignment order.
    pub tasks: Vec<AssignedTask>,
    /// Sum of member task durations (seconds).
    pub total_duration: i64,
    /// Unused capacity: cycle time minus total duration (seconds).
    pub idle_time: f64,
}

impl Station {
    /// Opens an empty station at the given line position.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            tasks: Vec::new(),
            total_duration: 0,
            idle_time: 0.0,
        }
    }

    /// Appends a task and accumulates its duration.
    pub fn push(&mut self, task: AssignedTask) {
        self.total_duration += task.duration;
        self.tasks.push(task);
    }

    /// Closes the station, fixing its idle time against the cycle time.
    pub fn close(&mut self, cycle_time: f64) {
        self.idle_time = cycle_time - self.total_duration as f64;
    }

    /// Identifiers of member tasks, in assignment order.
    pub fn task_ids(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assigned(id: &str, duration: i64) -> AssignedTask {
        AssignedTask {
            id: id.into(),
            duration,
        }
    }

    #[test]
    fn test_push_accumulates_duration() {
        let mut station = Station::new(1);
        station.push(assigned("A", 20));
        station.push(assigned("B", 55));
        assert_eq!(station.total_duration, 75);
        assert_eq!(station.task_ids(), vec!["A", "B"]);
    }

    #[test]
    fn test_close_fixes_idle_time() {
        let mut station = Station::new(2);
        station.push(assigned("D", 45));
        station.close(80.0);
        assert!((station.idle_time - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_station_idles_full_cycle() {
        let mut station = Station::new(1);
        station.close(80.0);
        assert!((station.idle_time - 80.0).abs() < 1e-9);
    }
}
