//! Error taxonomy for balancing runs.
//!
//! Every error is fatal to its run: the run is abandoned wholesale and no
//! partial result is returned. Retrying with identical input yields the
//! identical failure (the engine is deterministic apart from the random rule).

use thiserror::Error;

/// Errors raised while preparing or executing a balancing run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BalanceError {
    /// Demand must be positive to derive a cycle time.
    #[error("demand must be greater than zero to derive a cycle time")]
    InvalidDemand,

    /// The raw task records failed an integrity check.
    #[error("invalid task input: {0}")]
    Validation(String),

    /// A single task exceeds the cycle time and cannot fit in any station.
    #[error(
        "task '{task_id}' takes {duration}s but the cycle time is {cycle_time}s; \
         it is an unsalvageable bottleneck"
    )]
    Bottleneck {
        /// Identifier of the offending task.
        task_id: String,
        /// The task's duration in seconds.
        duration: i64,
        /// The computed cycle time in seconds.
        cycle_time: f64,
    },

    /// The predecessor graph contains a cycle.
    #[error("precedence graph contains a cycle")]
    CyclicDependency,

    /// The requested priority rule identifier is not recognized.
    #[error("unknown priority rule '{0}'")]
    UnknownRule(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottleneck_message_names_task_and_durations() {
        let err = BalanceError::Bottleneck {
            task_id: "B".into(),
            duration: 95,
            cycle_time: 80.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("'B'"));
        assert!(msg.contains("95"));
        assert!(msg.contains("80"));
    }

    #[test]
    fn test_unknown_rule_message() {
        let err = BalanceError::UnknownRule("LPT".into());
        assert!(err.to_string().contains("LPT"));
    }
}
