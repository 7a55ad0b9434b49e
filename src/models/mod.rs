//! Balancing domain models.
//!
//! Provides the core data types for representing line-balancing problems
//! and solutions.
//!
//! | Type | Role |
//! |------|------|
//! | `TaskInput` | Raw task record as received from the caller |
//! | `Task` | Graph-enriched task with successor metrics |
//! | `Station` | An ordered group of tasks within one cycle-time budget |

mod station;
mod task;

pub use station::{AssignedTask, Station};
pub use task::{Task, TaskInput};
