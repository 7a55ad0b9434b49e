//! Assembly-line balancing engine.
//!
//! Partitions a precedence-constrained set of tasks into an ordered sequence
//! of workstations such that no station exceeds the cycle time (takt time)
//! derived from available time and demand. Assignment is a deterministic
//! greedy heuristic parameterized by a selectable priority rule, with a
//! step-by-step decision log for auditability.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TaskInput`, `Task`, `Station`, `AssignedTask`
//! - **`graph`**: Precedence-graph construction and transitive-successor metrics
//! - **`validation`**: Record integrity checks and cycle detection
//! - **`dispatching`**: Priority rules (RPW, SPT, successor-time variants, random)
//! - **`balancer`**: The greedy station-filling engine and balance report
//!
//! # Algorithm
//!
//! Graph build → bottleneck and cycle gates → repeated candidate scan,
//! rule-ranked selection, and capacity-bounded station fill → summary
//! statistics (theoretical minimum stations, line efficiency).
//!
//! # References
//!
//! - Helgeson & Birnie (1961), "Assembly Line Balancing Using the Ranked
//!   Positional Weight Technique"
//! - Scholl (1999), "Balancing and Sequencing of Assembly Lines"
//! - Baybars (1986), "A Survey of Exact Algorithms for the Simple Assembly
//!   Line Balancing Problem"

pub mod balancer;
pub mod dispatching;
pub mod error;
pub mod graph;
pub mod models;
pub mod validation;
