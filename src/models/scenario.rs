//! Workload scenario model.
//!
//! A scenario is a named, ordered set of process specifications evaluated
//! together. Scenarios are produced by ingestion (see [`crate::ingest`])
//! and consumed exactly once by the scheduling service; after evaluation
//! only the name and process count survive into the batch report.

use serde::{Deserialize, Serialize};

use super::ProcessSpec;

/// A named workload scenario.
///
/// Invariants (upheld by ingestion): `name` is non-empty and `processes`
/// contains at least one entry. Scenarios that end up with zero valid
/// processes are dropped before they reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name (from an input marker line, or "Scenario N").
    pub name: String,
    /// Processes in input order.
    pub processes: Vec<ProcessSpec>,
}

impl Scenario {
    /// Creates a scenario with the given name and processes.
    pub fn new(name: impl Into<String>, processes: Vec<ProcessSpec>) -> Self {
        Self {
            name: name.into(),
            processes,
        }
    }

    /// Number of processes in this scenario.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}
