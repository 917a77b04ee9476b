//! Process specification model.
//!
//! A process spec is the unit of workload input: arrival time, CPU burst,
//! and scheduling priority. Specs are immutable once created — the
//! scheduling service receives them as-is and all derived metrics are
//! computed externally.

use serde::{Deserialize, Serialize};

/// A single process in a workload scenario.
///
/// Times are integer ticks relative to the scenario start (t=0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Process identifier (positive, unique within its scenario).
    pub pid: u32,
    /// Arrival time (ticks, ≥ 0).
    pub arrival: u32,
    /// CPU burst time (ticks, ≥ 1).
    pub burst: u32,
    /// Scheduling priority (lower = more urgent, default 3).
    pub priority: i32,
}

impl ProcessSpec {
    /// Default priority assigned when input omits the priority field.
    pub const DEFAULT_PRIORITY: i32 = 3;

    /// Creates a process spec with the default priority.
    pub fn new(pid: u32, arrival: u32, burst: u32) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority: Self::DEFAULT_PRIORITY,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_priority() {
        let process = ProcessSpec::new(1, 0, 5);
        assert_eq!(process.priority, 3);
    }

    #[test]
    fn test_with_priority() {
        let process = ProcessSpec::new(2, 1, 3).with_priority(1);
        assert_eq!(process.pid, 2);
        assert_eq!(process.arrival, 1);
        assert_eq!(process.burst, 3);
        assert_eq!(process.priority, 1);
    }
}
