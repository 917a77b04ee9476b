//! Scheduling algorithm registry.
//!
//! The evaluation framework compares a fixed set of CPU scheduling
//! algorithms. The set is a closed enum rather than free-form string keys:
//! registration order, stable identifiers, and simplicity ranks are all
//! compile-time facts, so tie resolution cannot drift when display
//! strings change.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5: CPU Scheduling

use serde::{Deserialize, Serialize};

/// A CPU scheduling algorithm known to the evaluation framework.
///
/// `Algorithm::ALL` defines the registration order used everywhere
/// determinism matters: comparison-set construction, per-metric best
/// selection, and the final insertion-order tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come First-Served (non-preemptive).
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Priority scheduling (non-preemptive).
    Priority,
    /// Round Robin (preemptive, quantum-driven).
    RoundRobin,
    /// Shortest Remaining Time First (preemptive SJF).
    Srtf,
    /// Multi-Level Feedback Queue (preemptive, adaptive).
    Mlfq,
}

impl Algorithm {
    /// All known algorithms in registration order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
        Algorithm::Srtf,
        Algorithm::Mlfq,
    ];

    /// Stable string identifier (wire key, lowercase).
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Priority => "priority",
            Algorithm::RoundRobin => "round_robin",
            Algorithm::Srtf => "srtf",
            Algorithm::Mlfq => "mlfq",
        }
    }

    /// Human-readable name for reports and rationale text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin => "Round Robin",
            Algorithm::Srtf => "SRTF",
            Algorithm::Mlfq => "MLFQ",
        }
    }

    /// Resolves a stable identifier back to an algorithm (case-insensitive).
    pub fn from_key(key: &str) -> Option<Algorithm> {
        let key = key.trim().to_ascii_lowercase();
        Algorithm::ALL.iter().copied().find(|a| a.key() == key)
    }

    /// Static simplicity rank used by the scoring tie-break cascade.
    ///
    /// Higher rank = simpler algorithm. Non-preemptive algorithms rank
    /// above preemptive ones, and fixed-policy algorithms above adaptive
    /// ones. Every registered algorithm has a rank, so there is no
    /// unlisted-identifier fallback.
    pub fn simplicity_rank(&self) -> u8 {
        match self {
            Algorithm::Fcfs => 6,
            Algorithm::Sjf => 5,
            Algorithm::Priority => 4,
            Algorithm::RoundRobin => 3,
            Algorithm::Srtf => 2,
            Algorithm::Mlfq => 1,
        }
    }

    /// Whether the algorithm preempts a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::RoundRobin | Algorithm::Srtf | Algorithm::Mlfq
        )
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
