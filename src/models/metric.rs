//! Performance metrics produced by the scheduling service.
//!
//! Each algorithm run yields five scalar metrics, all lower-is-better:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion Time | Time at which the last process finishes |
//! | Avg Turnaround | Mean (completion − arrival) across processes |
//! | Avg Waiting | Mean (turnaround − burst) across processes |
//! | Total Energy | Modeled energy consumption over the run |
//! | Context Switches | CPU hand-offs between processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

/// One of the five scored metrics.
///
/// `Metric::ALL` fixes the evaluation order used for per-metric best
/// selection and weight application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Completion time of the whole workload.
    CompletionTime,
    /// Average turnaround time.
    AvgTurnaround,
    /// Average waiting time.
    AvgWaiting,
    /// Total modeled energy consumption.
    TotalEnergy,
    /// Number of context switches.
    ContextSwitches,
}

impl Metric {
    /// All metrics in evaluation order.
    pub const ALL: [Metric; 5] = [
        Metric::CompletionTime,
        Metric::AvgTurnaround,
        Metric::AvgWaiting,
        Metric::TotalEnergy,
        Metric::ContextSwitches,
    ];

    /// Position in `Metric::ALL` (used for fixed-size per-metric arrays).
    pub fn index(&self) -> usize {
        match self {
            Metric::CompletionTime => 0,
            Metric::AvgTurnaround => 1,
            Metric::AvgWaiting => 2,
            Metric::TotalEnergy => 3,
            Metric::ContextSwitches => 4,
        }
    }

    /// Human-readable name for rationale and report text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::CompletionTime => "completion time",
            Metric::AvgTurnaround => "average turnaround",
            Metric::AvgWaiting => "average waiting time",
            Metric::TotalEnergy => "energy consumption",
            Metric::ContextSwitches => "context switches",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The five metric values for one algorithm run.
///
/// All values are non-negative. Units are defined by the producing
/// scheduling service (time ticks, joule-equivalents, switch counts);
/// scoring only compares values of the same metric across algorithms,
/// so units never mix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    /// Completion time of the last process.
    pub completion_time: f64,
    /// Average turnaround time.
    pub avg_turnaround: f64,
    /// Average waiting time.
    pub avg_waiting: f64,
    /// Total modeled energy.
    pub total_energy: f64,
    /// Context switch count.
    pub context_switches: f64,
}

impl MetricSet {
    /// Creates a metric set from the five values in `Metric::ALL` order.
    pub fn new(
        completion_time: f64,
        avg_turnaround: f64,
        avg_waiting: f64,
        total_energy: f64,
        context_switches: f64,
    ) -> Self {
        Self {
            completion_time,
            avg_turnaround,
            avg_waiting,
            total_energy,
            context_switches,
        }
    }

    /// Returns the value for the given metric.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::CompletionTime => self.completion_time,
            Metric::AvgTurnaround => self.avg_turnaround,
            Metric::AvgWaiting => self.avg_waiting,
            Metric::TotalEnergy => self.total_energy,
            Metric::ContextSwitches => self.context_switches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_matches_fields() {
        let metrics = MetricSet::new(10.0, 6.0, 4.0, 5.0, 2.0);
        assert_eq!(metrics.get(Metric::CompletionTime), 10.0);
        assert_eq!(metrics.get(Metric::AvgTurnaround), 6.0);
        assert_eq!(metrics.get(Metric::AvgWaiting), 4.0);
        assert_eq!(metrics.get(Metric::TotalEnergy), 5.0);
        assert_eq!(metrics.get(Metric::ContextSwitches), 2.0);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, metric) in Metric::ALL.iter().enumerate() {
            assert_eq!(metric.index(), i);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let metrics = MetricSet::new(10.0, 6.0, 4.0, 5.0, 2.0);
        let json = serde_json::to_string(&metrics).unwrap();
        let back: MetricSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metrics);
    }
}
