//! Evaluation report models.
//!
//! Output records produced by the scoring engine and batch aggregator,
//! shaped for a presentation layer: per-metric winners, the overall
//! winner with its rationale, and batch-level summaries.

use serde::{Deserialize, Serialize};

use super::{Algorithm, ComparisonSet, Metric};

/// The best holder for one metric: the first algorithm (in comparison-set
/// order) achieving the minimum value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricBest {
    /// The algorithm holding the best value.
    pub algorithm: Algorithm,
    /// The best (minimum) raw value.
    pub value: f64,
}

/// Which tie-break cascade rule resolved the overall winner.
///
/// Absent when the winner won on composite score alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// Strictly lower raw total energy.
    Energy,
    /// Strictly lower context-switch count.
    ContextSwitches,
    /// Higher static simplicity rank.
    Simplicity,
    /// Earlier position in the comparison set.
    InsertionOrder,
}

/// Best-algorithm snapshot for one comparison set.
///
/// Valid only for the set it was computed from; recomputing with a
/// different set invalidates it. There is no caching across scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestAlgorithms {
    /// Best holder per metric, in `Metric::ALL` order.
    pub per_metric: [MetricBest; 5],
    /// Overall winner by composite score (and cascade, if needed).
    pub winner: Algorithm,
    /// Cascade rule that decided the winner, if composite scores tied.
    pub tie_break: Option<TieBreak>,
    /// Human-readable justification for the winner.
    pub rationale: String,
}

impl BestAlgorithms {
    /// The best holder for the given metric.
    pub fn best_for(&self, metric: Metric) -> MetricBest {
        self.per_metric[metric.index()]
    }

    /// Whether the overall winner also holds the best for `metric`.
    pub fn winner_holds(&self, metric: Metric) -> bool {
        self.best_for(metric).algorithm == self.winner
    }
}

/// Per-scenario bests extracted into the batch report.
///
/// `overall` is `None` when the scenario produced no scorable algorithm
/// (rendered as "N/A" downstream).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedBests {
    /// Overall winner, if any algorithm was scorable.
    pub overall: Option<Algorithm>,
    /// Rationale for the overall winner.
    pub rationale: Option<String>,
    /// Best completion-time holder.
    pub completion: Option<Algorithm>,
    /// Best total-energy holder.
    pub energy: Option<Algorithm>,
    /// Best average-turnaround holder.
    pub turnaround: Option<Algorithm>,
}

impl ExtractedBests {
    /// The "N/A" record for scenarios with no scorable algorithms.
    pub fn not_applicable() -> Self {
        Self {
            overall: None,
            rationale: None,
            completion: None,
            energy: None,
            turnaround: None,
        }
    }

    /// Extracts the reported fields from a full best-algorithms record.
    pub fn from_best(best: &BestAlgorithms) -> Self {
        Self {
            overall: Some(best.winner),
            rationale: Some(best.rationale.clone()),
            completion: Some(best.best_for(Metric::CompletionTime).algorithm),
            energy: Some(best.best_for(Metric::TotalEnergy).algorithm),
            turnaround: Some(best.best_for(Metric::AvgTurnaround).algorithm),
        }
    }
}

/// One scenario's row in the batch report. Append-only: never revised
/// once added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Scenario name from ingestion.
    pub scenario_name: String,
    /// Number of processes the scenario held.
    pub process_count: usize,
    /// The full per-algorithm results for presentation.
    pub comparison: ComparisonSet,
    /// Extracted winners for the comparison table.
    pub bests: ExtractedBests,
}

/// Batch-level totals and win distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of scenarios evaluated (including "N/A" rows).
    pub total_scenarios: usize,
    /// Total processes across all scenarios.
    pub total_processes: usize,
    /// Overall-win counts, sorted descending; ties keep first-seen order.
    pub win_distribution: Vec<(Algorithm, usize)>,
}

/// Complete output of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Per-scenario results in original input order.
    pub results: Vec<BatchResult>,
    /// Aggregated summary.
    pub summary: BatchSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_best() -> BestAlgorithms {
        BestAlgorithms {
            per_metric: [
                MetricBest {
                    algorithm: Algorithm::Fcfs,
                    value: 10.0,
                },
                MetricBest {
                    algorithm: Algorithm::Sjf,
                    value: 6.0,
                },
                MetricBest {
                    algorithm: Algorithm::Sjf,
                    value: 4.0,
                },
                MetricBest {
                    algorithm: Algorithm::RoundRobin,
                    value: 5.0,
                },
                MetricBest {
                    algorithm: Algorithm::Fcfs,
                    value: 2.0,
                },
            ],
            winner: Algorithm::Sjf,
            tie_break: None,
            rationale: "SJF wins".into(),
        }
    }

    #[test]
    fn test_best_for_indexing() {
        let best = sample_best();
        assert_eq!(best.best_for(Metric::CompletionTime).algorithm, Algorithm::Fcfs);
        assert_eq!(best.best_for(Metric::TotalEnergy).algorithm, Algorithm::RoundRobin);
        assert!(best.winner_holds(Metric::AvgTurnaround));
        assert!(!best.winner_holds(Metric::ContextSwitches));
    }

    #[test]
    fn test_extracted_bests_from_best() {
        let bests = ExtractedBests::from_best(&sample_best());
        assert_eq!(bests.overall, Some(Algorithm::Sjf));
        assert_eq!(bests.completion, Some(Algorithm::Fcfs));
        assert_eq!(bests.energy, Some(Algorithm::RoundRobin));
        assert_eq!(bests.turnaround, Some(Algorithm::Sjf));
        assert_eq!(bests.rationale.as_deref(), Some("SJF wins"));
    }

    #[test]
    fn test_not_applicable() {
        let bests = ExtractedBests::not_applicable();
        assert_eq!(bests.overall, None);
        assert_eq!(bests.rationale, None);
    }
}
