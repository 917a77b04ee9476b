//! Composite scoring and deterministic winner selection.
//!
//! # Algorithm
//!
//! 1. Drop errored entries; an all-error set has no ranking.
//! 2. Per metric, take the minimum value across the remaining entries;
//!    the first entry (in comparison-set order) achieving it is the
//!    canonical best holder.
//! 3. Normalize each value as `value / best` (a zero best substitutes
//!    denominator 1, so a zero-switch algorithm normalizes to 0).
//! 4. Composite score = Σ(normalized × weight); lower wins.
//! 5. Scores within [`SCORE_EPSILON`] are tied and fall to the cascade:
//!    raw energy, then context switches, then simplicity rank, then
//!    comparison-set order.
//!
//! Every iteration walks the comparison set in insertion order, so a
//! fixed input always produces the same winner.

use crate::models::{
    Algorithm, BestAlgorithms, ComparisonSet, Metric, MetricBest, MetricSet, TieBreak,
};

use super::rationale;
use super::weights::WeightConfig;

/// Composite-score gap below which two algorithms are considered tied.
pub const SCORE_EPSILON: f64 = 0.01;

/// Raw-energy gap required for the energy tie-break to discriminate.
pub const ENERGY_EPSILON: f64 = 0.001;

/// Winner and per-metric bests for one comparison set, before rationale
/// synthesis. Snapshot of the set it was computed from; not cached
/// across scenarios.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Best holder per metric, in `Metric::ALL` order.
    pub per_metric: [MetricBest; 5],
    /// Overall winner.
    pub winner: Algorithm,
    /// Cascade rule that decided the winner, if scores tied.
    pub tie_break: Option<TieBreak>,
}

impl Ranking {
    /// The best holder for the given metric.
    pub fn best_for(&self, metric: Metric) -> MetricBest {
        self.per_metric[metric.index()]
    }

    /// Whether the winner also holds the best for `metric`.
    pub fn winner_holds(&self, metric: Metric) -> bool {
        self.best_for(metric).algorithm == self.winner
    }

    /// Attaches a rationale to form the public record.
    pub fn into_best_algorithms(self, rationale: String) -> BestAlgorithms {
        BestAlgorithms {
            per_metric: self.per_metric,
            winner: self.winner,
            tie_break: self.tie_break,
            rationale,
        }
    }
}

/// Transient per-algorithm score. Discarded after winner selection.
struct ScoreRecord<'a> {
    algorithm: Algorithm,
    raw: &'a MetricSet,
    composite: f64,
}

/// Weighted composite scorer with a deterministic tie-break cascade.
///
/// # Example
///
/// ```
/// use u_schedeval::models::{Algorithm, AlgorithmResult, ComparisonSet, MetricSet};
/// use u_schedeval::scoring::ScoringEngine;
///
/// let set = ComparisonSet::new()
///     .with(Algorithm::Fcfs, AlgorithmResult::Metrics(MetricSet::new(10.0, 6.0, 4.0, 5.0, 2.0)))
///     .with(Algorithm::Sjf, AlgorithmResult::Metrics(MetricSet::new(12.0, 6.0, 4.0, 4.0, 0.0)));
///
/// let ranking = ScoringEngine::new().evaluate(&set).unwrap();
/// assert_eq!(ranking.winner, Algorithm::Sjf);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: WeightConfig,
    overrides: Vec<(Algorithm, WeightConfig)>,
}

impl ScoringEngine {
    /// Creates an engine with uniform weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base weight configuration.
    pub fn with_weights(mut self, weights: WeightConfig) -> Self {
        self.weights = weights;
        self
    }

    /// Overrides the weights for one algorithm.
    ///
    /// An explicit opt-in for family-specific weighting, keyed by the
    /// algorithm enum. An earlier override for the same algorithm is
    /// replaced.
    pub fn with_weight_override(mut self, algorithm: Algorithm, weights: WeightConfig) -> Self {
        match self.overrides.iter_mut().find(|(a, _)| *a == algorithm) {
            Some((_, existing)) => *existing = weights,
            None => self.overrides.push((algorithm, weights)),
        }
        self
    }

    /// The weights applied to the given algorithm.
    pub fn weights_for(&self, algorithm: Algorithm) -> &WeightConfig {
        self.overrides
            .iter()
            .find(|(a, _)| *a == algorithm)
            .map(|(_, w)| w)
            .unwrap_or(&self.weights)
    }

    /// Ranks the comparison set.
    ///
    /// Returns `None` when every entry carries an error (the
    /// no-valid-algorithms sentinel: no winner, no per-metric bests).
    pub fn evaluate(&self, set: &ComparisonSet) -> Option<Ranking> {
        let valid: Vec<(Algorithm, &MetricSet)> = set.valid().collect();
        let (first_algorithm, first_metrics) = *valid.first()?;

        // Per-metric bests: strict-less fold, first entry wins ties.
        let per_metric = Metric::ALL.map(|metric| {
            let mut best = MetricBest {
                algorithm: first_algorithm,
                value: first_metrics.get(metric),
            };
            for &(algorithm, metrics) in &valid[1..] {
                let value = metrics.get(metric);
                if value < best.value {
                    best = MetricBest { algorithm, value };
                }
            }
            best
        });

        let records: Vec<ScoreRecord> = valid
            .iter()
            .map(|&(algorithm, raw)| ScoreRecord {
                algorithm,
                raw,
                composite: self.composite(algorithm, raw, &per_metric),
            })
            .collect();

        let mut winner = &records[0];
        let mut tie_break = None;
        for challenger in &records[1..] {
            let diff = challenger.composite - winner.composite;
            if diff.abs() < SCORE_EPSILON {
                let (challenger_wins, rule) = cascade(winner, challenger);
                if challenger_wins {
                    winner = challenger;
                }
                tie_break = Some(rule);
            } else if diff < 0.0 {
                winner = challenger;
                tie_break = None;
            }
        }

        Some(Ranking {
            per_metric,
            winner: winner.algorithm,
            tie_break,
        })
    }

    /// Ranks the set and synthesizes the winner's rationale.
    ///
    /// Returns `None` for the all-error sentinel, which callers report
    /// as "N/A".
    pub fn best_algorithms(&self, set: &ComparisonSet) -> Option<BestAlgorithms> {
        let ranking = self.evaluate(set)?;
        let text = rationale::synthesize(&ranking, set);
        Some(ranking.into_best_algorithms(text))
    }

    fn composite(&self, algorithm: Algorithm, raw: &MetricSet, bests: &[MetricBest; 5]) -> f64 {
        let weights = self.weights_for(algorithm);
        Metric::ALL
            .iter()
            .map(|&metric| {
                let best = bests[metric.index()].value;
                let denominator = if best == 0.0 { 1.0 } else { best };
                (raw.get(metric) / denominator) * weights.get(metric)
            })
            .sum()
    }
}

/// Resolves a composite-score tie between the incumbent winner and a
/// challenger. Returns whether the challenger takes over, and the first
/// cascade rule that discriminated.
fn cascade(incumbent: &ScoreRecord, challenger: &ScoreRecord) -> (bool, TieBreak) {
    let energy_gap = incumbent.raw.total_energy - challenger.raw.total_energy;
    if energy_gap > ENERGY_EPSILON {
        return (true, TieBreak::Energy);
    }
    if energy_gap < -ENERGY_EPSILON {
        return (false, TieBreak::Energy);
    }

    if challenger.raw.context_switches < incumbent.raw.context_switches {
        return (true, TieBreak::ContextSwitches);
    }
    if challenger.raw.context_switches > incumbent.raw.context_switches {
        return (false, TieBreak::ContextSwitches);
    }

    let incumbent_rank = incumbent.algorithm.simplicity_rank();
    let challenger_rank = challenger.algorithm.simplicity_rank();
    if challenger_rank > incumbent_rank {
        return (true, TieBreak::Simplicity);
    }
    if challenger_rank < incumbent_rank {
        return (false, TieBreak::Simplicity);
    }

    // Earlier-encountered entry wins; never non-deterministic.
    (false, TieBreak::InsertionOrder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlgorithmResult;
    use proptest::prelude::*;

    fn metrics(c: f64, t: f64, w: f64, e: f64, s: f64) -> AlgorithmResult {
        AlgorithmResult::Metrics(MetricSet::new(c, t, w, e, s))
    }

    /// The worked two-algorithm example: composites 1.25 vs 0.84.
    fn worked_example() -> ComparisonSet {
        ComparisonSet::new()
            .with(Algorithm::Fcfs, metrics(10.0, 6.0, 4.0, 5.0, 2.0))
            .with(Algorithm::Sjf, metrics(12.0, 6.0, 4.0, 4.0, 0.0))
    }

    #[test]
    fn test_worked_example_winner() {
        let ranking = ScoringEngine::new().evaluate(&worked_example()).unwrap();
        assert_eq!(ranking.winner, Algorithm::Sjf);
        assert_eq!(ranking.tie_break, None);
    }

    #[test]
    fn test_worked_example_composites() {
        let engine = ScoringEngine::new();
        let set = worked_example();
        let valid: Vec<_> = set.valid().collect();
        let ranking = engine.evaluate(&set).unwrap();

        let composite_a = engine.composite(valid[0].0, valid[0].1, &ranking.per_metric);
        let composite_b = engine.composite(valid[1].0, valid[1].1, &ranking.per_metric);
        assert!((composite_a - 1.25).abs() < 1e-10);
        assert!((composite_b - 0.84).abs() < 1e-10);
    }

    #[test]
    fn test_per_metric_bests_first_wins() {
        // Turnaround and waiting tie; FCFS is first in the set and holds both.
        let ranking = ScoringEngine::new().evaluate(&worked_example()).unwrap();
        assert_eq!(ranking.best_for(Metric::CompletionTime).algorithm, Algorithm::Fcfs);
        assert_eq!(ranking.best_for(Metric::AvgTurnaround).algorithm, Algorithm::Fcfs);
        assert_eq!(ranking.best_for(Metric::AvgWaiting).algorithm, Algorithm::Fcfs);
        assert_eq!(ranking.best_for(Metric::TotalEnergy).algorithm, Algorithm::Sjf);
        assert_eq!(ranking.best_for(Metric::ContextSwitches).algorithm, Algorithm::Sjf);
    }

    #[test]
    fn test_all_errors_is_sentinel() {
        let set = ComparisonSet::new()
            .with(Algorithm::Fcfs, AlgorithmResult::Error("x".into()))
            .with(Algorithm::Sjf, AlgorithmResult::Error("y".into()));
        assert!(ScoringEngine::new().evaluate(&set).is_none());
    }

    #[test]
    fn test_errored_entry_excluded() {
        let set = ComparisonSet::new()
            .with(Algorithm::Fcfs, AlgorithmResult::Error("x".into()))
            .with(Algorithm::Sjf, metrics(12.0, 6.0, 4.0, 4.0, 0.0));
        let ranking = ScoringEngine::new().evaluate(&set).unwrap();
        assert_eq!(ranking.winner, Algorithm::Sjf);
    }

    #[test]
    fn test_zero_switch_normalizes_to_zero() {
        // Best context_switches is 0 → denominator 1 → no division panic,
        // and the zero-switch entry contributes 0 for that metric.
        let set = ComparisonSet::new()
            .with(Algorithm::Fcfs, metrics(10.0, 10.0, 10.0, 10.0, 0.0))
            .with(Algorithm::RoundRobin, metrics(10.0, 10.0, 10.0, 10.0, 5.0));
        let ranking = ScoringEngine::new().evaluate(&set).unwrap();
        assert_eq!(ranking.winner, Algorithm::Fcfs);
        assert_eq!(ranking.best_for(Metric::ContextSwitches).value, 0.0);
    }

    #[test]
    fn test_energy_tie_break_overrides_weights() {
        // Energy difference below the score epsilon but above the energy
        // epsilon: composites tie, cascade rule (a) must pick the
        // lower-energy entry even with a zero energy weight.
        let no_energy_weight = WeightConfig::default()
            .with_completion_time(0.25)
            .with_avg_turnaround(0.25)
            .with_avg_waiting(0.25)
            .with_total_energy(0.0)
            .with_context_switches(0.25);
        let set = ComparisonSet::new()
            .with(Algorithm::Fcfs, metrics(10.0, 5.0, 3.0, 6.01, 4.0))
            .with(Algorithm::Sjf, metrics(10.0, 5.0, 3.0, 6.0, 4.0));

        let ranking = ScoringEngine::new()
            .with_weights(no_energy_weight)
            .evaluate(&set)
            .unwrap();
        assert_eq!(ranking.winner, Algorithm::Sjf);
        assert_eq!(ranking.tie_break, Some(TieBreak::Energy));
    }

    #[test]
    fn test_context_switch_tie_break() {
        // Equal energy, different switch counts, tied composites.
        let set = ComparisonSet::new()
            .with(Algorithm::RoundRobin, metrics(10.0, 5.0, 3.0, 6.0, 4.0))
            .with(Algorithm::Srtf, metrics(10.0, 5.0, 3.0, 6.0, 3.99));
        let ranking = ScoringEngine::new().evaluate(&set).unwrap();
        assert_eq!(ranking.winner, Algorithm::Srtf);
        assert_eq!(ranking.tie_break, Some(TieBreak::ContextSwitches));
    }

    #[test]
    fn test_simplicity_tie_break() {
        // Fully identical metrics: energy and switches cannot discriminate,
        // so the simpler algorithm wins even from the second position.
        let set = ComparisonSet::new()
            .with(Algorithm::Mlfq, metrics(10.0, 5.0, 3.0, 6.0, 4.0))
            .with(Algorithm::Fcfs, metrics(10.0, 5.0, 3.0, 6.0, 4.0));
        let ranking = ScoringEngine::new().evaluate(&set).unwrap();
        assert_eq!(ranking.winner, Algorithm::Fcfs);
        assert_eq!(ranking.tie_break, Some(TieBreak::Simplicity));
    }

    #[test]
    fn test_earlier_entry_retained_on_full_tie() {
        // Identical metrics: energy and switches cannot discriminate.
        // With distinct simplicity ranks the cascade resolves at rule (c),
        // and the earlier, simpler entry is retained.
        let set = ComparisonSet::new()
            .with(Algorithm::Fcfs, metrics(10.0, 5.0, 3.0, 6.0, 4.0))
            .with(Algorithm::Mlfq, metrics(10.0, 5.0, 3.0, 6.0, 4.0));
        let ranking = ScoringEngine::new().evaluate(&set).unwrap();
        assert_eq!(ranking.winner, Algorithm::Fcfs);
        assert_eq!(ranking.tie_break, Some(TieBreak::Simplicity));
    }

    #[test]
    fn test_weight_override_keyed_by_algorithm() {
        // An energy-heavy override for SRTF changes only SRTF's score.
        let override_weights = WeightConfig::default()
            .with_completion_time(0.05)
            .with_avg_turnaround(0.05)
            .with_avg_waiting(0.05)
            .with_total_energy(0.8)
            .with_context_switches(0.05);
        let engine = ScoringEngine::new().with_weight_override(Algorithm::Srtf, override_weights);

        assert_eq!(engine.weights_for(Algorithm::Srtf), &override_weights);
        assert_eq!(engine.weights_for(Algorithm::Fcfs), &WeightConfig::default());
    }

    #[test]
    fn test_strict_win_clears_tie_break() {
        // First two entries tie (cascade fires), third wins outright:
        // the recorded tie-break must be cleared.
        let set = ComparisonSet::new()
            .with(Algorithm::Fcfs, metrics(10.0, 5.0, 3.0, 6.0, 4.0))
            .with(Algorithm::Sjf, metrics(10.0, 5.0, 3.0, 6.0, 4.0))
            .with(Algorithm::Srtf, metrics(5.0, 2.0, 1.0, 3.0, 1.0));
        let ranking = ScoringEngine::new().evaluate(&set).unwrap();
        assert_eq!(ranking.winner, Algorithm::Srtf);
        assert_eq!(ranking.tie_break, None);
    }

    proptest! {
        /// Repeated evaluation of a fixed set yields the same ranking.
        #[test]
        fn prop_deterministic(values in proptest::collection::vec(
            (0.0f64..1000.0, 0.0f64..1000.0, 0.0f64..1000.0, 0.0f64..1000.0, 0.0f64..100.0),
            1..6,
        )) {
            let mut set = ComparisonSet::new();
            for (i, &(c, t, w, e, s)) in values.iter().enumerate() {
                set.insert(Algorithm::ALL[i], metrics(c, t, w, e, s));
            }
            let engine = ScoringEngine::new();
            let first = engine.evaluate(&set);
            let second = engine.evaluate(&set);
            prop_assert_eq!(first, second);
        }

        /// No algorithm in the set beats a recorded per-metric best.
        #[test]
        fn prop_best_holder_optimal(values in proptest::collection::vec(
            (0.0f64..1000.0, 0.0f64..1000.0, 0.0f64..1000.0, 0.0f64..1000.0, 0.0f64..100.0),
            1..6,
        )) {
            let mut set = ComparisonSet::new();
            for (i, &(c, t, w, e, s)) in values.iter().enumerate() {
                set.insert(Algorithm::ALL[i], metrics(c, t, w, e, s));
            }
            let ranking = ScoringEngine::new().evaluate(&set).unwrap();
            for metric in Metric::ALL {
                let best = ranking.best_for(metric);
                for (_, m) in set.valid() {
                    prop_assert!(m.get(metric) >= best.value);
                }
            }
        }
    }
}
