//! Batch driver: ingestion → service → scoring → report.

use tracing::warn;

use crate::ingest::{self, IngestError};
use crate::models::{
    Algorithm, BatchReport, BatchResult, BatchSummary, ComparisonSet, ExtractedBests, Scenario,
};
use crate::scoring::ScoringEngine;

use super::{RunConfig, SchedulingService};

/// Evaluates every scenario of a batch text and aggregates the results.
///
/// Scenarios are processed sequentially in input order; a scenario-level
/// failure is recorded as an "N/A" row and never aborts the rest of the
/// batch. Callers needing finer control (progress, cancellation between
/// scenarios) can drive [`BatchAggregator::evaluate_scenario`] themselves.
///
/// # Example
///
/// ```no_run
/// use u_schedeval::batch::{BatchAggregator, RunConfig, SchedulingService};
///
/// fn run(service: impl SchedulingService) {
///     let aggregator = BatchAggregator::new(service);
///     let report = aggregator
///         .run("# S1\n1,0,5\n2,1,3", &RunConfig::default())
///         .unwrap();
///     assert_eq!(report.summary.total_scenarios, 1);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BatchAggregator<S> {
    service: S,
    engine: ScoringEngine,
}

impl<S: SchedulingService> BatchAggregator<S> {
    /// Creates an aggregator with a default (uniform-weight) engine.
    pub fn new(service: S) -> Self {
        Self {
            service,
            engine: ScoringEngine::new(),
        }
    }

    /// Sets the scoring engine.
    pub fn with_engine(mut self, engine: ScoringEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Runs the whole batch.
    ///
    /// # Errors
    /// Propagates [`IngestError`] before any service call; all later
    /// failures are recovered into "N/A" rows.
    pub fn run(&self, input: &str, config: &RunConfig) -> Result<BatchReport, IngestError> {
        let scenarios = ingest::parse_batch(input)?;

        let mut results = Vec::with_capacity(scenarios.len());
        for scenario in scenarios {
            results.push(self.evaluate_scenario(scenario, config));
        }

        let summary = summarize(&results);
        Ok(BatchReport { results, summary })
    }

    /// Evaluates a single scenario into a batch row.
    ///
    /// The scenario is consumed; only its name and process count survive
    /// into the row. Service failures and all-error comparison sets both
    /// yield an "N/A" row.
    pub fn evaluate_scenario(&self, scenario: Scenario, config: &RunConfig) -> BatchResult {
        let scenario_name = scenario.name.clone();
        let process_count = scenario.process_count();

        let comparison = match self.service.evaluate(scenario, config) {
            Ok(set) => set,
            Err(err) => {
                warn!(scenario = %scenario_name, error = %err, "scheduling service failed");
                return BatchResult {
                    scenario_name,
                    process_count,
                    comparison: ComparisonSet::new(),
                    bests: ExtractedBests::not_applicable(),
                };
            }
        };

        let bests = match self.engine.best_algorithms(&comparison) {
            Some(best) => ExtractedBests::from_best(&best),
            None => {
                warn!(scenario = %scenario_name, "no algorithm produced usable metrics");
                ExtractedBests::not_applicable()
            }
        };

        BatchResult {
            scenario_name,
            process_count,
            comparison,
            bests,
        }
    }
}

/// Totals and win distribution over the finished rows.
///
/// Wins count `bests.overall` ("N/A" rows excluded), sorted descending
/// by count; ties keep first-seen winner order.
fn summarize(results: &[BatchResult]) -> BatchSummary {
    let mut distribution: Vec<(Algorithm, usize)> = Vec::new();
    for result in results {
        if let Some(winner) = result.bests.overall {
            match distribution.iter_mut().find(|(a, _)| *a == winner) {
                Some((_, count)) => *count += 1,
                None => distribution.push((winner, 1)),
            }
        }
    }
    // Stable sort keeps first-seen order among equal counts.
    distribution.sort_by(|a, b| b.1.cmp(&a.1));

    BatchSummary {
        total_scenarios: results.len(),
        total_processes: results.iter().map(|r| r.process_count).sum(),
        win_distribution: distribution,
    }
}
