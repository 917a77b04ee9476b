//! Per-algorithm evaluation results and the comparison set.
//!
//! The scheduling service returns one result per registered algorithm:
//! either a full metric set or an error string, never both. Results are
//! collected into a [`ComparisonSet`], an insertion-ordered mapping —
//! the order is the determinism anchor for every tie-break downstream,
//! so the set is backed by an explicit ordered list rather than a hash map.

use serde::{Deserialize, Serialize};

use super::{Algorithm, MetricSet};

/// Outcome of evaluating one algorithm on one scenario.
///
/// An error marks the algorithm excluded from scoring for that scenario;
/// it does not affect the other entries in the same set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AlgorithmResult {
    /// Successful run with a full metric set.
    Metrics(MetricSet),
    /// Evaluation failed; the message describes why.
    Error(String),
}

impl AlgorithmResult {
    /// The metric set, if the run succeeded.
    pub fn metrics(&self) -> Option<&MetricSet> {
        match self {
            AlgorithmResult::Metrics(metrics) => Some(metrics),
            AlgorithmResult::Error(_) => None,
        }
    }

    /// Whether this result carries an error.
    pub fn is_error(&self) -> bool {
        matches!(self, AlgorithmResult::Error(_))
    }
}

/// Insertion-ordered mapping from algorithm to result.
///
/// Built fresh per scenario by the scheduling service, in registration
/// order (`Algorithm::ALL`), and never mutated after construction.
/// Iteration always follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSet {
    entries: Vec<(Algorithm, AlgorithmResult)>,
}

impl ComparisonSet {
    /// Creates an empty comparison set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a result for an algorithm.
    ///
    /// A duplicate key replaces the earlier result in place, keeping the
    /// algorithm's original position in the iteration order.
    pub fn insert(&mut self, algorithm: Algorithm, result: AlgorithmResult) {
        match self.entries.iter_mut().find(|(a, _)| *a == algorithm) {
            Some((_, existing)) => *existing = result,
            None => self.entries.push((algorithm, result)),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, algorithm: Algorithm, result: AlgorithmResult) -> Self {
        self.insert(algorithm, result);
        self
    }

    /// Returns the result for an algorithm, if present.
    pub fn get(&self, algorithm: Algorithm) -> Option<&AlgorithmResult> {
        self.entries
            .iter()
            .find(|(a, _)| *a == algorithm)
            .map(|(_, r)| r)
    }

    /// Iterates all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, &AlgorithmResult)> {
        self.entries.iter().map(|(a, r)| (*a, r))
    }

    /// Iterates non-error entries in insertion order.
    pub fn valid(&self) -> impl Iterator<Item = (Algorithm, &MetricSet)> {
        self.entries
            .iter()
            .filter_map(|(a, r)| r.metrics().map(|m| (*a, m)))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
