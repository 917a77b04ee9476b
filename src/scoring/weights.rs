//! Metric weight configuration.
//!
//! [`WeightConfig`] assigns one non-negative weight to each of the five
//! metrics. Weights must sum to 1; the default is uniform 0.20 across
//! all metrics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Metric;

/// Tolerance for the weights-sum-to-one check.
const SUM_TOLERANCE: f64 = 1e-6;

/// Invalid weight configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    /// A metric was assigned a negative weight.
    #[error("negative weight {weight} for {metric}")]
    Negative {
        /// The offending metric.
        metric: Metric,
        /// The negative value.
        weight: f64,
    },
    /// Weights do not sum to 1.
    #[error("weights sum to {sum}, expected 1.0")]
    SumMismatch {
        /// The actual sum.
        sum: f64,
    },
}

/// Per-metric scoring weights.
///
/// # Defaults
///
/// ```
/// use u_schedeval::scoring::WeightConfig;
///
/// let weights = WeightConfig::default();
/// assert!(weights.validate().is_ok());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_schedeval::scoring::WeightConfig;
///
/// let weights = WeightConfig::default()
///     .with_total_energy(0.4)
///     .with_context_switches(0.2)
///     .with_completion_time(0.2)
///     .with_avg_turnaround(0.1)
///     .with_avg_waiting(0.1);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    /// Weight for completion time.
    pub completion_time: f64,
    /// Weight for average turnaround.
    pub avg_turnaround: f64,
    /// Weight for average waiting time.
    pub avg_waiting: f64,
    /// Weight for total energy.
    pub total_energy: f64,
    /// Weight for context switches.
    pub context_switches: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            completion_time: 0.20,
            avg_turnaround: 0.20,
            avg_waiting: 0.20,
            total_energy: 0.20,
            context_switches: 0.20,
        }
    }
}

impl WeightConfig {
    /// Sets the completion-time weight.
    pub fn with_completion_time(mut self, weight: f64) -> Self {
        self.completion_time = weight;
        self
    }

    /// Sets the average-turnaround weight.
    pub fn with_avg_turnaround(mut self, weight: f64) -> Self {
        self.avg_turnaround = weight;
        self
    }

    /// Sets the average-waiting weight.
    pub fn with_avg_waiting(mut self, weight: f64) -> Self {
        self.avg_waiting = weight;
        self
    }

    /// Sets the total-energy weight.
    pub fn with_total_energy(mut self, weight: f64) -> Self {
        self.total_energy = weight;
        self
    }

    /// Sets the context-switches weight.
    pub fn with_context_switches(mut self, weight: f64) -> Self {
        self.context_switches = weight;
        self
    }

    /// Returns the weight for the given metric.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::CompletionTime => self.completion_time,
            Metric::AvgTurnaround => self.avg_turnaround,
            Metric::AvgWaiting => self.avg_waiting,
            Metric::TotalEnergy => self.total_energy,
            Metric::ContextSwitches => self.context_switches,
        }
    }

    /// Checks that all weights are non-negative and sum to 1.
    pub fn validate(&self) -> Result<(), WeightError> {
        for metric in Metric::ALL {
            let weight = self.get(metric);
            if weight < 0.0 {
                return Err(WeightError::Negative { metric, weight });
            }
        }
        let sum: f64 = Metric::ALL.iter().map(|&m| self.get(m)).sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(WeightError::SumMismatch { sum });
        }
        Ok(())
    }
}
