//! Batch evaluation across workload scenarios.
//!
//! Drives ingestion, the external scheduling service, scoring, and
//! rationale synthesis over every scenario in a batch text, producing an
//! ordered report plus a win-distribution summary.
//!
//! # External Seam
//!
//! The scheduling/energy simulation itself is out of scope: it is
//! consumed through the [`SchedulingService`] trait. Implementations
//! return one entry per registered algorithm — per-algorithm failures
//! are data ([`crate::models::AlgorithmResult::Error`]), never `Err`;
//! `Err` is reserved for scenario-level transport failures.

mod aggregator;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ComparisonSet, Scenario};

pub use aggregator::BatchAggregator;

/// Scenario-level failure of the scheduling service.
///
/// Recorded as an "N/A" batch row; it never aborts the remaining
/// scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("scheduling service failed: {message}")]
pub struct ServiceError {
    /// What went wrong, as reported by the transport.
    pub message: String,
}

impl ServiceError {
    /// Creates a service error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Run parameters forwarded to the scheduling service.
///
/// # Defaults
///
/// ```
/// use u_schedeval::batch::RunConfig;
///
/// let config = RunConfig::default();
/// assert_eq!(config.quantum, 2);
/// assert_eq!(config.threshold, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Round Robin time quantum (ticks, ≥ 1).
    pub quantum: u32,
    /// Optional energy-model threshold.
    pub threshold: Option<f64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            quantum: 2,
            threshold: None,
        }
    }
}

impl RunConfig {
    /// Sets the Round Robin quantum (clamped to ≥ 1).
    pub fn with_quantum(mut self, quantum: u32) -> Self {
        self.quantum = quantum.max(1);
        self
    }

    /// Sets the energy-model threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

/// External scheduling/energy simulation engine.
///
/// `evaluate` consumes the scenario (it is used exactly once) and must
/// return one [`crate::models::AlgorithmResult`] per registered
/// algorithm, in registration order.
pub trait SchedulingService {
    /// Runs every registered algorithm against the scenario.
    fn evaluate(&self, scenario: Scenario, config: &RunConfig)
        -> Result<ComparisonSet, ServiceError>;
}
