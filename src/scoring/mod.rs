//! Comparative scoring of algorithm results.
//!
//! Normalizes each algorithm's metrics against the best-in-set value,
//! computes a weighted composite score, resolves ties through a
//! deterministic cascade, and synthesizes the winner's rationale.
//!
//! # Usage
//!
//! ```
//! use u_schedeval::models::{Algorithm, AlgorithmResult, ComparisonSet, MetricSet};
//! use u_schedeval::scoring::ScoringEngine;
//!
//! let set = ComparisonSet::new()
//!     .with(Algorithm::Fcfs, AlgorithmResult::Metrics(MetricSet::new(10.0, 6.0, 4.0, 5.0, 2.0)))
//!     .with(Algorithm::Sjf, AlgorithmResult::Metrics(MetricSet::new(12.0, 6.0, 4.0, 4.0, 0.0)));
//!
//! let best = ScoringEngine::new().best_algorithms(&set).unwrap();
//! assert_eq!(best.winner, Algorithm::Sjf);
//! ```
//!
//! # Determinism
//!
//! All folds iterate the comparison set in insertion order; first entry
//! wins metric ties and the earlier entry survives an exhausted tie-break
//! cascade. A fixed set and weight configuration always produce the same
//! winner and rationale.

mod engine;
pub mod rationale;
mod weights;

pub use engine::{Ranking, ScoringEngine, ENERGY_EPSILON, SCORE_EPSILON};
pub use weights::{WeightConfig, WeightError};
