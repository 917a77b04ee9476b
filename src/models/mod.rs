//! Evaluation domain models.
//!
//! Core data types for comparative scheduling-algorithm evaluation:
//! workload input (processes, scenarios), per-algorithm results, and
//! report records.
//!
//! # Data Flow
//!
//! | Stage | Types |
//! |-------|-------|
//! | Input | `ProcessSpec`, `Scenario` |
//! | Evaluation | `Algorithm`, `MetricSet`, `AlgorithmResult`, `ComparisonSet` |
//! | Output | `BestAlgorithms`, `BatchResult`, `BatchSummary`, `BatchReport` |

mod algorithm;
mod metric;
mod process;
mod report;
mod result;
mod scenario;

pub use algorithm::Algorithm;
pub use metric::{Metric, MetricSet};
pub use process::ProcessSpec;
pub use report::{
    BatchReport, BatchResult, BatchSummary, BestAlgorithms, ExtractedBests, MetricBest, TieBreak,
};
pub use result::{AlgorithmResult, ComparisonSet};
pub use scenario::Scenario;
