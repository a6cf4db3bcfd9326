use std::path::PathBuf;

use thiserror::Error;

/// The error type for `segbench` operations.
///
/// Every variant is a caller-facing, synchronous failure. None of them are
/// transient, so callers are not expected to retry.
#[derive(Error, Debug)]
pub enum SegBenchError {
    /// The parent folder of the requested report path is missing or is not a folder.
    #[error("report path parent folder {} shall be an existing folder", parent.display())]
    InvalidReportLocation {
        /// The parent folder that failed the check.
        parent: PathBuf,
    },

    /// No metric was requested, so there is nothing to report.
    #[error("no metric requested: a report needs at least one metric")]
    EmptyMetricRequest,

    /// The requested metric is not one of the supported kinds.
    #[error("Unsupported metric: {metric}")]
    UnsupportedMetric {
        /// The name that was requested.
        metric: String,
    },

    /// Match counts violate one of the aggregate invariants.
    #[error("Invalid match result: {reason}")]
    InvalidMatchResult {
        /// The reason why the match result is invalid.
        reason: String,
    },

    /// A configuration file could not be loaded.
    #[error("Failed to load configuration: {reason}")]
    Config {
        /// The reason for the failure.
        reason: String,
    },

    /// Filesystem failure, forwarded as-is.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failure.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// A specialized `Result` type for `segbench` operations.
pub type SegBenchResult<T> = Result<T, SegBenchError>;
