use std::path::{Path, PathBuf};

use burn::prelude::*;

use crate::{
    error::{SegBenchError, SegBenchResult},
    matching::MatchResult,
    report::{generate_report, Report, TestMetric},
};

/// What to report and where to write it.
#[derive(Config, Debug)]
pub struct ReportConfig {
    /// Path of the report file.
    pub report_path: PathBuf,
    /// Metrics to include, in report order.
    #[config(default = "TestMetric::ALL.to_vec()")]
    pub metrics: Vec<TestMetric>,
}

impl ReportConfig {
    /// Loads a report configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SegBenchError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> SegBenchResult<Self> {
        let path = path.as_ref();
        Self::load(path).map_err(|e| SegBenchError::Config {
            reason: format!("{}: {e}", path.display()),
        })
    }

    /// Generates the configured report for `match_result`.
    ///
    /// # Errors
    ///
    /// See [`generate_report`].
    pub fn generate(&self, match_result: &MatchResult) -> SegBenchResult<Report> {
        generate_report(match_result, &self.metrics, &self.report_path)
    }
}
