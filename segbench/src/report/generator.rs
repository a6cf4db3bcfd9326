//! Report assembly and persistence.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use super::kind::{ScoreName, TestMetric};
use crate::{
    error::{SegBenchError, SegBenchResult},
    matching::MatchResult,
    metrics::{
        compute_per_label_f1score, compute_per_label_iou, compute_per_label_precision,
        compute_per_label_recall, compute_pixelwise_accuracy,
    },
};

/// Top-level key holding the global scores.
pub const GLOBAL_METRICS: &str = "GLOBAL METRICS";
/// Top-level key holding the per-label scores.
pub const PER_LABEL_METRICS: &str = "PER_LABEL_METRICS";

/// A `(score name, score value)` pair.
pub type Score = (ScoreName, f64);

/// Scores of one evaluation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Global scores, in the order the metrics were requested.
    /// For example `[(ACCURACY, 0.93)]`.
    #[serde(rename = "GLOBAL METRICS")]
    pub global_metrics: Vec<Score>,
    /// Scores of each label, in the order the metrics were requested.
    /// For example `{0: [(RECALL, 0.82), (PRECISION, 0.7)], 1: [...]}`.
    /// Labels are written as string keys in JSON.
    #[serde(rename = "PER_LABEL_METRICS")]
    pub per_label_metrics: BTreeMap<usize, Vec<Score>>,
}

impl Report {
    /// Computes the requested metrics, in order.
    ///
    /// # Errors
    ///
    /// Returns [`SegBenchError::EmptyMetricRequest`] if `metrics` is empty.
    pub fn build(match_result: &MatchResult, metrics: &[TestMetric]) -> SegBenchResult<Self> {
        if metrics.is_empty() {
            return Err(SegBenchError::EmptyMetricRequest);
        }

        let mut report = Self::default();
        for &metric in metrics {
            let score_name = metric.score_name();
            match metric {
                TestMetric::Accuracy => {
                    let acc = compute_pixelwise_accuracy(match_result);
                    tracing::debug!(%score_name, value = acc, "global score computed");
                    report.global_metrics.push((score_name, acc));
                }
                TestMetric::RecallPerLabel => {
                    report.add_per_label_scores(score_name, compute_per_label_recall(match_result));
                }
                TestMetric::PrecisionPerLabel => {
                    report.add_per_label_scores(
                        score_name,
                        compute_per_label_precision(match_result),
                    );
                }
                TestMetric::F1ScorePerLabel => {
                    report.add_per_label_scores(
                        score_name,
                        compute_per_label_f1score(match_result),
                    );
                }
                TestMetric::IouPerLabel => {
                    report.add_per_label_scores(score_name, compute_per_label_iou(match_result));
                }
            }
        }

        Ok(report)
    }

    /// Appends a score to the list of `label`, creating that list on first use.
    pub fn add_per_label_score(&mut self, label: usize, score_name: ScoreName, value: f64) {
        let scores = self.per_label_metrics.entry(label).or_insert_with(Vec::new);
        scores.push((score_name, value));
    }

    fn add_per_label_scores(&mut self, score_name: ScoreName, values: Vec<f64>) {
        tracing::debug!(%score_name, labels = values.len(), "per-label scores computed");
        for (label, value) in values.into_iter().enumerate() {
            self.add_per_label_score(label, score_name, value);
        }
    }

    /// Scores recorded for `label`, if any.
    pub fn label_scores(&self, label: usize) -> Option<&[Score]> {
        self.per_label_metrics.get(&label).map(Vec::as_slice)
    }

    /// Serializes the report to JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> SegBenchResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Writes the whole report to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be serialized or written.
    pub fn save(&self, path: impl AsRef<Path>) -> SegBenchResult<()> {
        let content = self.to_json()?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Loads a report previously written by [`Report::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> SegBenchResult<Self> {
        let content = fs::read_to_string(path)?;
        let report = serde_json::from_str(&content)?;
        Ok(report)
    }
}

/// Folder that must exist for a report to be written at `report_path`.
///
/// A bare file name resolves to the current folder.
fn report_parent(report_path: &Path) -> Option<PathBuf> {
    match report_path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Some(PathBuf::from(".")),
        Some(parent) => Some(parent.to_path_buf()),
        None => None,
    }
}

/// Generates the report of model performances and writes it to `report_path`.
///
/// The location is checked before anything is computed, and the report is
/// serialized completely before the single write, so a failure never leaves
/// a partial report behind.
///
/// # Errors
///
/// - [`SegBenchError::InvalidReportLocation`] if the parent folder of
///   `report_path` does not exist or is not a folder.
/// - [`SegBenchError::EmptyMetricRequest`] if `metrics` is empty.
/// - [`SegBenchError::Io`] if the write fails.
pub fn generate_report(
    match_result: &MatchResult,
    metrics: &[TestMetric],
    report_path: impl AsRef<Path>,
) -> SegBenchResult<Report> {
    let report_path = report_path.as_ref();

    let parent = report_parent(report_path).ok_or_else(|| SegBenchError::InvalidReportLocation {
        parent: report_path.to_path_buf(),
    })?;
    if !parent.is_dir() {
        return Err(SegBenchError::InvalidReportLocation { parent });
    }

    for (label, counts) in match_result.match_per_label().iter().enumerate() {
        if counts.is_empty() {
            tracing::warn!(label, "label has no match counts, its ratios are reported as 0");
        }
    }

    let report = Report::build(match_result, metrics)?;
    report.save(report_path)?;

    tracing::info!(
        path = %report_path.display(),
        metrics = metrics.len(),
        labels = match_result.nb_labels(),
        "evaluation report written",
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::matching::MatchResultOneLabel;

    fn two_label_result() -> MatchResult {
        MatchResult::new(
            vec![
                MatchResultOneLabel::new(3, 3, 1),
                MatchResultOneLabel::new(2, 0, 3),
            ],
            9,
        )
        .unwrap()
    }

    #[test]
    fn test_build_follows_request_order() {
        let report = Report::build(
            &two_label_result(),
            &[
                TestMetric::IouPerLabel,
                TestMetric::Accuracy,
                TestMetric::RecallPerLabel,
            ],
        )
        .unwrap();

        assert_eq!(report.global_metrics.len(), 1);
        assert_eq!(report.global_metrics[0].0, ScoreName::Accuracy);

        let names: Vec<_> = report
            .label_scores(0)
            .unwrap()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(names, vec![ScoreName::Iou, ScoreName::Recall]);
    }

    #[test]
    fn test_build_values() {
        let report = Report::build(&two_label_result(), &TestMetric::ALL).unwrap();

        assert_relative_eq!(report.global_metrics[0].1, 5.0 / 9.0);

        let label1 = report.label_scores(1).unwrap();
        assert_eq!(
            label1,
            &[
                (ScoreName::Recall, 0.4),
                (ScoreName::F1Score, 4.0 / 7.0),
                (ScoreName::Precision, 1.0),
                (ScoreName::Iou, 0.4),
            ]
        );
    }

    #[test]
    fn test_build_accuracy_only_has_no_labels() {
        let report = Report::build(&two_label_result(), &[TestMetric::Accuracy]).unwrap();
        assert!(report.per_label_metrics.is_empty());
    }

    #[test]
    fn test_build_empty_request() {
        assert!(matches!(
            Report::build(&two_label_result(), &[]),
            Err(SegBenchError::EmptyMetricRequest)
        ));
    }

    #[test]
    fn test_add_per_label_score_creates_entry() {
        let mut report = Report::default();
        assert!(report.label_scores(3).is_none());

        report.add_per_label_score(3, ScoreName::Recall, 0.5);
        report.add_per_label_score(3, ScoreName::Precision, 0.25);

        assert_eq!(
            report.label_scores(3).unwrap(),
            &[(ScoreName::Recall, 0.5), (ScoreName::Precision, 0.25)]
        );
        assert_eq!(report.per_label_metrics.len(), 1);
    }

    #[test]
    fn test_json_layout() {
        let report = Report::build(
            &two_label_result(),
            &[TestMetric::Accuracy, TestMetric::PrecisionPerLabel],
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&report.to_json().unwrap()).unwrap();

        assert_eq!(value[GLOBAL_METRICS][0][0], "ACCURACY");
        assert_eq!(value[PER_LABEL_METRICS]["0"][0][0], "PRECISION");
        assert_eq!(value[PER_LABEL_METRICS]["0"][0][1], 0.5);
        assert_eq!(value[PER_LABEL_METRICS]["1"][0][1], 1.0);
    }

    #[test]
    fn test_report_parent_of_bare_file_name() {
        assert_eq!(
            report_parent(Path::new("report.json")),
            Some(PathBuf::from("."))
        );
        assert_eq!(
            report_parent(Path::new("out/report.json")),
            Some(PathBuf::from("out"))
        );
    }
}
