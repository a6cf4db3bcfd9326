//! # segbench
//!
//! Evaluation reports for semantic segmentation models.
//!
//! Given the per-label confusion counts of one evaluation run (true
//! positives, false positives, false negatives and the total pixel count),
//! this crate derives pixelwise accuracy and per-label precision, recall,
//! F1 score and IoU, and writes the requested subset to a JSON report.
//!
//! ```rust,no_run
//! use segbench::{generate_report, MatchResult, MatchResultOneLabel, TestMetric};
//!
//! # fn main() -> segbench::SegBenchResult<()> {
//! let match_result = MatchResult::new(
//!     vec![
//!         MatchResultOneLabel::new(3, 3, 1),
//!         MatchResultOneLabel::new(2, 0, 3),
//!     ],
//!     9,
//! )?;
//! generate_report(&match_result, &TestMetric::ALL, "report.json")?;
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod matching;
pub mod metrics;
pub mod report;


pub use config::ReportConfig;
pub use error::{SegBenchError, SegBenchResult};
pub use matching::{MatchResult, MatchResultOneLabel};
pub use metrics::{
    compute_all_label_scores, compute_per_label_f1score, compute_per_label_iou,
    compute_per_label_precision, compute_per_label_recall, compute_pixelwise_accuracy,
    LabelScores,
};
pub use report::{
    generate_report, Report, Score, ScoreName, TestMetric, GLOBAL_METRICS, PER_LABEL_METRICS,
};
