//! Shared helpers for the metric functions.

use crate::matching::{MatchResult, MatchResultOneLabel};

use super::{f_measure::f1_score, iou::iou, precision::precision, recall::recall};

/// Divides two counts, returning 0.0 when the denominator is zero.
///
/// Counts are widened to `u128` by the callers so that sums of `u64`
/// counts cannot overflow.
pub fn safe_ratio(numerator: u128, denominator: u128) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// All per-label ratios of a single label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelScores {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub iou: f64,
}

impl LabelScores {
    pub fn from_counts(counts: &MatchResultOneLabel) -> Self {
        Self {
            precision: precision(counts),
            recall: recall(counts),
            f1_score: f1_score(counts),
            iou: iou(counts),
        }
    }
}

/// Calculate every per-label ratio at once.
pub fn compute_all_label_scores(match_result: &MatchResult) -> Vec<LabelScores> {
    match_result
        .match_per_label()
        .iter()
        .map(LabelScores::from_counts)
        .collect()
}
