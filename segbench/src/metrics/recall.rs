//! Per-label recall.

use crate::matching::{MatchResult, MatchResultOneLabel};

use super::utils::safe_ratio;

/// `tp / (tp + fn)`, 0.0 for a label absent from the ground truth.
pub fn recall(counts: &MatchResultOneLabel) -> f64 {
    let tp = u128::from(counts.tp);
    safe_ratio(tp, tp + u128::from(counts.fn_))
}

/// Compute the recall of every label, in label order.
pub fn compute_per_label_recall(match_result: &MatchResult) -> Vec<f64> {
    match_result.match_per_label().iter().map(recall).collect()
}
