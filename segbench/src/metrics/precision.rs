//! Per-label precision.

use crate::matching::{MatchResult, MatchResultOneLabel};

use super::utils::safe_ratio;

/// `tp / (tp + fp)`, 0.0 for a label that was never predicted.
pub fn precision(counts: &MatchResultOneLabel) -> f64 {
    let tp = u128::from(counts.tp);
    safe_ratio(tp, tp + u128::from(counts.fp))
}

/// Compute the precision of every label, in label order.
pub fn compute_per_label_precision(match_result: &MatchResult) -> Vec<f64> {
    match_result.match_per_label().iter().map(precision).collect()
}
