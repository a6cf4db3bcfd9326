//! Per-label F1 score.
//!
//! Computed directly from the counts as `2tp / (2tp + fp + fn)`, which equals
//! the harmonic mean of precision and recall whenever both are nonzero.

use crate::matching::{MatchResult, MatchResultOneLabel};

use super::utils::safe_ratio;

pub fn f1_score(counts: &MatchResultOneLabel) -> f64 {
    let double_tp = 2 * u128::from(counts.tp);
    safe_ratio(
        double_tp,
        double_tp + u128::from(counts.fp) + u128::from(counts.fn_),
    )
}

/// Compute the F1 score of every label, in label order.
pub fn compute_per_label_f1score(match_result: &MatchResult) -> Vec<f64> {
    match_result.match_per_label().iter().map(f1_score).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::metrics::{precision::precision, recall::recall};

    #[test]
    fn test_f1_score() {
        assert_relative_eq!(f1_score(&MatchResultOneLabel::new(3, 3, 1)), 0.6);
        assert_relative_eq!(f1_score(&MatchResultOneLabel::new(2, 0, 3)), 4.0 / 7.0);
    }

    #[test]
    fn test_f1_does_not_overflow() {
        assert_relative_eq!(
            f1_score(&MatchResultOneLabel::new(u64::MAX, u64::MAX, u64::MAX)),
            0.5
        );
    }

    #[test]
    fn test_f1_matches_harmonic_mean() {
        let counts = MatchResultOneLabel::new(7, 2, 5);
        let p = precision(&counts);
        let r = recall(&counts);

        assert_relative_eq!(f1_score(&counts), 2.0 * p * r / (p + r), epsilon = 1e-12);
    }

    #[test]
    fn test_f1_no_true_positive() {
        assert_eq!(f1_score(&MatchResultOneLabel::new(0, 3, 2)), 0.0);
        assert_eq!(f1_score(&MatchResultOneLabel::default()), 0.0);
    }
}
