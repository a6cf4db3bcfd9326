//! Per-label IoU (Jaccard index).

use crate::matching::{MatchResult, MatchResultOneLabel};

use super::utils::safe_ratio;

/// Intersection over union: `tp / (tp + fp + fn)`.
pub fn iou(counts: &MatchResultOneLabel) -> f64 {
    let tp = u128::from(counts.tp);
    safe_ratio(tp, tp + u128::from(counts.fp) + u128::from(counts.fn_))
}

/// Compute the IoU of every label, in label order.
pub fn compute_per_label_iou(match_result: &MatchResult) -> Vec<f64> {
    match_result.match_per_label().iter().map(iou).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_iou() {
        assert_relative_eq!(iou(&MatchResultOneLabel::new(3, 3, 1)), 3.0 / 7.0);
        assert_relative_eq!(iou(&MatchResultOneLabel::new(2, 0, 3)), 0.4);
    }

    #[test]
    fn test_per_label_iou_order() {
        let match_result = MatchResult::new(
            vec![
                MatchResultOneLabel::new(0, 1, 1),
                MatchResultOneLabel::new(2, 0, 0),
                MatchResultOneLabel::default(),
            ],
            4,
        )
        .unwrap();

        assert_eq!(compute_per_label_iou(&match_result), vec![0.0, 1.0, 0.0]);
    }
}
