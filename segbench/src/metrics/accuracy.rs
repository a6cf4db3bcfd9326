//! Pixelwise accuracy, micro-averaged over all labels.

use crate::matching::MatchResult;

use super::utils::safe_ratio;

/// Compute the pixelwise accuracy: correctly labelled pixels over all pixels.
///
/// `nb_pixels` is positive for any [`MatchResult`] built through
/// [`MatchResult::new`], so the result lies in `[0, 1]`.
pub fn compute_pixelwise_accuracy(match_result: &MatchResult) -> f64 {
    safe_ratio(
        u128::from(match_result.total_tp()),
        u128::from(match_result.nb_pixels()),
    )
}
