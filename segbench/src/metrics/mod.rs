//! Metrics derived from the confusion counts of a [`MatchResult`](crate::MatchResult).
//!
//! Global metrics return a single value. Per-label metrics return one value
//! per label, aligned with `match_per_label` (index 0 is label 0).
//!
//! Ratios whose denominator is zero are reported as 0.0, never NaN.

pub mod accuracy;
pub mod f_measure;
pub mod iou;
pub mod precision;
pub mod recall;
pub mod utils;

pub use accuracy::*;
pub use f_measure::*;
pub use iou::*;
pub use precision::*;
pub use recall::*;
pub use utils::*;
