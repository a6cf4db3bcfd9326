//! Match results between ground-truth masks and predictions.
//!
//! The counts are produced by the pixel matching step upstream and are
//! read-only once a [`MatchResult`] has been built.

use std::{fs, path::Path};

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::error::{SegBenchError, SegBenchResult};

/// Confusion counts of a single label for one evaluation run.
///
/// A label absent from both prediction and ground truth keeps all-zero counts.
#[derive(new, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResultOneLabel {
    /// Pixels correctly predicted as this label.
    pub tp: u64,
    /// Pixels predicted as this label but belonging to another one.
    pub fp: u64,
    /// Pixels of this label predicted as another one.
    #[serde(rename = "fn")]
    pub fn_: u64,
}

impl MatchResultOneLabel {
    /// True when the label was neither predicted nor present in the ground truth.
    pub const fn is_empty(&self) -> bool {
        self.tp == 0 && self.fp == 0 && self.fn_ == 0
    }
}

/// Matching results for all labels of one evaluation run.
///
/// The position in `match_per_label` is the label identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchResult")]
pub struct MatchResult {
    match_per_label: Vec<MatchResultOneLabel>,
    nb_pixels: u64,
}

#[derive(Deserialize)]
struct RawMatchResult {
    match_per_label: Vec<MatchResultOneLabel>,
    nb_pixels: u64,
}

impl TryFrom<RawMatchResult> for MatchResult {
    type Error = SegBenchError;

    fn try_from(raw: RawMatchResult) -> SegBenchResult<Self> {
        Self::new(raw.match_per_label, raw.nb_pixels)
    }
}

impl MatchResult {
    /// Builds a match result, checking the aggregate invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SegBenchError::InvalidMatchResult`] if `nb_pixels` is zero or
    /// if the true positives of all labels add up to more than `nb_pixels`.
    pub fn new(match_per_label: Vec<MatchResultOneLabel>, nb_pixels: u64) -> SegBenchResult<Self> {
        if nb_pixels == 0 {
            return Err(SegBenchError::InvalidMatchResult {
                reason: "nb_pixels must be positive".to_owned(),
            });
        }

        let total_tp = match_per_label
            .iter()
            .try_fold(0u64, |acc, m| acc.checked_add(m.tp))
            .ok_or_else(|| SegBenchError::InvalidMatchResult {
                reason: "sum of true positives overflows".to_owned(),
            })?;
        if total_tp > nb_pixels {
            return Err(SegBenchError::InvalidMatchResult {
                reason: format!(
                    "sum of true positives ({total_tp}) exceeds nb_pixels ({nb_pixels})"
                ),
            });
        }

        Ok(Self {
            match_per_label,
            nb_pixels,
        })
    }

    /// Loads a match result from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// violates the invariants checked by [`MatchResult::new`].
    pub fn load(path: impl AsRef<Path>) -> SegBenchResult<Self> {
        let content = fs::read_to_string(path)?;
        let match_result = serde_json::from_str(&content)?;
        Ok(match_result)
    }

    /// Counts of every label, indexed by label.
    pub fn match_per_label(&self) -> &[MatchResultOneLabel] {
        &self.match_per_label
    }

    /// Total number of evaluated pixels.
    pub const fn nb_pixels(&self) -> u64 {
        self.nb_pixels
    }

    /// Number of labels in the run.
    pub fn nb_labels(&self) -> usize {
        self.match_per_label.len()
    }

    /// Counts of a single label, if it exists.
    pub fn label(&self, label: usize) -> Option<&MatchResultOneLabel> {
        self.match_per_label.get(label)
    }

    /// Sum of true positives over all labels.
    pub fn total_tp(&self) -> u64 {
        self.match_per_label.iter().map(|m| m.tp).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_pixels() {
        let result = MatchResult::new(vec![MatchResultOneLabel::default()], 0);
        match result {
            Err(SegBenchError::InvalidMatchResult { reason }) => {
                assert!(reason.contains("nb_pixels"));
            }
            _ => panic!("Expected InvalidMatchResult error"),
        }
    }

    #[test]
    fn test_new_rejects_too_many_true_positives() {
        let result = MatchResult::new(
            vec![
                MatchResultOneLabel::new(5, 0, 0),
                MatchResultOneLabel::new(5, 0, 0),
            ],
            9,
        );
        assert!(matches!(
            result,
            Err(SegBenchError::InvalidMatchResult { .. })
        ));
    }

    #[test]
    fn test_new_accepts_all_zero_label() {
        let result = MatchResult::new(
            vec![
                MatchResultOneLabel::new(4, 0, 0),
                MatchResultOneLabel::default(),
            ],
            4,
        )
        .unwrap();

        assert_eq!(result.nb_labels(), 2);
        assert!(result.label(1).unwrap().is_empty());
        assert_eq!(result.total_tp(), 4);
    }

    #[test]
    fn test_deserialize_uses_fn_key() {
        let json = r#"{"match_per_label":[{"tp":3,"fp":3,"fn":1},{"tp":2,"fp":0,"fn":3}],"nb_pixels":9}"#;
        let result: MatchResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.nb_pixels(), 9);
        assert_eq!(result.match_per_label()[0], MatchResultOneLabel::new(3, 3, 1));
        assert_eq!(result.match_per_label()[1].fn_, 3);
    }

    #[test]
    fn test_deserialize_validates_invariants() {
        let json = r#"{"match_per_label":[{"tp":3,"fp":0,"fn":0}],"nb_pixels":0}"#;
        assert!(serde_json::from_str::<MatchResult>(json).is_err());

        let negative = r#"{"match_per_label":[{"tp":-1,"fp":0,"fn":0}],"nb_pixels":4}"#;
        assert!(serde_json::from_str::<MatchResult>(negative).is_err());
    }
}
