//! Metric kinds that can be requested and score names written in reports.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SegBenchError;

/// Metrics that can be included in the evaluation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestMetric {
    Accuracy,
    RecallPerLabel,
    F1ScorePerLabel,
    PrecisionPerLabel,
    IouPerLabel,
}

impl TestMetric {
    /// Every supported metric, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Accuracy,
        Self::RecallPerLabel,
        Self::F1ScorePerLabel,
        Self::PrecisionPerLabel,
        Self::IouPerLabel,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Accuracy => "accuracy",
            Self::RecallPerLabel => "recall_per_label",
            Self::F1ScorePerLabel => "f1_score_per_label",
            Self::PrecisionPerLabel => "precision_per_label",
            Self::IouPerLabel => "iou_per_label",
        }
    }

    /// Name under which the metric's values appear in a report.
    pub const fn score_name(&self) -> ScoreName {
        match self {
            Self::Accuracy => ScoreName::Accuracy,
            Self::RecallPerLabel => ScoreName::Recall,
            Self::F1ScorePerLabel => ScoreName::F1Score,
            Self::PrecisionPerLabel => ScoreName::Precision,
            Self::IouPerLabel => ScoreName::Iou,
        }
    }

    /// Whether the metric yields one value per label.
    pub const fn is_per_label(&self) -> bool {
        !matches!(self, Self::Accuracy)
    }
}

impl fmt::Display for TestMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestMetric {
    type Err = SegBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| SegBenchError::UnsupportedMetric {
                metric: s.to_owned(),
            })
    }
}

/// Name of a score as written in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreName {
    Accuracy,
    Precision,
    Recall,
    F1Score,
    Iou,
}

impl ScoreName {
    pub const ALL: [Self; 5] = [
        Self::Accuracy,
        Self::Precision,
        Self::Recall,
        Self::F1Score,
        Self::Iou,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Accuracy => "ACCURACY",
            Self::Precision => "PRECISION",
            Self::Recall => "RECALL",
            Self::F1Score => "F1_SCORE",
            Self::Iou => "IOU",
        }
    }
}

impl fmt::Display for ScoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
