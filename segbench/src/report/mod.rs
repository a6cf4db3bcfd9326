//! Evaluation report assembled from a [`MatchResult`](crate::MatchResult).
//!
//! A report has two parts: global scores, and scores per label. It is
//! persisted as JSON:
//!
//! ```json
//! {
//!   "GLOBAL METRICS": [["ACCURACY", 0.5555555555555556]],
//!   "PER_LABEL_METRICS": {"0": [["RECALL", 0.75]], "1": [["RECALL", 0.4]]}
//! }
//! ```
//!
//! The two top-level keys are spelled differently on purpose: downstream
//! tooling reads them verbatim.

pub mod generator;
pub mod kind;

pub use generator::*;
pub use kind::*;
