//! Composite tote decision
//!
//! Combines the four test scores of the primary candidate into a yes/no
//! answer plus the face the camera is most likely looking at.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scoring::ScoreSet;

/// Which face of the tote is presented to the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TargetFace {
    /// Long side facing the camera
    Long,
    /// Short side facing the camera
    Short,
}

/// Outcome of classifying one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Candidate passed every required test
    pub is_target: bool,
    /// Long face scored strictly better than the short face
    pub is_long: bool,
}

impl Classification {
    /// Presented face implied by the aspect scores
    pub fn face(&self) -> TargetFace {
        if self.is_long {
            TargetFace::Long
        } else {
            TargetFace::Short
        }
    }
}

/// Decide whether a candidate's scores describe a tote.
///
/// Trapezoid and hull fill must both beat `score_minimum`, and so must at
/// least one of the aspect scores. All comparisons are strict.
pub fn classify(scores: &ScoreSet, score_minimum: f64) -> Classification {
    let passes = |score: f64| score > score_minimum;

    let is_target = passes(scores.trapezoid)
        && (passes(scores.long_aspect) || passes(scores.short_aspect))
        && passes(scores.hull_fill);

    Classification {
        is_target,
        is_long: scores.long_aspect > scores.short_aspect,
    }
}
