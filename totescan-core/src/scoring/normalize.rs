//! Ratio to score normalization

use crate::constants::scoring::{SCORE_MAX, SCORE_MIN};

/// Convert a ratio whose ideal value is 1 into a 0-100 score.
///
/// Piecewise linear through (0, 0), (1, 100) and (2, 0); 0 everywhere
/// outside [0, 2]. A NaN or infinite ratio scores 0.
pub fn ratio_to_score(ratio: f64) -> f64 {
    if !ratio.is_finite() {
        return SCORE_MIN;
    }

    let score = SCORE_MAX * (1.0 - libm::fabs(1.0 - ratio));
    libm::fmax(SCORE_MIN, libm::fmin(score, SCORE_MAX))
}
