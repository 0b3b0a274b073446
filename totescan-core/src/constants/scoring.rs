//! Score Scale and Thresholds

/// Score given to a ratio of exactly 1.
pub const SCORE_MAX: f64 = 100.0;

/// Floor of the score scale.
pub const SCORE_MIN: f64 = 0.0;

/// Default minimum score every required test must exceed for a tote.
pub const DEFAULT_SCORE_MINIMUM: f64 = 75.0;

/// Default area filter: particles smaller than this percentage of the
/// image are dropped before ranking.
pub const DEFAULT_AREA_MINIMUM_PERCENT: f64 = 2.0;

/// Largest percentage of the image a particle can cover.
pub const MAX_AREA_PERCENT: f64 = 100.0;
