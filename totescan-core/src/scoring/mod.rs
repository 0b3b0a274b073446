//! Shape Scoring
//!
//! ## Overview
//!
//! A particle is judged by four independent tests. Each test reduces the
//! particle to one ratio whose ideal value is 1, and the shared normalizer
//! turns that ratio into a 0-100 score:
//!
//! ```text
//! score
//!  100 |        /\
//!      |       /  \
//!   50 |      /    \
//!      |     /      \
//!    0 +----/--------\-----
//!          0    1    2    ratio
//! ```
//!
//! | Test         | Ratio                                         | Low score means            |
//! |--------------|-----------------------------------------------|----------------------------|
//! | Hull fill    | area / hull area × correction                 | holes, ragged edges        |
//! | Trapezoid    | hull area / (box area × 0.954)                | not tote-shaped            |
//! | Long aspect  | (width / height) / long ratio                 | not the long face          |
//! | Short aspect | (width / height) / short ratio                | not the short face         |
//!
//! ## Degenerate Geometry
//!
//! A zero convex hull, a zero-area bounding box or a zero height would make
//! the ratio undefined. Scorers report `None` for the ratio in that case and
//! the score is 0. No test ever yields NaN.
//!
//! ## Usage Example
//!
//! ```rust
//! use totescan_core::{BoundingRect, ParticleMeasurement, ScoreSet, VisionConfig};
//!
//! let particle = ParticleMeasurement::new(
//!     10.0,
//!     9_000.0,
//!     10_500.0,
//!     BoundingRect::new(0.0, 0.0, 50.0, 111.0),
//! );
//! let scores = ScoreSet::compute(&particle, &VisionConfig::default());
//!
//! assert!(scores.long_aspect > 99.0);
//! assert!(scores.long_aspect > scores.short_aspect);
//! ```

mod normalize;
mod scorers;

pub use normalize::ratio_to_score;
pub use scorers::{AspectScorer, HullFillScorer, ParticleScorer, ScoreSet, TrapezoidScorer};
