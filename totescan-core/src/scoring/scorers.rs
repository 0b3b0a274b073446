//! The four geometric tests
//!
//! Each test is a small stateless type implementing [`ParticleScorer`].
//! They read their tunables from the configuration snapshot they are handed,
//! never from globals.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classify::TargetFace;
use crate::config::VisionConfig;
use crate::constants::target::TRAPEZOID_FILL_RATIO;
use crate::particle::ParticleMeasurement;

use super::normalize::ratio_to_score;

/// One geometric test of a particle against the tote's expected shape
pub trait ParticleScorer {
    /// The test's ratio, ideally 1. `None` when a denominator is zero,
    /// negative or not finite.
    fn ratio(&self, particle: &ParticleMeasurement, config: &VisionConfig) -> Option<f64>;

    /// The test's score in [0, 100]; 0 for degenerate geometry.
    fn score(&self, particle: &ParticleMeasurement, config: &VisionConfig) -> f64 {
        self.ratio(particle, config).map_or(0.0, ratio_to_score)
    }
}

/// Only divide by something we can trust to be a positive number
fn positive(denominator: f64) -> Option<f64> {
    (denominator.is_finite() && denominator > 0.0).then_some(denominator)
}

/// How completely the particle fills its convex hull.
///
/// Large holes or ragged edges pull the score down.
#[derive(Debug, Clone, Copy, Default)]
pub struct HullFillScorer;

impl ParticleScorer for HullFillScorer {
    fn ratio(&self, particle: &ParticleMeasurement, config: &VisionConfig) -> Option<f64> {
        let hull = positive(particle.convex_hull_area)?;
        Some(particle.area / hull * config.hull_fill_correction)
    }
}

/// How closely the convex hull matches the tote's trapezoidal silhouette
/// within its bounding box.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrapezoidScorer;

impl ParticleScorer for TrapezoidScorer {
    fn ratio(&self, particle: &ParticleMeasurement, _config: &VisionConfig) -> Option<f64> {
        let expected_hull = positive(particle.bounds.area() * TRAPEZOID_FILL_RATIO)?;
        Some(particle.convex_hull_area / expected_hull)
    }
}

/// How closely the bounding box aspect ratio matches one face of the tote
#[derive(Debug, Clone, Copy)]
pub struct AspectScorer {
    face: TargetFace,
}

impl AspectScorer {
    /// Scorer for the given face
    pub fn new(face: TargetFace) -> Self {
        Self { face }
    }

    /// Scorer for the long face
    pub fn long() -> Self {
        Self::new(TargetFace::Long)
    }

    /// Scorer for the short face
    pub fn short() -> Self {
        Self::new(TargetFace::Short)
    }

    /// Which face this scorer looks for
    pub fn face(&self) -> TargetFace {
        self.face
    }
}

impl ParticleScorer for AspectScorer {
    fn ratio(&self, particle: &ParticleMeasurement, config: &VisionConfig) -> Option<f64> {
        let expected = match self.face {
            TargetFace::Long => config.long_ratio,
            TargetFace::Short => config.short_ratio,
        };
        let aspect = particle.bounds.aspect_ratio()?;
        Some(aspect / positive(expected)?)
    }
}

/// All four test scores for one particle, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreSet {
    /// Area over convex hull area, corrected for edge loss
    pub hull_fill: f64,
    /// Convex hull area over expected trapezoid area
    pub trapezoid: f64,
    /// Aspect ratio against the long face
    pub long_aspect: f64,
    /// Aspect ratio against the short face
    pub short_aspect: f64,
}

impl ScoreSet {
    /// Run every test on one particle
    pub fn compute(particle: &ParticleMeasurement, config: &VisionConfig) -> Self {
        Self {
            hull_fill: HullFillScorer.score(particle, config),
            trapezoid: TrapezoidScorer.score(particle, config),
            long_aspect: AspectScorer::long().score(particle, config),
            short_aspect: AspectScorer::short().score(particle, config),
        }
    }
}
