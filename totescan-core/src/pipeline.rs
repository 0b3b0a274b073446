//! Per-frame evaluation pipeline
//!
//! ## Stages
//!
//! ```text
//! particles ──> area filter ──> rank ──> score ──> classify ──> distance
//!                                 │
//!                                 └── empty: "no target", stop here
//! ```
//!
//! The area filter and the ranking run as one scan over the frame, so no
//! intermediate particle list is built.
//!
//! Every stage is a pure function of the particles, the image width and the
//! configuration snapshot. Nothing is remembered between frames, so the same
//! inputs always produce the same [`ClassificationResult`].
//!
//! ## Driving It From a Control Loop
//!
//! [`VisionLoop`] wraps a [`ParticleSource`] and runs [`evaluate`] on each
//! frame it yields. Call [`VisionLoop::tick`] once per control tick:
//!
//! ```rust
//! use totescan_core::{Frame, MemorySource, VisionConfig, VisionLoop};
//!
//! let frames = [Frame::new(320, vec![])];
//! let mut vision = VisionLoop::new(MemorySource::new(&frames));
//! let config = VisionConfig::default();
//!
//! match vision.tick(&config) {
//!     Ok(result) => assert!(!result.is_target),
//!     Err(nb::Error::WouldBlock) => {} // No frame yet, try next tick
//!     Err(nb::Error::Other(e)) => {}   // Source or config failure
//! }
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use core::fmt;

use crate::classify::classify;
use crate::config::VisionConfig;
use crate::distance::estimate_distance;
use crate::errors::{ConfigError, ConfigResult};
use crate::particle::ParticleMeasurement;
use crate::ranking::filtered_primary;
use crate::scoring::ScoreSet;
use crate::source::{ParticleSource, SourceError};

/// Everything learned about one frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassificationResult {
    /// Primary candidate passed every required test
    pub is_target: bool,
    /// Primary candidate looks like the long face
    pub is_long: bool,
    /// Test scores of the primary candidate
    pub scores: Option<ScoreSet>,
    /// The primary candidate itself
    pub primary: Option<ParticleMeasurement>,
    /// Estimated distance in feet; `None` when undefined
    pub distance_ft: Option<f64>,
    /// Horizontal center of the primary candidate in [-1, 1], negative is left
    pub aim_offset: Option<f64>,
    /// Particles measured in the frame
    pub particle_count: usize,
    /// Particles left after the area filter
    pub candidate_count: usize,
}

impl ClassificationResult {
    /// Result for a frame with nothing worth scoring
    pub fn no_target(particle_count: usize) -> Self {
        Self {
            is_target: false,
            is_long: false,
            scores: None,
            primary: None,
            distance_ft: None,
            aim_offset: None,
            particle_count,
            candidate_count: 0,
        }
    }
}

/// Score the particles of one frame.
///
/// Validates `config` first; that is the only way this fails. An empty
/// frame, or one where no particle passes the area filter, is a normal
/// "no target" result. Particles with a non-finite measurement never become
/// the primary candidate.
///
/// Does not allocate.
pub fn evaluate(
    particles: &[ParticleMeasurement],
    image_width_px: u32,
    config: &VisionConfig,
) -> ConfigResult<ClassificationResult> {
    if let Err(e) = config.validate() {
        log_warn!("Rejecting vision config: {}", e.parameter());
        return Err(e);
    }

    let (primary, candidate_count) = filtered_primary(particles, config.area_minimum_percent);
    log_debug!(
        "Frame: {} particles, {} above {}% area",
        particles.len(),
        candidate_count,
        config.area_minimum_percent
    );

    let Some(primary) = primary else {
        return Ok(ClassificationResult::no_target(particles.len()));
    };

    let scores = ScoreSet::compute(primary, config);
    let classification = classify(&scores, config.score_minimum);
    let distance_ft =
        estimate_distance(&primary.bounds, image_width_px, classification.face(), config);

    log_debug!(
        "Scores: trapezoid={} long={} short={} hull={} -> tote={}",
        scores.trapezoid,
        scores.long_aspect,
        scores.short_aspect,
        scores.hull_fill,
        classification.is_target
    );

    Ok(ClassificationResult {
        is_target: classification.is_target,
        is_long: classification.is_long,
        scores: Some(scores),
        primary: Some(*primary),
        distance_ft,
        aim_offset: aim_offset(primary, image_width_px),
        particle_count: particles.len(),
        candidate_count,
    })
}

/// Bounding box center mapped from [0, width] to [-1, 1]
fn aim_offset(particle: &ParticleMeasurement, image_width_px: u32) -> Option<f64> {
    if image_width_px == 0 {
        return None;
    }
    let half_width = f64::from(image_width_px) / 2.0;
    let offset = (particle.bounds.center_x() - half_width) / half_width;
    offset.is_finite().then_some(offset)
}

/// Failure of one vision loop tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopError<E> {
    /// The configuration snapshot was rejected
    Config(ConfigError),
    /// The particle source failed
    Source(SourceError<E>),
}

impl<E: fmt::Display> fmt::Display for LoopError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Config error: {}", e),
            Self::Source(e) => write!(f, "Source error: {}", e),
        }
    }
}

impl<E> From<ConfigError> for LoopError<E> {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Polls a particle source and evaluates each frame it yields
pub struct VisionLoop<S> {
    source: S,
}

impl<S, E> VisionLoop<S>
where
    S: ParticleSource<Error = SourceError<E>>,
{
    /// Drive the given source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Poll for one frame and evaluate it against `config`.
    ///
    /// `WouldBlock` when the source has no new frame this tick.
    pub fn tick(
        &mut self,
        config: &VisionConfig,
    ) -> nb::Result<ClassificationResult, LoopError<E>> {
        let frame = self
            .source
            .poll_frame()
            .map_err(|e| e.map(LoopError::Source))?;

        evaluate(&frame.particles, frame.image_width_px, config)
            .map_err(|e| nb::Error::Other(e.into()))
    }

    /// Borrow the underlying source
    pub fn source(&self) -> &S {
        &self.source
    }
}
