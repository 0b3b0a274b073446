//! Core scoring engine for Totescan
//!
//! Identifies a tote among the particles measured in one camera frame and
//! estimates the range to it. Runs once per control tick on the robot
//! controller.
//!
//! Key constraints:
//! - No I/O, no blocking, no state carried between ticks
//! - Linear in the number of particles per frame, no allocation per frame
//! - Never returns a NaN or infinite number to the caller
//!
//! ```no_run
//! use totescan_core::{evaluate, BoundingRect, ParticleMeasurement, VisionConfig};
//!
//! let config = VisionConfig::default();
//! let particles = [ParticleMeasurement::new(
//!     12.0,
//!     19_000.0,
//!     20_400.0,
//!     BoundingRect::new(100.0, 60.0, 190.0, 260.0),
//! )];
//!
//! match evaluate(&particles, 320, &config) {
//!     Ok(result) if result.is_target => {}, // Drive toward it
//!     Ok(_) => {},                          // Nothing this frame
//!     Err(e) => {},                         // Bad config snapshot
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod classify;
pub mod config;
pub mod constants;
pub mod distance;
pub mod errors;
pub mod particle;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod source;

// Public API
pub use classify::{classify, Classification, TargetFace};
pub use config::{CameraModel, HsvRange, HsvThreshold, TargetColor, VisionConfig};
pub use distance::estimate_distance;
pub use errors::{ConfigError, ConfigResult};
pub use particle::{BoundingRect, ParticleMeasurement};
pub use pipeline::{evaluate, ClassificationResult, LoopError, VisionLoop};
pub use ranking::{
    filter_by_area, filtered_primary, passes_area_filter, primary_candidate, rank, Ranking,
};
pub use scoring::{
    ratio_to_score, AspectScorer, HullFillScorer, ParticleScorer, ScoreSet, TrapezoidScorer,
};
pub use source::{Frame, MemorySource, ParticleSource, SourceError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
