//! Constants for Totescan Core
//!
//! Every numeric value the scoring core depends on is defined here, with the
//! physical measurement or datasheet figure it comes from.
//!
//! ## Organization
//!
//! - **Target**: tote dimensions and the shape ratios derived from them
//! - **Camera**: horizontal view angles of supported cameras, unit conversion
//! - **Scoring**: score scale, default thresholds
//! - **Color**: HSV threshold ranges for each tote color
//!
//! ## Units
//!
//! Physical lengths are in inches, distances reported to the caller are in
//! feet, angles are in degrees unless the name says otherwise.

/// Tote geometry and the ratios scored against it.
pub mod target;

/// Camera view angles and length conversion.
pub mod camera;

/// Score scale and acceptance thresholds.
pub mod scoring;

/// HSV threshold ranges for tote colors.
pub mod color;

// Re-export commonly used constants for convenience
pub use target::{
    TOTE_LONG_WIDTH_IN, TOTE_SHORT_WIDTH_IN, TOTE_HEIGHT_IN,
    LONG_ASPECT_RATIO, SHORT_ASPECT_RATIO,
    HULL_FILL_CORRECTION, TRAPEZOID_FILL_RATIO,
};

pub use camera::{INCHES_PER_FOOT, VIEW_ANGLE_AXIS_M1011_DEG};

pub use scoring::{
    SCORE_MAX, SCORE_MIN, DEFAULT_SCORE_MINIMUM, DEFAULT_AREA_MINIMUM_PERCENT, MAX_AREA_PERCENT,
};
