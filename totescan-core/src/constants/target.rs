//! Tote Geometry
//!
//! Shape constants for the target tote. The aspect ratios are what the
//! camera sees when a face is presented square-on: face width over tote
//! height.

/// Width of the tote's long face (inches).
pub const TOTE_LONG_WIDTH_IN: f64 = 26.9;

/// Width of the tote's short face (inches).
pub const TOTE_SHORT_WIDTH_IN: f64 = 16.9;

/// Height of the tote (inches).
pub const TOTE_HEIGHT_IN: f64 = 12.1;

/// Expected bounding-box aspect ratio of the long face.
///
/// 26.9 / 12.1 = 2.22
pub const LONG_ASPECT_RATIO: f64 = 2.22;

/// Expected bounding-box aspect ratio of the short face.
///
/// 16.9 / 12.1 = 1.4
pub const SHORT_ASPECT_RATIO: f64 = 1.4;

/// Multiplier applied to particle area over convex hull area.
///
/// Thresholding loses pixels along the tote's edges, so a perfectly solid
/// tote measures around 85% of its hull. Scaling by 1.18 brings that back
/// near the ideal ratio of 1.
pub const HULL_FILL_CORRECTION: f64 = 1.18;

/// Expected convex hull area as a fraction of the bounding-box area.
///
/// The tote silhouette is a slight trapezoid, not a rectangle.
pub const TRAPEZOID_FILL_RATIO: f64 = 0.954;
