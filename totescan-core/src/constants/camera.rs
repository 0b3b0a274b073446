//! Camera Constants
//!
//! Horizontal view angles (degrees) for cameras commonly mounted on the
//! robot. The range estimate is only as good as this angle.

/// Axis M1011 horizontal view angle (degrees). Default camera.
pub const VIEW_ANGLE_AXIS_M1011_DEG: f64 = 49.4;

/// Axis M1013 horizontal view angle (degrees).
pub const VIEW_ANGLE_AXIS_M1013_DEG: f64 = 64.0;

/// Axis 206 horizontal view angle (degrees).
pub const VIEW_ANGLE_AXIS_206_DEG: f64 = 51.7;

/// Microsoft LifeCam HD-3000 at a square resolution (degrees).
pub const VIEW_ANGLE_HD3000_SQUARE_DEG: f64 = 52.0;

/// Microsoft LifeCam HD-3000 at 640x480 (degrees).
pub const VIEW_ANGLE_HD3000_640X480_DEG: f64 = 60.0;

/// Target widths are given in inches, distances are reported in feet.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Largest view angle the pinhole model accepts (exclusive).
pub const MAX_VIEW_ANGLE_DEG: f64 = 180.0;
