//! Particle measurements supplied by the upstream vision stage
//!
//! One [`ParticleMeasurement`] per connected region in the binarized frame.
//! The scoring core only reads these values; how they were measured is the
//! particle source's business.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest axis-aligned rectangle enclosing a particle, in pixels.
///
/// Image coordinates: x grows to the right, y grows downward. A well-formed
/// rectangle has `right > left` and `bottom > top`; degenerate rectangles can
/// still be represented and are scored as such.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingRect {
    /// Top edge (y)
    pub top: f64,
    /// Left edge (x)
    pub left: f64,
    /// Bottom edge (y)
    pub bottom: f64,
    /// Right edge (x)
    pub right: f64,
}

impl BoundingRect {
    /// Create from the four edges
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    /// Horizontal extent in pixels
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent in pixels
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Width times height
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Horizontal center in pixels
    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Width over height, `None` when the height is not positive
    pub fn aspect_ratio(&self) -> Option<f64> {
        let height = self.height();
        if height > 0.0 {
            Some(self.width() / height).filter(|ratio| ratio.is_finite())
        } else {
            None
        }
    }

    /// True when all four edges are finite numbers
    pub fn is_finite(&self) -> bool {
        [self.top, self.left, self.bottom, self.right].iter().all(|edge| edge.is_finite())
    }
}

/// Geometric features of one particle in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParticleMeasurement {
    /// Particle area as a percentage of the whole image (0-100)
    pub percent_area: f64,
    /// Particle area in pixels
    pub area: f64,
    /// Area of the particle's convex hull in pixels
    pub convex_hull_area: f64,
    /// Bounding rectangle
    pub bounds: BoundingRect,
}

impl ParticleMeasurement {
    /// Create a measurement
    pub fn new(percent_area: f64, area: f64, convex_hull_area: f64, bounds: BoundingRect) -> Self {
        Self { percent_area, area, convex_hull_area, bounds }
    }

    /// True when every measured value is a finite number.
    ///
    /// Degenerate but finite geometry (a zero-height box, an empty hull)
    /// still counts; it simply scores 0.
    pub fn is_finite(&self) -> bool {
        self.percent_area.is_finite()
            && self.area.is_finite()
            && self.convex_hull_area.is_finite()
            && self.bounds.is_finite()
    }
}
