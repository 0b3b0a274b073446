//! Common test utilities for integration tests
//!
//! This module provides:
//! - Synthetic tote particles rendered through the same pinhole model the
//!   range estimator inverts
//! - Clutter particles that should never classify as a tote
//! - Recorded frame scenarios for replay through `MemorySource`

#![allow(dead_code)]

pub mod scenarios;

use totescan_core::{
    constants::{INCHES_PER_FOOT, TOTE_HEIGHT_IN},
    BoundingRect, ParticleMeasurement, TargetFace, VisionConfig,
};

/// Horizontal resolution used by most scenarios
pub const IMAGE_WIDTH_PX: u32 = 320;

/// Vertical resolution used by most scenarios
pub const IMAGE_HEIGHT_PX: u32 = 240;

/// Renders an ideal tote at a known distance into particle measurements
pub struct ToteGenerator {
    config: VisionConfig,
    image_width_px: u32,
    image_height_px: u32,
}

impl ToteGenerator {
    /// Generator for a camera described by `config`
    pub fn new(config: VisionConfig) -> Self {
        Self {
            config,
            image_width_px: IMAGE_WIDTH_PX,
            image_height_px: IMAGE_HEIGHT_PX,
        }
    }

    /// Use a different image resolution
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width_px = width;
        self.image_height_px = height;
        self
    }

    /// Pixels per inch at `distance_ft`, from the horizontal field of view
    fn pixels_per_inch(&self, distance_ft: f64) -> f64 {
        let half_angle = self.config.camera_view_angle_deg.to_radians() / 2.0;
        let visible_width_in = 2.0 * distance_ft * INCHES_PER_FOOT * half_angle.tan();
        self.image_width_px as f64 / visible_width_in
    }

    /// A tote face centered at `center_x`, with `fill` of its hull lit after
    /// thresholding (1.0 / 1.18 is a typical clean detection).
    pub fn tote(
        &self,
        face: TargetFace,
        distance_ft: f64,
        center_x: f64,
        fill: f64,
    ) -> ParticleMeasurement {
        let face_width_in = match face {
            TargetFace::Long => self.config.target_long_width_in,
            TargetFace::Short => self.config.target_short_width_in,
        };
        let ppi = self.pixels_per_inch(distance_ft);
        let width = face_width_in * ppi;
        let height = TOTE_HEIGHT_IN * ppi;

        let center_y = self.image_height_px as f64 / 2.0;
        let bounds = BoundingRect::new(
            center_y - height / 2.0,
            center_x - width / 2.0,
            center_y + height / 2.0,
            center_x + width / 2.0,
        );
        let hull = 0.954 * bounds.area();
        let image_area = (self.image_width_px * self.image_height_px) as f64;

        ParticleMeasurement::new(100.0 * hull * fill / image_area, hull * fill, hull, bounds)
    }

    /// A clean tote face in the middle of the image
    pub fn centered_tote(&self, face: TargetFace, distance_ft: f64) -> ParticleMeasurement {
        self.tote(face, distance_ft, self.image_width_px as f64 / 2.0, 1.0 / 1.18)
    }

    /// A solid square blob, the wrong shape for either face
    pub fn square_blob(&self, side_px: f64, left: f64) -> ParticleMeasurement {
        let bounds = BoundingRect::new(10.0, left, 10.0 + side_px, left + side_px);
        let area = bounds.area();
        let image_area = (self.image_width_px * self.image_height_px) as f64;
        ParticleMeasurement::new(100.0 * area / image_area, area, area, bounds)
    }

    /// A thin horizontal stripe, e.g. a strip of floor tape
    pub fn stripe(&self, length_px: f64) -> ParticleMeasurement {
        let bounds = BoundingRect::new(200.0, 0.0, 204.0, length_px);
        let area = bounds.area();
        let image_area = (self.image_width_px * self.image_height_px) as f64;
        ParticleMeasurement::new(100.0 * area / image_area, area, area, bounds)
    }
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}
