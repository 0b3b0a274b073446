//! Range estimation from apparent width
//!
//! ## Pinhole Model
//!
//! With a horizontal field of view θ, an object spanning a fraction of the
//! image width sits at
//!
//! ```text
//! normalized_width = 2 × pixel_width / image_width
//! distance         = (target_width / 2) / (normalized_width / 2 × tan(θ / 2))
//!                  = target_width / (normalized_width × tan(θ / 2))
//! ```
//!
//! `normalized_width` is the particle's width in normalized image
//! coordinates, where the full image spans [-1, 1].
//!
//! ## Units
//!
//! Tote widths are configured in inches and the estimate is reported in
//! feet, so the target width is divided by [`INCHES_PER_FOOT`] first.
//!
//! [`INCHES_PER_FOOT`]: crate::constants::INCHES_PER_FOOT

use crate::classify::TargetFace;
use crate::config::VisionConfig;
use crate::constants::camera::INCHES_PER_FOOT;
use crate::particle::BoundingRect;

/// Estimated distance to the tote in feet.
///
/// `None` when the distance is undefined: zero image width, a bounding box
/// with no positive width, or anything that would make the result NaN or
/// infinite.
pub fn estimate_distance(
    bounds: &BoundingRect,
    image_width_px: u32,
    face: TargetFace,
    config: &VisionConfig,
) -> Option<f64> {
    if image_width_px == 0 {
        return None;
    }

    let normalized_width = 2.0 * bounds.width() / f64::from(image_width_px);
    if !normalized_width.is_finite() || normalized_width <= 0.0 {
        return None;
    }

    let target_width_in = match face {
        TargetFace::Long => config.target_long_width_in,
        TargetFace::Short => config.target_short_width_in,
    };
    let target_width_ft = target_width_in / INCHES_PER_FOOT;
    let half_angle_rad = config.camera_view_angle_deg.to_radians() / 2.0;

    let distance_ft = target_width_ft / (normalized_width * libm::tan(half_angle_rad));
    distance_ft.is_finite().then_some(distance_ft)
}
