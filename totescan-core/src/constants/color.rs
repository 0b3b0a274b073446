//! Tote Color Ranges
//!
//! HSV ranges (0-255 per channel) handed to the external color threshold
//! stage. The scoring core never reads pixels; these only travel with the
//! configuration snapshot so the threshold stage and the core agree on the
//! active color.

/// Yellow tote hue range.
pub const YELLOW_HUE: (u8, u8) = (40, 60);

/// Yellow tote saturation range.
pub const YELLOW_SATURATION: (u8, u8) = (150, 255);

/// Yellow tote value range.
pub const YELLOW_VALUE: (u8, u8) = (70, 255);

/// Green tote hue range.
pub const GREEN_HUE: (u8, u8) = (80, 120);

/// Green tote saturation range.
pub const GREEN_SATURATION: (u8, u8) = (70, 120);

/// Green tote value range.
pub const GREEN_VALUE: (u8, u8) = (20, 100);
