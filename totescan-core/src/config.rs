//! Configuration snapshot for one evaluation
//!
//! [`VisionConfig`] holds every tunable the scoring core reads. The caller
//! takes a snapshot at the start of a control tick and passes it by shared
//! reference, so it cannot change while a frame is being scored.
//!
//! ```rust
//! use totescan_core::{CameraModel, TargetColor, VisionConfig};
//!
//! let config = VisionConfig::for_camera(CameraModel::AxisM1013)
//!     .with_target_color(TargetColor::Green);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.camera_view_angle_deg, 64.0);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{camera, color, scoring, target};
use crate::errors::{ConfigError, ConfigResult};

/// Tunables for particle scoring, classification and range estimation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisionConfig {
    /// Particles covering less of the image than this (percent) are ignored
    pub area_minimum_percent: f64,

    /// Every required score must be strictly above this to call a tote
    pub score_minimum: f64,

    /// Expected width/height of the long face
    pub long_ratio: f64,

    /// Expected width/height of the short face
    pub short_ratio: f64,

    /// Multiplier on area / convex hull area, compensating for edge loss
    pub hull_fill_correction: f64,

    /// Physical width of the long face (inches)
    pub target_long_width_in: f64,

    /// Physical width of the short face (inches)
    pub target_short_width_in: f64,

    /// Horizontal view angle of the camera (degrees)
    pub camera_view_angle_deg: f64,

    /// Tote color the upstream threshold stage is looking for
    pub target_color: TargetColor,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            area_minimum_percent: scoring::DEFAULT_AREA_MINIMUM_PERCENT,
            score_minimum: scoring::DEFAULT_SCORE_MINIMUM,
            long_ratio: target::LONG_ASPECT_RATIO,
            short_ratio: target::SHORT_ASPECT_RATIO,
            hull_fill_correction: target::HULL_FILL_CORRECTION,
            target_long_width_in: target::TOTE_LONG_WIDTH_IN,
            target_short_width_in: target::TOTE_SHORT_WIDTH_IN,
            camera_view_angle_deg: camera::VIEW_ANGLE_AXIS_M1011_DEG,
            target_color: TargetColor::Yellow,
        }
    }
}

impl VisionConfig {
    /// Defaults with the view angle of a specific camera
    pub fn for_camera(camera: CameraModel) -> Self {
        Self {
            camera_view_angle_deg: camera.view_angle_deg(),
            ..Self::default()
        }
    }

    /// Same snapshot looking for a different tote color
    pub fn with_target_color(self, target_color: TargetColor) -> Self {
        Self { target_color, ..self }
    }

    /// Check the snapshot once before it is used for a frame.
    ///
    /// Fails on the first offending field, in declaration order.
    pub fn validate(&self) -> ConfigResult<()> {
        check_range(
            "area_minimum_percent",
            self.area_minimum_percent,
            0.0,
            scoring::MAX_AREA_PERCENT,
        )?;
        check_range("score_minimum", self.score_minimum, scoring::SCORE_MIN, scoring::SCORE_MAX)?;
        check_positive("long_ratio", self.long_ratio)?;
        check_positive("short_ratio", self.short_ratio)?;
        check_positive("hull_fill_correction", self.hull_fill_correction)?;
        check_positive("target_long_width_in", self.target_long_width_in)?;
        check_positive("target_short_width_in", self.target_short_width_in)?;

        let angle = self.camera_view_angle_deg;
        if !angle.is_finite() {
            return Err(ConfigError::NotFinite { parameter: "camera_view_angle_deg" });
        }
        // Open interval: tan(90°) is unbounded and 0° sees nothing
        if angle <= 0.0 || angle >= camera::MAX_VIEW_ANGLE_DEG {
            return Err(ConfigError::OutOfRange {
                parameter: "camera_view_angle_deg",
                value: angle,
                min: 0.0,
                max: camera::MAX_VIEW_ANGLE_DEG,
            });
        }

        Ok(())
    }

    /// HSV ranges for the configured tote color
    pub fn threshold(&self) -> HsvThreshold {
        self.target_color.threshold()
    }
}

fn check_finite(parameter: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { parameter })
    }
}

fn check_positive(parameter: &'static str, value: f64) -> ConfigResult<()> {
    check_finite(parameter, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { parameter, value })
    }
}

fn check_range(parameter: &'static str, value: f64, min: f64, max: f64) -> ConfigResult<()> {
    check_finite(parameter, value)?;
    if value < min || value > max {
        Err(ConfigError::OutOfRange { parameter, value, min, max })
    } else {
        Ok(())
    }
}

/// Cameras with a known horizontal view angle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CameraModel {
    /// Axis M1011, 49.4°
    AxisM1011,
    /// Axis M1013, 64°
    AxisM1013,
    /// Axis 206, 51.7°
    Axis206,
    /// LifeCam HD-3000 at a square resolution, 52°
    LifeCamHd3000Square,
    /// LifeCam HD-3000 at 640x480, 60°
    LifeCamHd3000Wide,
}

impl CameraModel {
    /// Horizontal view angle in degrees
    pub fn view_angle_deg(self) -> f64 {
        match self {
            Self::AxisM1011 => camera::VIEW_ANGLE_AXIS_M1011_DEG,
            Self::AxisM1013 => camera::VIEW_ANGLE_AXIS_M1013_DEG,
            Self::Axis206 => camera::VIEW_ANGLE_AXIS_206_DEG,
            Self::LifeCamHd3000Square => camera::VIEW_ANGLE_HD3000_SQUARE_DEG,
            Self::LifeCamHd3000Wide => camera::VIEW_ANGLE_HD3000_640X480_DEG,
        }
    }
}

/// Tote colors the threshold stage can isolate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TargetColor {
    /// Yellow tote
    #[default]
    Yellow,
    /// Green tote
    Green,
}

impl TargetColor {
    /// HSV threshold for this color
    pub fn threshold(self) -> HsvThreshold {
        match self {
            Self::Yellow => HsvThreshold {
                hue: HsvRange::from(color::YELLOW_HUE),
                saturation: HsvRange::from(color::YELLOW_SATURATION),
                value: HsvRange::from(color::YELLOW_VALUE),
            },
            Self::Green => HsvThreshold {
                hue: HsvRange::from(color::GREEN_HUE),
                saturation: HsvRange::from(color::GREEN_SATURATION),
                value: HsvRange::from(color::GREEN_VALUE),
            },
        }
    }
}

/// Inclusive range on one HSV channel (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HsvRange {
    /// Lowest accepted channel value
    pub min: u8,
    /// Highest accepted channel value
    pub max: u8,
}

impl HsvRange {
    /// Whether a channel value falls inside the range
    pub fn contains(&self, channel: u8) -> bool {
        (self.min..=self.max).contains(&channel)
    }
}

impl From<(u8, u8)> for HsvRange {
    fn from((min, max): (u8, u8)) -> Self {
        Self { min, max }
    }
}

/// Hue, saturation and value ranges for one tote color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HsvThreshold {
    /// Hue range
    pub hue: HsvRange,
    /// Saturation range
    pub saturation: HsvRange,
    /// Value range
    pub value: HsvRange,
}

impl HsvThreshold {
    /// Whether an HSV pixel would be kept by the threshold stage
    pub fn matches(&self, hue: u8, saturation: u8, value: u8) -> bool {
        self.hue.contains(hue) && self.saturation.contains(saturation) && self.value.contains(value)
    }
}
