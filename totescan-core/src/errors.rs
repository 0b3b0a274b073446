//! Error Types for Configuration Snapshots
//!
//! ## What Is (and Isn't) an Error
//!
//! The scoring core resolves almost every edge case locally:
//!
//! - **No candidate**: an empty frame is a normal outcome. `evaluate` returns
//!   a "no target" result, never an error.
//! - **Degenerate geometry**: a zero-area hull or a zero-height bounding box
//!   scores 0; a zero-width box has an undefined (`None`) distance.
//!
//! Only a broken configuration snapshot is surfaced to the caller. A
//! non-positive target width or a view angle outside (0°, 180°) would make
//! every score and range silently wrong, so it is rejected once, up front,
//! before any particle is looked at.
//!
//! ## Size
//!
//! Errors are `Copy` and carry `&'static str` parameter names only, so they
//! can be returned from the control loop without touching the heap.
//!
//! ```rust
//! use totescan_core::{evaluate, ConfigError, VisionConfig};
//!
//! let config = VisionConfig {
//!     camera_view_angle_deg: 0.0,
//!     ..VisionConfig::default()
//! };
//!
//! match evaluate(&[], 320, &config) {
//!     Err(ConfigError::OutOfRange { parameter, .. }) => {
//!         assert_eq!(parameter, "camera_view_angle_deg");
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration snapshot rejected before evaluation
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Parameter is NaN or infinite
    #[error("Parameter {parameter} is not a finite number")]
    NotFinite {
        /// Name of the offending field
        parameter: &'static str,
    },

    /// Parameter must be strictly greater than zero
    #[error("Parameter {parameter} must be positive, got {value}")]
    NotPositive {
        /// Name of the offending field
        parameter: &'static str,
        /// Value found in the snapshot
        value: f64,
    },

    /// Parameter outside its accepted interval
    #[error("Parameter {parameter} = {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending field
        parameter: &'static str,
        /// Value found in the snapshot
        value: f64,
        /// Lower bound of the accepted interval
        min: f64,
        /// Upper bound of the accepted interval
        max: f64,
    },
}

impl ConfigError {
    /// Name of the configuration field that failed the check
    pub fn parameter(&self) -> &'static str {
        match *self {
            Self::NotFinite { parameter }
            | Self::NotPositive { parameter, .. }
            | Self::OutOfRange { parameter, .. } => parameter,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotFinite { parameter } =>
                defmt::write!(fmt, "{} not finite", parameter),
            Self::NotPositive { parameter, value } =>
                defmt::write!(fmt, "{} = {} not positive", parameter, value),
            Self::OutOfRange { parameter, value, min, max } =>
                defmt::write!(fmt, "{} = {} outside [{}, {}]", parameter, value, min, max),
        }
    }
}
