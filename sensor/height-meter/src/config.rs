//! Configuration for the height meter.
//!
//! All values are static for a measurement session.
//!
//! # Example
//!
//! ```
//! use height_meter::MeterConfig;
//!
//! let config = MeterConfig::default()
//!     .with_calibration_offset(0.012)
//!     .with_target_height(0.914)
//!     .with_smoothing_window(8);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.effective_window(), 8);
//! ```

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{MeterError, Result};

/// Default target height in meters (3 ft, a tennis net at the center strap).
pub const DEFAULT_TARGET_HEIGHT: f32 = 0.914;

/// Default number of confirmed samples averaged.
pub const DEFAULT_SMOOTHING_WINDOW: usize = 5;

/// Measurement configuration.
///
/// Defaults:
/// - Calibration offset: 0 m
/// - Target height: 0.914 m
/// - Smoothing window: 5 samples
/// - Query point: viewport center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterConfig {
    /// Per-device correction subtracted from the raw vertical distance (meters).
    calibration_offset: f32,
    /// Reference height deviations are scored against (meters).
    target_height: f32,
    /// Number of most recent confirmed samples averaged.
    smoothing_window: usize,
    /// Viewport-normalized point the surface query is cast through.
    query_point: [f32; 2],
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MeterConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calibration_offset: 0.0,
            target_height: DEFAULT_TARGET_HEIGHT,
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
            query_point: [0.5, 0.5],
        }
    }

    /// Sets the calibration offset in meters.
    #[must_use]
    pub const fn with_calibration_offset(mut self, meters: f32) -> Self {
        self.calibration_offset = meters;
        self
    }

    /// Sets the target height in meters.
    #[must_use]
    pub const fn with_target_height(mut self, meters: f32) -> Self {
        self.target_height = meters;
        self
    }

    /// Sets the smoothing window size.
    ///
    /// A size of zero is accepted and treated as one.
    #[must_use]
    pub const fn with_smoothing_window(mut self, samples: usize) -> Self {
        self.smoothing_window = samples;
        self
    }

    /// Sets the viewport-normalized query point (`[0, 1]` on both axes).
    #[must_use]
    pub const fn with_query_point(mut self, point: Vec2) -> Self {
        self.query_point = [point.x, point.y];
        self
    }

    /// Returns the calibration offset in meters.
    #[must_use]
    pub const fn calibration_offset(&self) -> f32 {
        self.calibration_offset
    }

    /// Returns the target height in meters.
    #[must_use]
    pub const fn target_height(&self) -> f32 {
        self.target_height
    }

    /// Returns the smoothing window size as configured.
    #[must_use]
    pub const fn smoothing_window(&self) -> usize {
        self.smoothing_window
    }

    /// Returns the smoothing window size clamped to at least one sample.
    #[must_use]
    pub const fn effective_window(&self) -> usize {
        if self.smoothing_window == 0 {
            1
        } else {
            self.smoothing_window
        }
    }

    /// Returns the viewport-normalized query point.
    #[must_use]
    pub const fn query_point(&self) -> Vec2 {
        Vec2::new(self.query_point[0], self.query_point[1])
    }

    /// Checks that all values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`MeterError::InvalidConfig`] if the offset is not finite,
    /// the target height is negative or not finite, or the query point lies
    /// outside the unit viewport.
    pub fn validate(&self) -> Result<()> {
        if !self.calibration_offset.is_finite() {
            return Err(MeterError::invalid_config(format!(
                "calibration offset must be finite, got {}",
                self.calibration_offset
            )));
        }
        if !self.target_height.is_finite() || self.target_height < 0.0 {
            return Err(MeterError::invalid_config(format!(
                "target height must be a finite non-negative value, got {}",
                self.target_height
            )));
        }
        if self
            .query_point
            .iter()
            .any(|c| !(0.0..=1.0).contains(c))
        {
            return Err(MeterError::invalid_config(format!(
                "query point must lie in [0, 1] x [0, 1], got ({}, {})",
                self.query_point[0], self.query_point[1]
            )));
        }
        Ok(())
    }

    /// Parses and validates a configuration from JSON.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`MeterError::Parse`] on malformed JSON and
    /// [`MeterError::InvalidConfig`] if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`MeterError::Io`] if the file cannot be read, otherwise the
    /// errors of [`MeterConfig::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
