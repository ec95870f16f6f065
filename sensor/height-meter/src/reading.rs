//! Presentation-facing tracker output.

use serde::{Deserialize, Serialize};
use surface_types::SampleStatus;

use crate::score::{Severity, deviation_cm};

/// Height reading for one tick.
///
/// `deviation_cm` and `severity` are present exactly when
/// `smoothed_height` is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Status of the sample this reading was produced from.
    pub status: SampleStatus,

    /// Reported height in meters.
    ///
    /// The confirmed average on confirmed ticks, the raw estimate on
    /// estimated ticks and the retained average (if any) on no-hit ticks.
    pub smoothed_height: Option<f32>,

    /// Signed deviation from the target in centimeters.
    pub deviation_cm: Option<f32>,

    /// Severity of the deviation.
    pub severity: Option<Severity>,

    /// True only if this tick's sample was confirmed.
    pub confident: bool,

    /// True if no surface was hit and a previous average is being held.
    pub reacquiring: bool,
}

impl Reading {
    /// Builds a reading, scoring `height` against `target_height`.
    #[must_use]
    pub fn scored(status: SampleStatus, height: Option<f32>, target_height: f32) -> Self {
        let deviation = height.map(|h| deviation_cm(h, target_height));
        Self {
            status,
            smoothed_height: height,
            deviation_cm: deviation,
            severity: deviation.map(Severity::from_deviation_cm),
            confident: status == SampleStatus::Confirmed,
            reacquiring: status == SampleStatus::None && height.is_some(),
        }
    }

    /// Returns true if the reading carries a height.
    #[must_use]
    pub const fn has_height(&self) -> bool {
        self.smoothed_height.is_some()
    }
}
