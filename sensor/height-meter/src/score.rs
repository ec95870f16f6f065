//! Deviation-from-target scoring.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest absolute deviation (cm) still scored as on target.
pub const ON_TARGET_CM: f32 = 1.0;

/// Largest absolute deviation (cm) still scored as near target.
pub const NEAR_TARGET_CM: f32 = 3.0;

/// Returns the signed deviation of `height` from `target` in centimeters.
///
/// # Example
///
/// ```
/// use height_meter::deviation_cm;
///
/// let d = deviation_cm(0.90, 0.914);
/// assert!((d + 1.4).abs() < 1e-4);
/// ```
#[must_use]
pub fn deviation_cm(height: f32, target: f32) -> f32 {
    (height - target) * 100.0
}

/// Three-tier classification of a deviation from the target height.
///
/// Band edges are inclusive: exactly 1.0 cm is on target, exactly 3.0 cm is
/// near target.
///
/// # Example
///
/// ```
/// use height_meter::Severity;
///
/// assert_eq!(Severity::from_deviation_cm(-1.0), Severity::OnTarget);
/// assert_eq!(Severity::from_deviation_cm(2.5), Severity::NearTarget);
/// assert_eq!(Severity::from_deviation_cm(-3.5), Severity::OffTarget);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Within ±1 cm.
    OnTarget,
    /// Within ±3 cm.
    NearTarget,
    /// Further than 3 cm, or not a number.
    OffTarget,
}

impl Severity {
    /// Scores a signed deviation in centimeters.
    #[must_use]
    pub fn from_deviation_cm(deviation_cm: f32) -> Self {
        let magnitude = deviation_cm.abs();
        if magnitude <= ON_TARGET_CM {
            Self::OnTarget
        } else if magnitude <= NEAR_TARGET_CM {
            Self::NearTarget
        } else {
            Self::OffTarget
        }
    }

    /// Returns the display color for this severity.
    #[must_use]
    pub const fn color_token(self) -> ColorToken {
        match self {
            Self::OnTarget => ColorToken::Green,
            Self::NearTarget => ColorToken::Yellow,
            Self::OffTarget => ColorToken::Red,
        }
    }
}

/// Color a presenter should use for a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    /// On target.
    Green,
    /// Near target.
    Yellow,
    /// Off target.
    Red,
}

impl ColorToken {
    /// Returns the RGB hex code of the color.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#39D353",
            Self::Yellow => "#F1E05A",
            Self::Red => "#FF4D4F",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}
