//! Per-tick classification of a surface hit.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::TrackId;

/// Status of a single tick's surface sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SampleStatus {
    /// The hit landed on a resolved surface; trusted for measurement.
    Confirmed,
    /// The hit landed on a provisional surface; live feedback only.
    Estimated,
    /// No surface was hit this tick.
    #[default]
    None,
}

impl SampleStatus {
    /// Returns the lowercase name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Estimated => "estimated",
            Self::None => "none",
        }
    }
}

impl fmt::Display for SampleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified sample for one tick.
///
/// Raw heights are in meters and are never negative: the constructors
/// floor them at zero (a `NaN` input becomes `0.0`).
///
/// # Example
///
/// ```
/// use surface_types::{SampleResult, SampleStatus, TrackId};
///
/// let sample = SampleResult::confirmed(0.91, TrackId::new(4));
/// assert_eq!(sample.status(), SampleStatus::Confirmed);
/// assert_eq!(sample.track_id(), Some(TrackId::new(4)));
///
/// let floored = SampleResult::estimated(-0.2);
/// assert_eq!(floored.raw_height(), Some(0.0));
///
/// assert_eq!(SampleResult::None.raw_height(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "status", rename_all = "snake_case")
)]
pub enum SampleResult {
    /// Hit on a resolved surface.
    Confirmed {
        /// Offset-corrected vertical distance in meters.
        raw_height: f32,
        /// Surface patch that produced the hit.
        track_id: TrackId,
    },
    /// Hit on a provisional surface.
    Estimated {
        /// Offset-corrected vertical distance in meters.
        raw_height: f32,
    },
    /// No hit this tick.
    #[default]
    None,
}

impl SampleResult {
    /// Creates a confirmed sample, flooring the height at zero.
    #[must_use]
    pub fn confirmed(raw_height: f32, track_id: TrackId) -> Self {
        Self::Confirmed {
            raw_height: raw_height.max(0.0),
            track_id,
        }
    }

    /// Creates an estimated sample, flooring the height at zero.
    #[must_use]
    pub fn estimated(raw_height: f32) -> Self {
        Self::Estimated {
            raw_height: raw_height.max(0.0),
        }
    }

    /// Restores the height invariant on a sample built from its fields.
    ///
    /// Negative heights are floored at zero; a non-finite height turns the
    /// sample into [`SampleResult::None`].
    #[must_use]
    pub fn sanitized(self) -> Self {
        match self {
            Self::Confirmed {
                raw_height,
                track_id,
            } if raw_height.is_finite() => Self::confirmed(raw_height, track_id),
            Self::Estimated { raw_height } if raw_height.is_finite() => {
                Self::estimated(raw_height)
            }
            Self::Confirmed { .. } | Self::Estimated { .. } | Self::None => Self::None,
        }
    }

    /// Returns the status of this sample.
    #[must_use]
    pub const fn status(&self) -> SampleStatus {
        match self {
            Self::Confirmed { .. } => SampleStatus::Confirmed,
            Self::Estimated { .. } => SampleStatus::Estimated,
            Self::None => SampleStatus::None,
        }
    }

    /// Returns the raw height, or `None` when no surface was hit.
    #[must_use]
    pub const fn raw_height(&self) -> Option<f32> {
        match self {
            Self::Confirmed { raw_height, .. } | Self::Estimated { raw_height } => {
                Some(*raw_height)
            }
            Self::None => None,
        }
    }

    /// Returns the surface identifier of a confirmed sample.
    #[must_use]
    pub const fn track_id(&self) -> Option<TrackId> {
        match self {
            Self::Confirmed { track_id, .. } => Some(*track_id),
            Self::Estimated { .. } | Self::None => None,
        }
    }

    /// Returns true if this sample may enter the smoothing window.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_projection() {
        assert_eq!(
            SampleResult::confirmed(1.0, TrackId::new(1)).status(),
            SampleStatus::Confirmed
        );
        assert_eq!(SampleResult::estimated(1.0).status(), SampleStatus::Estimated);
        assert_eq!(SampleResult::None.status(), SampleStatus::None);
    }

    #[test]
    fn status_display() {
        assert_eq!(SampleStatus::Confirmed.to_string(), "confirmed");
        assert_eq!(SampleStatus::Estimated.to_string(), "estimated");
        assert_eq!(SampleStatus::None.to_string(), "none");
    }

    #[test]
    fn constructors_floor_negative_heights() {
        assert_eq!(
            SampleResult::confirmed(-0.3, TrackId::new(1)).raw_height(),
            Some(0.0)
        );
        assert_eq!(SampleResult::estimated(-1.0).raw_height(), Some(0.0));
    }

    #[test]
    fn constructors_floor_nan() {
        assert_eq!(SampleResult::estimated(f32::NAN).raw_height(), Some(0.0));
    }

    #[test]
    fn sanitized_floors_and_drops_non_finite() {
        let negative = SampleResult::Confirmed {
            raw_height: -0.5,
            track_id: TrackId::new(1),
        };
        assert_eq!(negative.sanitized().raw_height(), Some(0.0));
        assert!(negative.sanitized().is_confirmed());

        let nan = SampleResult::Confirmed {
            raw_height: f32::NAN,
            track_id: TrackId::new(1),
        };
        assert_eq!(nan.sanitized(), SampleResult::None);

        let infinite = SampleResult::Estimated {
            raw_height: f32::INFINITY,
        };
        assert_eq!(infinite.sanitized(), SampleResult::None);

        let valid = SampleResult::estimated(0.4);
        assert_eq!(valid.sanitized(), valid);
    }

    #[test]
    fn track_id_only_on_confirmed() {
        assert_eq!(
            SampleResult::confirmed(0.5, TrackId::new(8)).track_id(),
            Some(TrackId::new(8))
        );
        assert!(SampleResult::estimated(0.5).track_id().is_none());
        assert!(SampleResult::None.track_id().is_none());
    }

    #[test]
    fn default_is_none() {
        assert_eq!(SampleResult::default(), SampleResult::None);
        assert_eq!(SampleStatus::default(), SampleStatus::None);
        assert!(!SampleResult::default().is_confirmed());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn sample_serialization() {
        let sample = SampleResult::confirmed(0.75, TrackId::new(2));
        let json = serde_json::to_string(&sample).unwrap();
        assert!(json.contains("\"status\":\"confirmed\""));

        let none = serde_json::to_string(&SampleResult::None).unwrap();
        assert_eq!(none, "{\"status\":\"none\"}");
    }
}
