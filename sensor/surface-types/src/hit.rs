//! Surface hits reported by a surface-detection collaborator.

use std::fmt;

use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Result, SurfaceError};

/// Stable identifier of a detected surface patch.
///
/// Identifiers are opaque: they are compared for equality to drive
/// visibility control and never take part in measurement math.
///
/// # Example
///
/// ```
/// use surface_types::TrackId;
///
/// let id = TrackId::new(0x2a);
/// assert_eq!(id.raw(), 42);
/// assert_eq!(id.to_string(), "surface-000000000000002a");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct TrackId(u64);

impl TrackId {
    /// Creates an identifier from its raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface-{:016x}", self.0)
    }
}

/// Confidence tier of a surface hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum HitConfidence {
    /// The ray met a surface inside its geometrically resolved boundary.
    WithinBoundedPolygon,
    /// The ray met a provisional surface estimate.
    Estimated,
}

impl HitConfidence {
    /// Returns true if the hit can be trusted for a final measurement.
    #[must_use]
    pub const fn is_confirmed(self) -> bool {
        matches!(self, Self::WithinBoundedPolygon)
    }
}

#[cfg(feature = "serde")]
mod vec3_serde {
    use glam::Vec3;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Vec3Data {
        x: f32,
        y: f32,
        z: f32,
    }

    pub fn serialize<S: Serializer>(v: &Vec3, s: S) -> std::result::Result<S::Ok, S::Error> {
        Vec3Data {
            x: v.x,
            y: v.y,
            z: v.z,
        }
        .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Vec3, D::Error> {
        let data = Vec3Data::deserialize(d)?;
        Ok(Vec3::new(data.x, data.y, data.z))
    }
}

/// A single intersection between a query ray and a detected surface.
///
/// # Example
///
/// ```
/// use glam::Vec3;
/// use surface_types::{HitConfidence, SurfaceHit, TrackId};
///
/// let hit = SurfaceHit::estimated(Vec3::new(0.0, -0.9, 0.0), TrackId::new(1));
/// assert_eq!(hit.confidence, HitConfidence::Estimated);
/// assert!(!hit.is_confirmed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceHit {
    /// World-space point where the ray met the surface (meters, +Y up).
    #[cfg_attr(feature = "serde", serde(with = "vec3_serde"))]
    pub position: Vec3,

    /// Confidence tier of the surface that was hit.
    pub confidence: HitConfidence,

    /// Surface patch that produced the hit.
    pub track_id: TrackId,
}

impl SurfaceHit {
    /// Creates a new hit.
    #[must_use]
    pub const fn new(position: Vec3, confidence: HitConfidence, track_id: TrackId) -> Self {
        Self {
            position,
            confidence,
            track_id,
        }
    }

    /// Creates a new hit, rejecting non-finite positions.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NonFinitePosition`] if any component of
    /// `position` is `NaN` or infinite.
    pub fn try_new(position: Vec3, confidence: HitConfidence, track_id: TrackId) -> Result<Self> {
        if !position.is_finite() {
            return Err(SurfaceError::non_finite_position(
                position.x, position.y, position.z,
            ));
        }
        Ok(Self::new(position, confidence, track_id))
    }

    /// Creates a hit on a surface with a resolved boundary.
    #[must_use]
    pub const fn confirmed(position: Vec3, track_id: TrackId) -> Self {
        Self::new(position, HitConfidence::WithinBoundedPolygon, track_id)
    }

    /// Creates a hit on a provisional surface.
    #[must_use]
    pub const fn estimated(position: Vec3, track_id: TrackId) -> Self {
        Self::new(position, HitConfidence::Estimated, track_id)
    }

    /// Returns true if the hit landed inside a resolved surface boundary.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        self.confidence.is_confirmed()
    }

    /// Returns the world-space vertical coordinate of the hit.
    #[must_use]
    pub const fn elevation(&self) -> f32 {
        self.position.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_id_roundtrip() {
        let id = TrackId::new(99);
        assert_eq!(id.raw(), 99);
        assert_eq!(id, TrackId::new(99));
        assert_ne!(id, TrackId::new(100));
    }

    #[test]
    fn track_id_display() {
        assert_eq!(TrackId::new(255).to_string(), "surface-00000000000000ff");
    }

    #[test]
    fn confidence_tiers() {
        assert!(HitConfidence::WithinBoundedPolygon.is_confirmed());
        assert!(!HitConfidence::Estimated.is_confirmed());
    }

    #[test]
    fn hit_constructors() {
        let p = Vec3::new(1.0, -0.5, 2.0);
        let confirmed = SurfaceHit::confirmed(p, TrackId::new(1));
        let estimated = SurfaceHit::estimated(p, TrackId::new(1));

        assert!(confirmed.is_confirmed());
        assert!(!estimated.is_confirmed());
        assert!((confirmed.elevation() + 0.5).abs() < 1e-6);
    }

    #[test]
    fn hit_try_new_rejects_nan() {
        let result = SurfaceHit::try_new(
            Vec3::new(0.0, f32::NAN, 0.0),
            HitConfidence::Estimated,
            TrackId::new(3),
        );
        assert!(matches!(result, Err(SurfaceError::NonFinitePosition { .. })));
    }

    #[test]
    fn hit_try_new_rejects_infinity() {
        let result = SurfaceHit::try_new(
            Vec3::new(f32::INFINITY, 0.0, 0.0),
            HitConfidence::WithinBoundedPolygon,
            TrackId::new(3),
        );
        assert!(result.is_err());
    }

    #[test]
    fn hit_try_new_accepts_finite() {
        let result = SurfaceHit::try_new(
            Vec3::new(0.0, -1.0, 0.0),
            HitConfidence::WithinBoundedPolygon,
            TrackId::new(3),
        );
        assert!(result.is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn hit_serialization() {
        let hit = SurfaceHit::confirmed(Vec3::new(0.5, -1.25, 2.0), TrackId::new(12));
        let json = serde_json::to_string(&hit).unwrap();
        assert!(json.contains("\"within_bounded_polygon\""));
        assert!(json.contains("\"track_id\":12"));

        let back: SurfaceHit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hit);
    }
}
