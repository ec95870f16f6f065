//! Per-tick surface hit classification.
//!
//! Turns the best surface hit of a tick into a [`SampleResult`]. Height is
//! the single-axis vertical difference between camera and hit: the device
//! may be tilted, so the 3-D distance along the ray overstates the height.

use surface_types::{HitConfidence, SampleResult, SurfaceHit};
use tracing::warn;

/// Computes the offset-corrected vertical distance, floored at zero.
///
/// Returns `None` if the inputs produce a non-finite distance.
///
/// # Example
///
/// ```
/// use height_meter::vertical_height;
///
/// let h = vertical_height(1.4, 0.5, 0.1).unwrap();
/// assert!((h - 0.8).abs() < 1e-6);
///
/// // Never negative, even when the offset exceeds the distance.
/// assert_eq!(vertical_height(0.2, 0.1, 0.5), Some(0.0));
/// ```
#[must_use]
pub fn vertical_height(
    camera_height: f32,
    surface_height: f32,
    calibration_offset: f32,
) -> Option<f32> {
    let height = (camera_height - surface_height).abs() - calibration_offset;
    height.is_finite().then(|| height.max(0.0))
}

/// Classifies one tick's surface hit.
///
/// - No hit: [`SampleResult::None`]
/// - [`HitConfidence::WithinBoundedPolygon`]: [`SampleResult::Confirmed`]
/// - [`HitConfidence::Estimated`]: [`SampleResult::Estimated`]
///
/// A hit whose height cannot be computed (non-finite pose or position) is
/// treated as no hit.
///
/// # Example
///
/// ```
/// use glam::Vec3;
/// use height_meter::classify;
/// use surface_types::{SampleStatus, SurfaceHit, TrackId};
///
/// let hit = SurfaceHit::confirmed(Vec3::new(0.3, -0.9, 1.0), TrackId::new(1));
/// let sample = classify(Some(&hit), 0.0, 0.0);
///
/// assert_eq!(sample.status(), SampleStatus::Confirmed);
/// assert!((sample.raw_height().unwrap() - 0.9).abs() < 1e-6);
/// assert_eq!(classify(None, 0.0, 0.0).status(), SampleStatus::None);
/// ```
#[must_use]
pub fn classify(
    hit: Option<&SurfaceHit>,
    camera_height: f32,
    calibration_offset: f32,
) -> SampleResult {
    let Some(hit) = hit else {
        return SampleResult::None;
    };

    let Some(raw_height) = vertical_height(camera_height, hit.elevation(), calibration_offset)
    else {
        warn!(
            camera_height,
            surface_height = hit.elevation(),
            calibration_offset,
            track_id = %hit.track_id,
            "Discarding hit with non-finite height"
        );
        return SampleResult::None;
    };

    match hit.confidence {
        HitConfidence::WithinBoundedPolygon => SampleResult::confirmed(raw_height, hit.track_id),
        HitConfidence::Estimated => SampleResult::estimated(raw_height),
    }
}

/// Classifies the best (first) hit of a detector result buffer.
#[must_use]
pub fn classify_best(
    hits: &[SurfaceHit],
    camera_height: f32,
    calibration_offset: f32,
) -> SampleResult {
    classify(hits.first(), camera_height, calibration_offset)
}
