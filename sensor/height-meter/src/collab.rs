//! In-process collaborator seams.
//!
//! The meter never talks to a sensing API, scene graph or UI directly.
//! Embedders implement these traits over their AR framework, recording or
//! simulation.

use glam::Vec2;
use surface_types::SurfaceHit;

use crate::focus::VisibilityDirective;
use crate::reading::Reading;

/// Source of surface hits for a viewport query point.
pub trait SurfaceDetector {
    /// Casts a ray through `query` (viewport-normalized, `[0, 1]²`) and
    /// appends any hits to `hits`, best first.
    ///
    /// `hits` is cleared by the caller before every call and is only valid
    /// for the current tick.
    fn raycast(&mut self, query: Vec2, hits: &mut Vec<SurfaceHit>);
}

/// Source of the sensing device's pose.
pub trait PoseSource {
    /// Returns the camera's world-space vertical coordinate in meters, or
    /// `None` if no pose is available this tick.
    fn camera_height(&self) -> Option<f32>;
}

/// Shows and hides detected surfaces.
pub trait VisibilitySink {
    /// Applies a directive. Implementations must treat repeated directives
    /// as no-ops.
    fn apply(&mut self, directive: &VisibilityDirective);
}

/// Renders readings for the user.
pub trait ReadingPresenter {
    /// Presents one tick's reading.
    fn present(&mut self, reading: &Reading);
}

impl<F> SurfaceDetector for F
where
    F: FnMut(Vec2, &mut Vec<SurfaceHit>),
{
    fn raycast(&mut self, query: Vec2, hits: &mut Vec<SurfaceHit>) {
        self(query, hits);
    }
}

impl PoseSource for Option<f32> {
    fn camera_height(&self) -> Option<f32> {
        *self
    }
}

impl PoseSource for f32 {
    fn camera_height(&self) -> Option<f32> {
        Some(*self)
    }
}

/// Visibility sink that discards every directive.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVisibility;

impl VisibilitySink for NoVisibility {
    fn apply(&mut self, _directive: &VisibilityDirective) {}
}

impl VisibilitySink for Vec<VisibilityDirective> {
    fn apply(&mut self, directive: &VisibilityDirective) {
        self.push(*directive);
    }
}

impl ReadingPresenter for Vec<Reading> {
    fn present(&mut self, reading: &Reading) {
        self.push(*reading);
    }
}
