//! Error types for surface data.

use thiserror::Error;

/// Errors that can occur when constructing surface data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    /// Hit position has a `NaN` or infinite component.
    #[error("non-finite hit position: ({x}, {y}, {z})")]
    NonFinitePosition {
        /// X component.
        x: f32,
        /// Y component.
        y: f32,
        /// Z component.
        z: f32,
    },
}

impl SurfaceError {
    /// Creates a non-finite position error.
    #[must_use]
    pub const fn non_finite_position(x: f32, y: f32, z: f32) -> Self {
        Self::NonFinitePosition { x, y, z }
    }
}
