//! Hardware-agnostic surface sample types for downward height measurement.
//!
//! This crate provides the data handed between a surface-detection
//! collaborator (AR plane raycasts, depth sensors, simulation) and the
//! measurement pipeline in `height-meter`:
//!
//! - [`SurfaceHit`] - One ray/surface intersection with a confidence tier
//! - [`HitConfidence`] - Whether the surface boundary is resolved or provisional
//! - [`TrackId`] - Stable identifier of the surface patch that produced a hit
//! - [`SampleResult`] - Per-tick classification of a hit with its raw height
//! - [`SampleStatus`] - The `Confirmed` / `Estimated` / `None` projection
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. It can be used in:
//! - Mobile AR front-ends
//! - Recorded-session replay tools
//! - Simulation environments
//!
//! # Coordinates
//!
//! Hit positions are world-space points in meters with **+Y up**. Only the
//! vertical component takes part in height measurement.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use surface_types::{HitConfidence, SurfaceHit, TrackId};
//!
//! let hit = SurfaceHit::new(Vec3::new(0.2, -1.1, 0.4), HitConfidence::WithinBoundedPolygon, TrackId::new(7));
//!
//! assert!(hit.is_confirmed());
//! assert!((hit.elevation() + 1.1).abs() < 1e-6);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod hit;
mod sample;

pub use error::SurfaceError;
pub use hit::{HitConfidence, SurfaceHit, TrackId};
pub use sample::{SampleResult, SampleStatus};

/// Result type for surface type construction.
pub type Result<T> = std::result::Result<T, SurfaceError>;
