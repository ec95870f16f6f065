//! Downward height measurement for handheld sensing devices.
//!
//! This crate turns per-frame surface hits into a smoothed, scored height
//! above a detected floor:
//!
//! # Classification
//!
//! - [`classify`] - Classifies one hit as confirmed, estimated or none
//! - [`vertical_height`] - Offset-corrected vertical distance, never negative
//!
//! # Smoothing
//!
//! - [`RollingWindow`] - Bounded FIFO of confirmed heights
//! - [`HeightTracker`] - Confidence-gated averaging producing a [`Reading`]
//!
//! # Scoring
//!
//! - [`Severity`] - On / near / off target bands (±1 cm, ±3 cm)
//! - [`ColorToken`] - Presentation color per severity
//!
//! # Visibility
//!
//! - [`SurfaceFocusTracker`] - Emits [`VisibilityDirective`]s for the
//!   surface currently being measured
//!
//! # Driving
//!
//! - [`HeightMeter`] - Runs the full pipeline once per tick against the
//!   [`SurfaceDetector`], [`PoseSource`], [`VisibilitySink`] and
//!   [`ReadingPresenter`] collaborators
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use height_meter::{HeightMeter, MeterConfig, Severity};
//! use surface_types::{SurfaceHit, TrackId};
//!
//! let mut meter = HeightMeter::new(MeterConfig::default()).unwrap();
//! let floor = SurfaceHit::confirmed(Vec3::new(0.0, -0.90, -0.5), TrackId::new(1));
//!
//! let mut outcome = meter.process(Some(&floor), 0.0);
//! for _ in 0..4 {
//!     outcome = meter.process(Some(&floor), 0.0);
//! }
//!
//! assert!((outcome.reading.smoothed_height.unwrap() - 0.90).abs() < 1e-6);
//! assert_eq!(outcome.reading.severity, Some(Severity::NearTarget));
//! ```
//!
//! # Threading
//!
//! All state is owned by [`HeightMeter`] and mutated through `&mut self`.
//! Wrap it in a `Mutex` if ticks can arrive from more than one thread.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod classify;
mod collab;
mod config;
mod error;
mod focus;
mod meter;
mod present;
mod reading;
mod score;
mod tracker;
mod window;

// Re-export classification
pub use classify::{classify, classify_best, vertical_height};

// Re-export smoothing types
pub use reading::Reading;
pub use tracker::HeightTracker;
pub use window::{RollingWindow, WindowStats};

// Re-export scoring
pub use score::{ColorToken, NEAR_TARGET_CM, ON_TARGET_CM, Severity, deviation_cm};

// Re-export visibility types
pub use focus::{SurfaceFocus, SurfaceFocusTracker, VisibilityDirective};

// Re-export driver and collaborators
pub use collab::{NoVisibility, PoseSource, ReadingPresenter, SurfaceDetector, VisibilitySink};
pub use meter::{HeightMeter, TickOutcome};
pub use present::{Label, LabelPresenter, SCANNING_MESSAGE};

// Re-export configuration and errors
pub use config::{DEFAULT_SMOOTHING_WINDOW, DEFAULT_TARGET_HEIGHT, MeterConfig};
pub use error::{MeterError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        ColorToken, HeightMeter, HeightTracker, Label, LabelPresenter, MeterConfig, MeterError,
        PoseSource, Reading, ReadingPresenter, RollingWindow, Severity, SurfaceDetector,
        SurfaceFocus, TickOutcome, VisibilityDirective, VisibilitySink, classify,
    };
    pub use surface_types::{HitConfidence, SampleResult, SampleStatus, SurfaceHit, TrackId};
}
