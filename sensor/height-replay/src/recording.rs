//! Recorded measurement sessions.
//!
//! A recording is a JSON-lines file with one tick per line:
//!
//! ```text
//! {"camera_height": 1.21, "hit": {"position": {"x": 0.1, "y": 0.3, "z": -0.5}, "confidence": "within_bounded_polygon", "track_id": 7}}
//! {"camera_height": 1.22, "hit": null}
//! {"camera_height": null}
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use std::io::BufRead;

use anyhow::{Context, Result};
use glam::Vec2;
use height_meter::{SurfaceDetector, VisibilityDirective, VisibilitySink};
use serde::{Deserialize, Serialize};
use surface_types::{SurfaceHit, TrackId};
use tracing::info;

/// One recorded tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordedTick {
    /// Camera world-space vertical coordinate, if a pose was available.
    #[serde(default)]
    pub camera_height: Option<f32>,
    /// Best surface hit of the tick.
    #[serde(default)]
    pub hit: Option<SurfaceHit>,
}

impl SurfaceDetector for RecordedTick {
    fn raycast(&mut self, _query: Vec2, hits: &mut Vec<SurfaceHit>) {
        hits.extend(self.hit);
    }
}

/// Parses a JSON-lines recording.
pub fn parse_recording(reader: impl BufRead) -> Result<Vec<RecordedTick>> {
    let mut ticks = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", index + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let tick: RecordedTick = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid tick on line {}", index + 1))?;
        ticks.push(tick);
    }
    Ok(ticks)
}

/// Visibility sink that logs directives and remembers the shown surface.
#[derive(Debug, Clone, Default)]
pub struct VisibilityLog {
    shown: Option<TrackId>,
    applied: usize,
}

impl VisibilityLog {
    /// Returns the surface currently shown, if any.
    pub const fn shown(&self) -> Option<TrackId> {
        self.shown
    }

    /// Returns the number of directives applied.
    pub const fn applied(&self) -> usize {
        self.applied
    }
}

impl VisibilitySink for VisibilityLog {
    fn apply(&mut self, directive: &VisibilityDirective) {
        self.applied += 1;
        self.shown = match directive {
            VisibilityDirective::ShowOnly(id) => Some(*id),
            VisibilityDirective::HideAll => None,
        };
        info!(%directive, "Surface visibility");
    }
}
