//! Surface-identity tracking for visibility control.
//!
//! Decides which detected surface a visibility collaborator should show.
//! Only the surface currently producing confirmed samples is shown; every
//! other tick hides all surfaces. Redundant directives are suppressed.

use std::fmt;

use serde::{Deserialize, Serialize};
use surface_types::{SampleResult, TrackId};
use tracing::debug;

/// Surface currently driving confirmed measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceFocus {
    /// No surface is producing confirmed samples.
    #[default]
    NoTrackedSurface,
    /// The given surface produced the latest confirmed sample.
    TrackedSurface(TrackId),
}

impl SurfaceFocus {
    /// Returns the tracked surface, if any.
    #[must_use]
    pub const fn track_id(&self) -> Option<TrackId> {
        match self {
            Self::NoTrackedSurface => None,
            Self::TrackedSurface(id) => Some(*id),
        }
    }
}

/// Instruction for the visibility collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityDirective {
    /// Show only this surface and hide all others.
    ShowOnly(TrackId),
    /// Hide every surface.
    HideAll,
}

impl fmt::Display for VisibilityDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShowOnly(id) => write!(f, "show only {id}"),
            Self::HideAll => f.write_str("hide all"),
        }
    }
}

/// State machine emitting visibility directives from classified samples.
///
/// Transitions per tick:
/// - confirmed, new id: `TrackedSurface(id)`, emits `ShowOnly(id)`
/// - confirmed, same id: no change, no directive
/// - estimated or no hit: `NoTrackedSurface`, emits `HideAll` unless all
///   surfaces are already hidden
///
/// # Example
///
/// ```
/// use height_meter::{SurfaceFocusTracker, VisibilityDirective};
/// use surface_types::{SampleResult, TrackId};
///
/// let mut focus = SurfaceFocusTracker::new();
/// let sample = SampleResult::confirmed(0.9, TrackId::new(3));
///
/// assert_eq!(focus.observe(&sample), Some(VisibilityDirective::ShowOnly(TrackId::new(3))));
/// assert_eq!(focus.observe(&sample), None);
/// assert_eq!(focus.observe(&SampleResult::None), Some(VisibilityDirective::HideAll));
/// assert_eq!(focus.observe(&SampleResult::None), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SurfaceFocusTracker {
    focus: SurfaceFocus,
    last_applied: Option<VisibilityDirective>,
}

impl SurfaceFocusTracker {
    /// Creates a tracker with no surface in focus and no directive applied.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current focus.
    #[must_use]
    pub const fn focus(&self) -> SurfaceFocus {
        self.focus
    }

    /// Returns the most recently emitted directive.
    #[must_use]
    pub const fn last_applied(&self) -> Option<VisibilityDirective> {
        self.last_applied
    }

    /// Updates the focus from one tick's sample.
    ///
    /// Returns the directive to apply, or `None` if the visibility state
    /// already matches.
    pub fn observe(&mut self, sample: &SampleResult) -> Option<VisibilityDirective> {
        let (focus, wanted) = match sample.track_id() {
            Some(id) => (
                SurfaceFocus::TrackedSurface(id),
                VisibilityDirective::ShowOnly(id),
            ),
            None => (SurfaceFocus::NoTrackedSurface, VisibilityDirective::HideAll),
        };

        if focus != self.focus {
            debug!(from = ?self.focus, to = ?focus, "Surface focus changed");
            self.focus = focus;
        }

        if self.last_applied == Some(wanted) {
            return None;
        }
        self.last_applied = Some(wanted);
        Some(wanted)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn confirmed(id: u64) -> SampleResult {
        SampleResult::confirmed(0.9, TrackId::new(id))
    }

    #[test]
    fn focus_starts_untracked() {
        let tracker = SurfaceFocusTracker::new();
        assert_eq!(tracker.focus(), SurfaceFocus::NoTrackedSurface);
        assert!(tracker.last_applied().is_none());
        assert!(tracker.focus().track_id().is_none());
    }

    #[test]
    fn first_no_hit_hides_all() {
        let mut tracker = SurfaceFocusTracker::new();
        assert_eq!(
            tracker.observe(&SampleResult::None),
            Some(VisibilityDirective::HideAll)
        );
    }

    #[test]
    fn repeated_same_surface_is_suppressed() {
        let mut tracker = SurfaceFocusTracker::new();
        let directives: Vec<_> = (0..4).filter_map(|_| tracker.observe(&confirmed(7))).collect();
        assert_eq!(directives, vec![VisibilityDirective::ShowOnly(TrackId::new(7))]);
        assert_eq!(
            tracker.focus(),
            SurfaceFocus::TrackedSurface(TrackId::new(7))
        );
    }

    #[test]
    fn surface_switch_emits_show_only() {
        let mut tracker = SurfaceFocusTracker::new();
        tracker.observe(&confirmed(1));
        assert_eq!(
            tracker.observe(&confirmed(2)),
            Some(VisibilityDirective::ShowOnly(TrackId::new(2)))
        );
        assert_eq!(tracker.focus().track_id(), Some(TrackId::new(2)));
    }

    #[test]
    fn estimated_drops_focus() {
        let mut tracker = SurfaceFocusTracker::new();
        tracker.observe(&confirmed(1));
        assert_eq!(
            tracker.observe(&SampleResult::estimated(0.5)),
            Some(VisibilityDirective::HideAll)
        );
        assert_eq!(tracker.focus(), SurfaceFocus::NoTrackedSurface);
    }

    #[test]
    fn repeated_hide_is_suppressed() {
        let mut tracker = SurfaceFocusTracker::new();
        assert!(tracker.observe(&SampleResult::None).is_some());
        assert!(tracker.observe(&SampleResult::estimated(0.5)).is_none());
        assert!(tracker.observe(&SampleResult::None).is_none());
    }

    #[test]
    fn reacquiring_same_surface_shows_again() {
        let mut tracker = SurfaceFocusTracker::new();
        tracker.observe(&confirmed(4));
        tracker.observe(&SampleResult::None);
        assert_eq!(
            tracker.observe(&confirmed(4)),
            Some(VisibilityDirective::ShowOnly(TrackId::new(4)))
        );
    }

    #[test]
    fn directive_display() {
        assert_eq!(VisibilityDirective::HideAll.to_string(), "hide all");
        assert_eq!(
            VisibilityDirective::ShowOnly(TrackId::new(1)).to_string(),
            "show only surface-0000000000000001"
        );
    }
}
