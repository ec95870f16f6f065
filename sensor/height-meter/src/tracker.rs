//! Confidence-gated height smoothing.
//!
//! Only confirmed samples enter the rolling window, so the smoothed value is
//! a function of confirmed history alone. Estimated samples are passed
//! through unsmoothed for live feedback; no-hit ticks hold the last
//! confirmed average and flag the reading as re-acquiring.

use surface_types::SampleResult;
use tracing::{debug, info, trace, warn};

use crate::reading::Reading;
use crate::window::{RollingWindow, WindowStats};

/// Smoothed height tracker.
///
/// # Example
///
/// ```
/// use height_meter::{HeightTracker, Severity};
/// use surface_types::{SampleResult, TrackId};
///
/// let mut tracker = HeightTracker::new(5);
/// let mut reading = None;
/// for _ in 0..5 {
///     reading = Some(tracker.update(&SampleResult::confirmed(0.90, TrackId::new(1)), 0.914));
/// }
///
/// let reading = reading.unwrap();
/// assert!(reading.confident);
/// assert!((reading.smoothed_height.unwrap() - 0.90).abs() < 1e-6);
/// assert_eq!(reading.severity, Some(Severity::NearTarget));
/// ```
#[derive(Debug, Clone)]
pub struct HeightTracker {
    window: RollingWindow,
    confirmed_total: u64,
}

impl HeightTracker {
    /// Creates a tracker averaging up to `smoothing_window` confirmed samples.
    ///
    /// A window of zero is treated as one.
    #[must_use]
    pub fn new(smoothing_window: usize) -> Self {
        Self {
            window: RollingWindow::new(smoothing_window),
            confirmed_total: 0,
        }
    }

    /// Consumes one tick's sample and produces a reading.
    ///
    /// Negative heights are floored at zero and a sample with a non-finite
    /// height is treated as no hit, so the window only ever holds finite,
    /// non-negative values.
    pub fn update(&mut self, sample: &SampleResult, target_height: f32) -> Reading {
        let checked = sample.sanitized();
        if checked.status() != sample.status() {
            warn!(
                status = %sample.status(),
                raw_height = ?sample.raw_height(),
                "Dropping sample with non-finite height"
            );
        }

        let height = match checked {
            SampleResult::Confirmed { raw_height, .. } => {
                self.window.push(raw_height);
                self.confirmed_total += 1;
                if self.confirmed_total == 1 {
                    info!(raw_height, "First confirmed height sample");
                }
                self.window.mean()
            }
            SampleResult::Estimated { raw_height } => Some(raw_height),
            SampleResult::None => {
                let retained = self.window.mean();
                if retained.is_some() {
                    debug!(retained = ?retained, "No surface hit, holding last confirmed average");
                }
                retained
            }
        };

        let reading = Reading::scored(checked.status(), height, target_height);
        trace!(
            status = %reading.status,
            height = ?reading.smoothed_height,
            deviation_cm = ?reading.deviation_cm,
            window_len = self.window.len(),
            "Height tracker update"
        );
        reading
    }

    /// Returns the current confirmed average, if any sample was confirmed.
    #[must_use]
    pub fn smoothed_height(&self) -> Option<f32> {
        self.window.mean()
    }

    /// Returns the rolling window of confirmed heights.
    #[must_use]
    pub const fn window(&self) -> &RollingWindow {
        &self.window
    }

    /// Returns statistics about the rolling window.
    #[must_use]
    pub fn stats(&self) -> WindowStats {
        self.window.stats()
    }

    /// Returns the number of confirmed samples consumed so far.
    #[must_use]
    pub const fn confirmed_total(&self) -> u64 {
        self.confirmed_total
    }

    /// Returns true once at least one confirmed sample has been recorded.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        !self.window.is_empty()
    }
}

impl Default for HeightTracker {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SMOOTHING_WINDOW)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use approx::assert_relative_eq;
    use surface_types::{SampleStatus, TrackId};

    use super::*;
    use crate::score::Severity;

    const TARGET: f32 = 0.914;

    fn confirmed(h: f32) -> SampleResult {
        SampleResult::confirmed(h, TrackId::new(1))
    }

    #[test]
    fn tracker_new_is_unlocked() {
        let tracker = HeightTracker::new(5);
        assert!(!tracker.is_locked());
        assert!(tracker.smoothed_height().is_none());
        assert_eq!(tracker.confirmed_total(), 0);
    }

    #[test]
    fn tracker_confirmed_averages() {
        let mut tracker = HeightTracker::new(5);
        tracker.update(&confirmed(1.0), TARGET);
        let reading = tracker.update(&confirmed(0.8), TARGET);

        assert!(reading.confident);
        assert_relative_eq!(reading.smoothed_height.unwrap(), 0.9, epsilon = 1e-6);
        assert_eq!(tracker.confirmed_total(), 2);
    }

    #[test]
    fn tracker_window_capacity_three() {
        let mut tracker = HeightTracker::new(3);
        let mut last = None;
        for h in [1.0, 1.0, 1.0, 0.7] {
            last = Some(tracker.update(&confirmed(h), TARGET));
        }
        assert_relative_eq!(last.unwrap().smoothed_height.unwrap(), 0.9, epsilon = 1e-6);
        assert_eq!(tracker.window().len(), 3);
    }

    #[test]
    fn tracker_estimated_passes_through() {
        let mut tracker = HeightTracker::new(5);
        tracker.update(&confirmed(0.9), TARGET);

        let reading = tracker.update(&SampleResult::estimated(0.5), TARGET);
        assert!(!reading.confident);
        assert_eq!(reading.status, SampleStatus::Estimated);
        assert_relative_eq!(reading.smoothed_height.unwrap(), 0.5);
        assert_eq!(reading.severity, Some(Severity::OffTarget));

        // Window untouched.
        assert_eq!(tracker.window().len(), 1);
        assert_relative_eq!(tracker.smoothed_height().unwrap(), 0.9);
    }

    #[test]
    fn tracker_none_before_lock() {
        let mut tracker = HeightTracker::new(5);
        let reading = tracker.update(&SampleResult::None, TARGET);
        assert!(!reading.has_height());
        assert!(!reading.confident);
        assert!(!reading.reacquiring);
    }

    #[test]
    fn tracker_none_holds_average() {
        let mut tracker = HeightTracker::new(5);
        tracker.update(&confirmed(0.91), TARGET);
        tracker.update(&confirmed(0.93), TARGET);

        let reading = tracker.update(&SampleResult::None, TARGET);
        assert!(!reading.confident);
        assert!(reading.reacquiring);
        assert_relative_eq!(reading.smoothed_height.unwrap(), 0.92, epsilon = 1e-6);
        assert_eq!(tracker.window().len(), 2);
    }

    #[test]
    fn tracker_zero_window() {
        let mut tracker = HeightTracker::new(0);
        tracker.update(&confirmed(0.4), TARGET);
        let reading = tracker.update(&confirmed(0.6), TARGET);
        assert_relative_eq!(reading.smoothed_height.unwrap(), 0.6);
    }

    #[test]
    fn tracker_floors_deserialized_negative_height() {
        let sample: SampleResult = serde_json::from_str(
            r#"{"status":"confirmed","raw_height":-0.5,"track_id":1}"#,
        )
        .unwrap();
        assert_eq!(sample.raw_height(), Some(-0.5));

        let mut tracker = HeightTracker::new(5);
        let reading = tracker.update(&sample, TARGET);
        assert!(reading.confident);
        assert_eq!(reading.smoothed_height, Some(0.0));
        assert_eq!(tracker.window().latest(), Some(0.0));
    }

    #[test]
    fn tracker_drops_non_finite_confirmed_height() {
        let mut tracker = HeightTracker::new(5);
        let nan = SampleResult::Confirmed {
            raw_height: f32::NAN,
            track_id: TrackId::new(1),
        };

        let dropped = tracker.update(&nan, TARGET);
        assert_eq!(dropped.status, SampleStatus::None);
        assert!(!dropped.confident);
        assert!(!dropped.has_height());
        assert!(tracker.window().is_empty());
        assert_eq!(tracker.confirmed_total(), 0);

        let reading = tracker.update(&confirmed(0.9), TARGET);
        assert_relative_eq!(reading.smoothed_height.unwrap(), 0.9, epsilon = 1e-6);
        assert_eq!(reading.severity, Some(Severity::NearTarget));
    }

    #[test]
    fn tracker_deviation_follows_target() {
        let mut tracker = HeightTracker::new(5);
        let reading = tracker.update(&confirmed(1.0), 1.02);
        assert_relative_eq!(reading.deviation_cm.unwrap(), -2.0, epsilon = 1e-4);
        assert_eq!(reading.severity, Some(Severity::NearTarget));
    }
}
