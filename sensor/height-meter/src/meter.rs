//! Per-tick measurement driver.

use serde::{Deserialize, Serialize};
use surface_types::{SampleResult, SurfaceHit};
use tracing::{debug, trace, warn};

use crate::classify::{classify, classify_best};
use crate::collab::{PoseSource, ReadingPresenter, SurfaceDetector, VisibilitySink};
use crate::config::MeterConfig;
use crate::error::Result;
use crate::focus::{SurfaceFocus, SurfaceFocusTracker, VisibilityDirective};
use crate::reading::Reading;
use crate::tracker::HeightTracker;

/// Everything one tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickOutcome {
    /// Classified sample.
    pub sample: SampleResult,
    /// Reading handed to the presenter.
    pub reading: Reading,
    /// Visibility directive, if one was not suppressed.
    pub directive: Option<VisibilityDirective>,
}

/// Drives classification, smoothing and surface focus once per tick.
///
/// Owns the hit scratch buffer reused across ticks; its contents are only
/// meaningful during a single [`HeightMeter::tick`].
///
/// # Example
///
/// ```
/// use glam::{Vec2, Vec3};
/// use height_meter::{HeightMeter, LabelPresenter, MeterConfig, VisibilityDirective};
/// use surface_types::{SurfaceHit, TrackId};
///
/// let mut meter = HeightMeter::new(MeterConfig::default()).unwrap();
/// let mut detector = |_query: Vec2, hits: &mut Vec<SurfaceHit>| {
///     hits.push(SurfaceHit::confirmed(Vec3::new(0.0, 0.0, -1.0), TrackId::new(1)));
/// };
/// let mut shown: Vec<VisibilityDirective> = Vec::new();
/// let mut presenter = LabelPresenter::new();
///
/// let outcome = meter.tick(&mut detector, &0.914f32, &mut shown, &mut presenter).unwrap();
///
/// assert!(outcome.reading.confident);
/// assert_eq!(shown, vec![VisibilityDirective::ShowOnly(TrackId::new(1))]);
/// assert!(presenter.current().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct HeightMeter {
    config: MeterConfig,
    tracker: HeightTracker,
    focus: SurfaceFocusTracker,
    hits: Vec<SurfaceHit>,
    ticks: u64,
}

impl HeightMeter {
    /// Creates a meter from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MeterError::InvalidConfig`] if the configuration
    /// fails validation.
    pub fn new(config: MeterConfig) -> Result<Self> {
        config.validate()?;
        if config.smoothing_window() == 0 {
            warn!("Smoothing window of 0 requested, using 1");
        }
        debug!(
            calibration_offset = config.calibration_offset(),
            target_height = config.target_height(),
            smoothing_window = config.effective_window(),
            "Height meter created"
        );
        Ok(Self {
            tracker: HeightTracker::new(config.effective_window()),
            focus: SurfaceFocusTracker::new(),
            hits: Vec::with_capacity(4),
            ticks: 0,
            config,
        })
    }

    /// Runs one tick against the collaborators.
    ///
    /// Returns `None` without touching any state if the pose is unavailable.
    pub fn tick<D, P, V, R>(
        &mut self,
        detector: &mut D,
        pose: &P,
        visibility: &mut V,
        presenter: &mut R,
    ) -> Option<TickOutcome>
    where
        D: SurfaceDetector + ?Sized,
        P: PoseSource + ?Sized,
        V: VisibilitySink + ?Sized,
        R: ReadingPresenter + ?Sized,
    {
        let Some(camera_height) = pose.camera_height() else {
            trace!("No pose this tick, skipping");
            return None;
        };

        self.hits.clear();
        detector.raycast(self.config.query_point(), &mut self.hits);
        let sample = classify_best(
            &self.hits,
            camera_height,
            self.config.calibration_offset(),
        );

        let outcome = self.advance(sample);
        if let Some(directive) = &outcome.directive {
            visibility.apply(directive);
        }
        presenter.present(&outcome.reading);
        Some(outcome)
    }

    /// Processes one tick's best hit without any collaborators.
    pub fn process(&mut self, hit: Option<&SurfaceHit>, camera_height: f32) -> TickOutcome {
        let sample = classify(hit, camera_height, self.config.calibration_offset());
        self.advance(sample)
    }

    fn advance(&mut self, sample: SampleResult) -> TickOutcome {
        self.ticks += 1;
        let reading = self.tracker.update(&sample, self.config.target_height());
        let directive = self.focus.observe(&sample);
        if let Some(directive) = &directive {
            debug!(tick = self.ticks, %directive, "Visibility directive");
        }
        TickOutcome {
            sample,
            reading,
            directive,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &MeterConfig {
        &self.config
    }

    /// Returns the smoothing tracker.
    #[must_use]
    pub const fn tracker(&self) -> &HeightTracker {
        &self.tracker
    }

    /// Returns the surface currently in focus.
    #[must_use]
    pub const fn focus(&self) -> SurfaceFocus {
        self.focus.focus()
    }

    /// Returns the number of ticks processed (skipped ticks excluded).
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }
}
