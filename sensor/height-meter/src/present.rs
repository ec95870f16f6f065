//! Text labels for readings.

use serde::{Deserialize, Serialize};
use surface_types::SampleStatus;

use crate::collab::ReadingPresenter;
use crate::reading::Reading;
use crate::score::ColorToken;

/// Prompt shown while no surface has been found.
pub const SCANNING_MESSAGE: &str = "Detecting floor…\nMove the device slowly to scan the floor.";

/// A rendered reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Text to display.
    pub text: String,
    /// Color of the text, if the reading is authoritative.
    pub color: Option<ColorToken>,
}

impl Label {
    /// Renders a reading.
    ///
    /// # Example
    ///
    /// ```
    /// use height_meter::{ColorToken, Label, Reading};
    /// use surface_types::SampleStatus;
    ///
    /// let label = Label::for_reading(&Reading::scored(SampleStatus::Confirmed, Some(0.9), 0.914));
    /// assert_eq!(label.text, "Height 0.900 m (locked)\nΔ target −1.4 cm");
    /// assert_eq!(label.color, Some(ColorToken::Yellow));
    /// ```
    #[must_use]
    pub fn for_reading(reading: &Reading) -> Self {
        match (reading.status, reading.smoothed_height) {
            (SampleStatus::Confirmed, Some(height)) => {
                let text = match reading.deviation_cm {
                    Some(deviation) => {
                        let sign = if deviation >= 0.0 { '+' } else { '−' };
                        format!(
                            "Height {height:.3} m (locked)\nΔ target {sign}{:.1} cm",
                            deviation.abs()
                        )
                    }
                    None => format!("Height {height:.3} m (locked)"),
                };
                Self {
                    text,
                    color: reading.severity.map(|s| s.color_token()),
                }
            }
            (SampleStatus::Estimated, Some(height)) => Self {
                text: format!("Height {height:.3} m (estimating…)"),
                color: None,
            },
            (SampleStatus::None, Some(height)) => Self {
                text: format!("Height {height:.3} m (re-acquiring…)\n{SCANNING_MESSAGE}"),
                color: None,
            },
            (_, None) => Self {
                text: SCANNING_MESSAGE.to_string(),
                color: None,
            },
        }
    }
}

/// Presenter that keeps the label of the latest reading.
#[derive(Debug, Clone, Default)]
pub struct LabelPresenter {
    current: Option<Label>,
}

impl LabelPresenter {
    /// Creates a presenter with nothing displayed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the label currently displayed.
    #[must_use]
    pub const fn current(&self) -> Option<&Label> {
        self.current.as_ref()
    }
}

impl ReadingPresenter for LabelPresenter {
    fn present(&mut self, reading: &Reading) {
        self.current = Some(Label::for_reading(reading));
    }
}
