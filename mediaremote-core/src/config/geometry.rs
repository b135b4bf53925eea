//! Panel geometry and scroll grid alignment

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default panel width in pixels
pub const DEFAULT_WIDTH: i32 = 128;

/// Default panel height in pixels
pub const DEFAULT_HEIGHT: i32 = 64;

/// Pixels advanced per render tick (1 px is smooth at ~24 fps)
pub const DEFAULT_SCROLL_STEP: i32 = 1;

/// Extra pixels a text may exceed the width by before it scrolls
pub const DEFAULT_THRESHOLD_MARGIN: i32 = 2;

/// When the wrapped copy of a scrolling text starts being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WrapTrigger {
    /// Once the trailing edge of the primary copy passes the center
    #[default]
    PastCenter,
    /// As `PastCenter`, but only once the leading edge has left the screen
    LeadingEdge,
}

/// Fixed display geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayGeometry {
    /// Screen width (W)
    pub width: i32,
    /// Screen height (H)
    pub height: i32,
    /// Scroll step (S), must be at least 1
    pub scroll_step: i32,
    /// Added to the width to get the scroll threshold
    pub threshold_margin: i32,
}

impl Default for DisplayGeometry {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scroll_step: DEFAULT_SCROLL_STEP,
            threshold_margin: DEFAULT_THRESHOLD_MARGIN,
        }
    }
}

impl DisplayGeometry {
    /// Horizontal center (C)
    pub const fn center(&self) -> i32 {
        self.width / 2
    }

    /// Texts at least this wide are scrolled
    pub const fn width_threshold(&self) -> i32 {
        self.width + self.threshold_margin
    }

    /// Align a reset position forward onto the scroll grid
    ///
    /// The result is strictly greater than `raw` and congruent to the
    /// center modulo the scroll step, so wrap copies always re-enter on the
    /// same pixel grid regardless of the text width.
    pub fn align_reset_pos(&self, raw: i32) -> i32 {
        let step = self.scroll_step.max(1);
        raw + (step - (raw - self.center()).rem_euclid(step))
    }

    /// Start position of a wrap copy for a text of the given half-width
    pub fn wrap_start(&self, half_width: i32) -> i32 {
        self.align_reset_pos(self.width + half_width)
    }
}
