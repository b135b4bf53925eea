//! Layout mode selection for the paired title/artist rows

/// How a pair of text rows is laid out this tick
///
/// Modes are not stored; they are re-derived from the measured widths on
/// every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutMode {
    /// Both rows fit, draw both centered
    BothFit,
    /// Only the primary (upper) row is too wide
    ScrollPrimaryOnly,
    /// Only the secondary (lower) row is too wide
    ScrollSecondaryOnly,
    /// Both rows are too wide and scroll together
    ScrollBoth,
}

impl LayoutMode {
    /// Select the mode for two measured widths
    pub fn select(primary_width: i32, secondary_width: i32, threshold: i32) -> Self {
        match (primary_width >= threshold, secondary_width >= threshold) {
            (false, false) => LayoutMode::BothFit,
            (true, false) => LayoutMode::ScrollPrimaryOnly,
            (false, true) => LayoutMode::ScrollSecondaryOnly,
            (true, true) => LayoutMode::ScrollBoth,
        }
    }

    /// Check if any row animates in this mode
    pub fn is_scrolling(&self) -> bool {
        !matches!(self, LayoutMode::BothFit)
    }
}

/// Which of two coupled rows paces wrap and rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pacing {
    Primary,
    Secondary,
}

impl Pacing {
    /// The wider row paces; ties go to the primary row
    pub fn between(primary_width: i32, secondary_width: i32) -> Self {
        if primary_width >= secondary_width {
            Pacing::Primary
        } else {
            Pacing::Secondary
        }
    }

    /// Half-width of the pacing row
    pub fn half_width(&self, primary_width: i32, secondary_width: i32) -> i32 {
        match self {
            Pacing::Primary => primary_width / 2,
            Pacing::Secondary => secondary_width / 2,
        }
    }
}
