//! Display configuration
//!
//! Geometry and pixel-layout constants for the 128x64 remote display.
//! Every constant is overridable so that other panels and fonts can be
//! tuned without touching the layout code.

pub mod geometry;
pub mod layout;
#[cfg(feature = "toml")]
pub mod toml;

pub use geometry::*;
pub use layout::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML input could not be parsed or had the wrong value types
    Parse,
    /// Geometry values violate an invariant (e.g. zero scroll step)
    InvalidGeometry,
}

/// Complete display configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Panel size and scroll step
    pub geometry: DisplayGeometry,
    /// Pixel positions of every page element
    pub layout: LayoutConfig,
}

impl DisplayConfig {
    /// Check the invariants the scroll engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.geometry;
        if g.width <= 0 || g.height <= 0 || g.scroll_step < 1 || g.threshold_margin < 0 {
            return Err(ConfigError::InvalidGeometry);
        }
        Ok(())
    }
}
