//! TOML display configuration
//!
//! All keys are optional and fall back to the defaults:
//!
//! ```toml
//! [geometry]
//! scroll_step = 2
//!
//! [layout.playlist]
//! wrap_trigger = "past_center"
//! ```

use super::{ConfigError, DisplayConfig};

/// Parse and validate a display configuration
pub fn parse_config(input: &str) -> Result<DisplayConfig, ConfigError> {
    let config: DisplayConfig = ::toml::from_str(input).map_err(|_e| {
        #[cfg(feature = "defmt")]
        defmt::warn!("TOML parse error: {}", defmt::Display2Format(&_e));
        ConfigError::Parse
    })?;
    config.validate()?;

    #[cfg(feature = "defmt")]
    defmt::info!(
        "Display config: {}x{} step {}",
        config.geometry.width,
        config.geometry.height,
        config.geometry.scroll_step
    );

    Ok(config)
}
