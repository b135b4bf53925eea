//! Pixel layout of the display pages
//!
//! Defaults are tuned for a 128x64 panel with 12 px body text.
//! Text rows given as `*_y` are vertical centers for centered text and
//! top edges for left-aligned text.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::WrapTrigger;

/// Default redraw interval (~24 fps)
pub const DEFAULT_REFRESH_MS: u32 = 42;

/// Now-playing page layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NowPlayingLayout {
    pub title_y: i32,
    pub artist_y: i32,
    /// Two-line placeholder shown when idle or disconnected
    pub placeholder_y: (i32, i32),
    pub wrap_trigger: WrapTrigger,
}

impl Default for NowPlayingLayout {
    fn default() -> Self {
        Self {
            title_y: 10,
            artist_y: 24,
            placeholder_y: (15, 30),
            wrap_trigger: WrapTrigger::PastCenter,
        }
    }
}

/// Playlist selection page layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlaylistLayout {
    pub previous_y: i32,
    pub selected_y: i32,
    pub next_y: i32,
    pub underline_y: i32,
    /// Added to the measured width of the selected name
    pub underline_padding: i32,
    /// Row of the "no playlists" message
    pub empty_y: i32,
    /// Two-line placeholder shown when the API is down
    pub placeholder_y: (i32, i32),
    pub wrap_trigger: WrapTrigger,
}

impl Default for PlaylistLayout {
    fn default() -> Self {
        Self {
            previous_y: 8,
            selected_y: 22,
            next_y: 38,
            underline_y: 31,
            underline_padding: 4,
            empty_y: 24,
            placeholder_y: (15, 30),
            wrap_trigger: WrapTrigger::LeadingEdge,
        }
    }
}

/// Statistics page layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatsLayout {
    pub wifi_icon: (i32, i32),
    pub wifi_text: (i32, i32),
    pub api_icon_connected: (i32, i32),
    pub api_icon_disconnected: (i32, i32),
    pub api_text: (i32, i32),
}

impl Default for StatsLayout {
    fn default() -> Self {
        Self {
            wifi_icon: (3, 0),
            wifi_text: (22, 0),
            api_icon_connected: (2, 17),
            api_icon_disconnected: (2, 16),
            api_text: (22, 16),
        }
    }
}

/// Volume bar layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VolumeLayout {
    pub icon: (i32, i32),
    /// Outline as (x, y, width, height)
    pub outline: (i32, i32, i32, i32),
    /// Fill origin
    pub fill: (i32, i32),
    /// Fill width at full volume
    pub fill_span: i32,
    pub fill_height: i32,
}

impl Default for VolumeLayout {
    fn default() -> Self {
        Self {
            icon: (10, 41),
            outline: (20, 36, 105, 7),
            fill: (21, 37),
            fill_span: 104,
            fill_height: 6,
        }
    }
}

/// Button-control strip along the bottom of every page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControlsLayout {
    pub separator_y: i32,
    pub icon_y: i32,
    /// Active-page icon positions
    pub now_playing_icon_x: i32,
    pub playlist_icon_x: i32,
    pub stats_icon_x: i32,
    pub previous_x: i32,
    pub play_x: i32,
    pub pause_x: i32,
    pub next_x: i32,
    pub volume_sync_x: i32,
}

impl Default for ControlsLayout {
    fn default() -> Self {
        Self {
            separator_y: 46,
            icon_y: 56,
            now_playing_icon_x: 13,
            playlist_icon_x: 14,
            stats_icon_x: 14,
            previous_x: 38,
            play_x: 63,
            pause_x: 64,
            next_x: 89,
            volume_sync_x: 115,
        }
    }
}

/// Layout of all pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    pub now_playing: NowPlayingLayout,
    pub playlist: PlaylistLayout,
    pub stats: StatsLayout,
    pub volume: VolumeLayout,
    pub controls: ControlsLayout,
    /// Redraw interval of the render loop
    pub refresh_ms: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            now_playing: NowPlayingLayout::default(),
            playlist: PlaylistLayout::default(),
            stats: StatsLayout::default(),
            volume: VolumeLayout::default(),
            controls: ControlsLayout::default(),
            refresh_ms: DEFAULT_REFRESH_MS,
        }
    }
}
