//! Display pages
//!
//! Each page draws the area above the control strip. Pages that scroll
//! keep their `ScrollField`s in a screen struct owned by the `Renderer`.

pub mod controls;
pub mod now_playing;
pub mod playlist;
pub mod stats;

pub use controls::{render_controls, render_volume};
pub use now_playing::NowPlayingScreen;
pub use playlist::PlaylistScreen;
pub use stats::render_statistics;

/// Selectable display pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    #[default]
    NowPlaying,
    PlaylistSelection,
    Statistics,
}

impl Page {
    /// The page the page button switches to
    pub fn next(&self) -> Self {
        match self {
            Page::NowPlaying => Page::PlaylistSelection,
            Page::PlaylistSelection => Page::Statistics,
            Page::Statistics => Page::NowPlaying,
        }
    }
}
