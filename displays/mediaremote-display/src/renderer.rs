//! Per-tick page renderer
//!
//! Owns the active page and the scroll state of every page. State is
//! created with the renderer and lives as long as it does; it is never
//! torn down on page switches, only reset when the measured text changes.

use mediaremote_core::config::DisplayConfig;
use mediaremote_core::state::{ConnectivityState, PlaybackState, Playlists};

use crate::backend::{Canvas, DisplayError};
use crate::pages::{render_controls, render_statistics, NowPlayingScreen, Page, PlaylistScreen};

/// Everything the pages read in one tick
#[derive(Debug, Clone, Copy)]
pub struct RemoteState<'a> {
    pub playback: PlaybackState<'a>,
    pub connectivity: ConnectivityState,
    pub playlists: &'a Playlists,
}

/// Page renderer
#[derive(Debug, Clone)]
pub struct Renderer {
    config: DisplayConfig,
    page: Page,
    now_playing: NowPlayingScreen,
    playlist: PlaylistScreen,
}

impl Renderer {
    /// Create a renderer showing the now-playing page
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            now_playing: NowPlayingScreen::new(&config),
            playlist: PlaylistScreen::new(&config),
            page: Page::default(),
            config,
        }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Switch to a page
    pub fn set_page(&mut self, page: Page) {
        #[cfg(feature = "defmt")]
        if page != self.page {
            defmt::debug!("Page: {}", page);
        }
        self.page = page;
    }

    /// Switch to the following page
    pub fn next_page(&mut self) {
        self.set_page(self.page.next());
    }

    pub fn now_playing(&self) -> &NowPlayingScreen {
        &self.now_playing
    }

    pub fn playlist(&self) -> &PlaylistScreen {
        &self.playlist
    }

    /// Render one tick: clear, active page, control strip, flush
    pub fn render<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        state: &RemoteState<'_>,
    ) -> Result<(), DisplayError> {
        canvas.clear()?;

        match self.page {
            Page::NowPlaying => self.now_playing.render(canvas, &self.config, &state.playback)?,
            Page::PlaylistSelection => self.playlist.render(
                canvas,
                &self.config,
                state.playlists,
                state.connectivity.api_connected,
            )?,
            Page::Statistics => {
                render_statistics(canvas, &self.config, &state.connectivity, &state.playback)?
            }
        }

        render_controls(
            canvas,
            &self.config.layout.controls,
            self.config.geometry.width,
            self.page,
            state.playback.status,
        )?;
        canvas.flush()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}
