//! Playlist selection page
//!
//! The selected playlist sits in the middle row above a fixed underline
//! and always scrolls, marquee style. Its neighbours are drawn in the
//! caption font above and below.

use mediaremote_core::config::DisplayConfig;
use mediaremote_core::scroll::ScrollField;
use mediaremote_core::state::Playlists;

use crate::backend::{Canvas, DisplayError, Font};
use crate::scroll::{ScrollLine, Scroller, StaticLine};

const NOT_CONNECTED_LINES: (&str, &str) = ("Music Assistant", "is not connected!");
const NO_PLAYLISTS: &str = "No Playlists Found";

/// Scroll state of the selected playlist row
#[derive(Debug, Clone)]
pub struct PlaylistScreen {
    selected: ScrollField,
}

impl PlaylistScreen {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            selected: ScrollField::new(&config.geometry),
        }
    }

    pub fn selected(&self) -> &ScrollField {
        &self.selected
    }

    /// Draw one frame of the page
    ///
    /// A selection index outside the list draws nothing.
    pub fn render<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        config: &DisplayConfig,
        playlists: &Playlists,
        api_connected: bool,
    ) -> Result<(), DisplayError> {
        let geometry = &config.geometry;
        let layout = &config.layout.playlist;
        let center = geometry.center();

        if !api_connected {
            canvas.draw_centered(center, layout.placeholder_y.0, Font::Body, NOT_CONNECTED_LINES.0)?;
            return canvas.draw_centered(
                center,
                layout.placeholder_y.1,
                Font::Body,
                NOT_CONNECTED_LINES.1,
            );
        }
        if playlists.is_empty() {
            return canvas.draw_centered(center, layout.empty_y, Font::Body, NO_PLAYLISTS);
        }

        let index = playlists.selected_index();
        let Some(name) = playlists.selected() else {
            return Ok(());
        };

        let width = canvas.measure(Font::Body, name);
        if self.selected.sync_width(geometry, width, width / 2) {
            #[cfg(feature = "defmt")]
            defmt::debug!("Playlist {} selected, {}px", index, width);
        }

        // No neighbour above the first entry or below the last
        let previous = index
            .checked_sub(1)
            .and_then(|i| playlists.get(i))
            .map(|text| StaticLine::new(text, Font::Caption, center, layout.previous_y));
        let next = playlists
            .get(index + 1)
            .map(|text| StaticLine::new(text, Font::Caption, center, layout.next_y));
        let mut neighbours: heapless::Vec<StaticLine<'_>, 2> = heapless::Vec::new();
        for line in previous.into_iter().chain(next) {
            let _ = neighbours.push(line);
        }

        let line = ScrollLine::new(name, Font::Body, layout.selected_y, width);
        Scroller::new(geometry, layout.wrap_trigger).single(
            canvas,
            &mut self.selected,
            &line,
            &neighbours,
        )?;

        let half_underline = (width + layout.underline_padding) / 2;
        canvas.line(
            center - half_underline,
            layout.underline_y,
            center + half_underline,
            layout.underline_y,
        )
    }
}
