//! Now-playing page
//!
//! Shows the track title above the artist. Rows that do not fit the
//! screen scroll; when both are too wide they scroll together, paced by
//! the wider one.

use mediaremote_core::config::DisplayConfig;
use mediaremote_core::scroll::{LayoutMode, Pacing, ScrollField};
use mediaremote_core::state::PlaybackState;

use super::controls::render_volume;
use crate::backend::{Canvas, DisplayError, Font};
use crate::scroll::{ScrollLine, Scroller, StaticLine};

const IDLE_LINES: (&str, &str) = ("Player is idle", "or disconnected!");

/// Scroll state of the title and artist rows
#[derive(Debug, Clone)]
pub struct NowPlayingScreen {
    title: ScrollField,
    artist: ScrollField,
}

impl NowPlayingScreen {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            title: ScrollField::new(&config.geometry),
            artist: ScrollField::new(&config.geometry),
        }
    }

    pub fn title(&self) -> &ScrollField {
        &self.title
    }

    pub fn artist(&self) -> &ScrollField {
        &self.artist
    }

    /// Draw one frame of the page
    pub fn render<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        config: &DisplayConfig,
        playback: &PlaybackState<'_>,
    ) -> Result<(), DisplayError> {
        let geometry = &config.geometry;
        let layout = &config.layout.now_playing;
        let center = geometry.center();

        if !playback.has_track() {
            canvas.draw_centered(center, layout.placeholder_y.0, Font::Body, IDLE_LINES.0)?;
            return canvas.draw_centered(center, layout.placeholder_y.1, Font::Body, IDLE_LINES.1);
        }

        let title_width = canvas.measure(Font::Body, playback.title);
        let artist_width = canvas.measure(Font::Body, playback.artist);
        self.sync(config, title_width, artist_width);

        let title = ScrollLine::new(playback.title, Font::Body, layout.title_y, title_width);
        let artist = ScrollLine::new(playback.artist, Font::Body, layout.artist_y, artist_width);
        let scroller = Scroller::new(geometry, layout.wrap_trigger);

        match LayoutMode::select(title_width, artist_width, geometry.width_threshold()) {
            LayoutMode::BothFit => {
                title.draw_at(canvas, center)?;
                artist.draw_at(canvas, center)?;
            }
            LayoutMode::ScrollPrimaryOnly => {
                let fixed = StaticLine::new(artist.text, artist.font, center, artist.y);
                scroller.single(canvas, &mut self.title, &title, &[fixed])?;
            }
            LayoutMode::ScrollSecondaryOnly => {
                let fixed = StaticLine::new(title.text, title.font, center, title.y);
                scroller.single(canvas, &mut self.artist, &artist, &[fixed])?;
            }
            LayoutMode::ScrollBoth => {
                scroller.coupled(canvas, &mut self.title, &title, &mut self.artist, &artist)?;
            }
        }

        render_volume(canvas, &config.layout.volume, playback)
    }

    /// Restart both rows if either measured width changed
    fn sync(&mut self, config: &DisplayConfig, title_width: i32, artist_width: i32) {
        if self.title.last_width() == title_width && self.artist.last_width() == artist_width {
            return;
        }
        let half = Pacing::between(title_width, artist_width).half_width(title_width, artist_width);
        self.title.resize(&config.geometry, title_width, half);
        self.artist.resize(&config.geometry, artist_width, half);

        #[cfg(feature = "defmt")]
        defmt::debug!("Track changed: title {}px, artist {}px", title_width, artist_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockCanvas, Op};

    fn playing<'a>(title: &'a str, artist: &'a str) -> PlaybackState<'a> {
        PlaybackState {
            title,
            artist,
            volume: 0.5,
            connected: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_placeholder() {
        let config = DisplayConfig::default();
        let mut screen = NowPlayingScreen::new(&config);
        let mut canvas = MockCanvas::new();

        screen.render(&mut canvas, &config, &playing("", "Artist")).unwrap();
        assert_eq!(canvas.texts("Player is idle"), [(64, 15)]);
        assert_eq!(canvas.texts("or disconnected!"), [(64, 30)]);
        assert!(canvas.texts("Artist").is_empty());
    }

    #[test]
    fn test_disconnected_placeholder() {
        let config = DisplayConfig::default();
        let mut screen = NowPlayingScreen::new(&config);
        let mut canvas = MockCanvas::new();
        let mut state = playing("Song", "Artist");
        state.connected = false;

        screen.render(&mut canvas, &config, &state).unwrap();
        assert_eq!(canvas.drawn_strings(), ["Player is idle", "or disconnected!"]);
    }

    #[test]
    fn test_both_fit_is_static() {
        let config = DisplayConfig::default();
        let mut screen = NowPlayingScreen::new(&config);
        let mut canvas = MockCanvas::new()
            .with_width("Title", 60)
            .with_width("Artist", 60);
        let state = playing("Title", "Artist");

        screen.render(&mut canvas, &config, &state).unwrap();
        let title_field = *screen.title();
        let artist_field = *screen.artist();

        for _ in 0..5 {
            screen.render(&mut canvas, &config, &state).unwrap();
        }
        assert_eq!(canvas.texts("Title"), [(64, 10); 6]);
        assert_eq!(canvas.texts("Artist"), [(64, 24); 6]);
        assert_eq!(*screen.title(), title_field);
        assert_eq!(*screen.artist(), artist_field);
        assert!(canvas.ops.contains(&Op::FilledRect(21, 37, 52, 6)));
    }

    #[test]
    fn test_scroll_title_only() {
        let config = DisplayConfig::default();
        let mut screen = NowPlayingScreen::new(&config);
        let mut canvas = MockCanvas::new()
            .with_width("Long title", 140)
            .with_width("Artist", 40);
        let state = playing("Long title", "Artist");

        for _ in 0..3 {
            screen.render(&mut canvas, &config, &state).unwrap();
        }
        assert_eq!(canvas.texts("Long title"), [(64, 10), (63, 10), (62, 10)]);
        assert_eq!(canvas.texts("Artist"), [(64, 24); 3]);
        assert_eq!(screen.artist().primary_pos(), 64);
    }

    #[test]
    fn test_scroll_artist_only() {
        let config = DisplayConfig::default();
        let mut screen = NowPlayingScreen::new(&config);
        let mut canvas = MockCanvas::new()
            .with_width("Title", 50)
            .with_width("Long artist", 131);
        let state = playing("Title", "Long artist");

        screen.render(&mut canvas, &config, &state).unwrap();
        screen.render(&mut canvas, &config, &state).unwrap();
        assert_eq!(canvas.texts("Long artist"), [(64, 24), (63, 24)]);
        assert_eq!(canvas.texts("Title"), [(64, 10), (64, 10)]);
        assert_eq!(screen.title().primary_pos(), 64);
    }

    #[test]
    fn test_scroll_both_paced_by_wider() {
        let config = DisplayConfig::default();
        let mut screen = NowPlayingScreen::new(&config);
        let mut canvas = MockCanvas::new()
            .with_width("T", 150)
            .with_width("A", 220);
        let state = playing("T", "A");

        screen.render(&mut canvas, &config, &state).unwrap();
        // Both wrap copies are spaced by the artist's half-width
        assert_eq!(screen.title().wrap_pos(), config.geometry.wrap_start(110));
        assert_eq!(screen.artist().wrap_pos(), config.geometry.wrap_start(110));
        assert_eq!(screen.title().primary_pos(), 63);
        assert_eq!(screen.artist().primary_pos(), 63);
    }

    #[test]
    fn test_track_change_resets_positions() {
        let config = DisplayConfig::default();
        let mut screen = NowPlayingScreen::new(&config);
        let mut canvas = MockCanvas::new()
            .with_width("First", 140)
            .with_width("Second", 180)
            .with_width("Artist", 40);

        for _ in 0..10 {
            screen.render(&mut canvas, &config, &playing("First", "Artist")).unwrap();
        }
        assert_eq!(screen.title().primary_pos(), 54);

        canvas.take();
        screen.render(&mut canvas, &config, &playing("Second", "Artist")).unwrap();
        assert_eq!(canvas.texts("Second"), [(64, 10)]);
        assert_eq!(screen.title().wrap_pos(), config.geometry.wrap_start(90));
    }

    #[test]
    fn test_artist_change_restarts_title() {
        let config = DisplayConfig::default();
        let mut screen = NowPlayingScreen::new(&config);
        let mut canvas = MockCanvas::new()
            .with_width("Title", 140)
            .with_width("One", 30)
            .with_width("Other", 50);

        for _ in 0..10 {
            screen.render(&mut canvas, &config, &playing("Title", "One")).unwrap();
        }
        screen.render(&mut canvas, &config, &playing("Title", "Other")).unwrap();
        assert_eq!(screen.title().primary_pos(), 63);
    }
}
