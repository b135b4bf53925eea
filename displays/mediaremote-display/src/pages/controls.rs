//! Control strip and volume bar

use mediaremote_core::config::{ControlsLayout, VolumeLayout};
use mediaremote_core::state::{PlaybackState, PlaybackStatus};

use super::Page;
use crate::backend::{Canvas, DisplayError, Font, TextAlign};
use crate::icons;

/// Draw the volume icon and bar
pub fn render_volume<C: Canvas + ?Sized>(
    canvas: &mut C,
    layout: &VolumeLayout,
    playback: &PlaybackState<'_>,
) -> Result<(), DisplayError> {
    let (icon_x, icon_y) = layout.icon;
    canvas.draw_text(icon_x, icon_y, Font::Icon18, TextAlign::Center, icons::VOLUME_HIGH)?;

    let (x, y, width, height) = layout.outline;
    canvas.rect(x, y, width, height)?;

    let (fill_x, fill_y) = layout.fill;
    let fill = (playback.volume_fraction() * layout.fill_span as f32) as i32;
    canvas.filled_rect(fill_x, fill_y, fill, layout.fill_height)
}

/// Draw the button hints along the bottom of the screen
///
/// The leftmost icon marks the active page, the middle one toggles
/// between play and pause with the player status.
pub fn render_controls<C: Canvas + ?Sized>(
    canvas: &mut C,
    layout: &ControlsLayout,
    width: i32,
    page: Page,
    status: PlaybackStatus,
) -> Result<(), DisplayError> {
    let y = layout.icon_y;
    canvas.line(0, layout.separator_y, width - 1, layout.separator_y)?;

    match page {
        Page::NowPlaying => {
            canvas.draw_centered(layout.now_playing_icon_x, y, Font::Icon16, icons::CAST_VARIANT)?
        }
        Page::PlaylistSelection => {
            canvas.draw_centered(layout.playlist_icon_x, y, Font::Icon20, icons::PLAYLIST_MUSIC)?
        }
        Page::Statistics => {
            canvas.draw_centered(layout.stats_icon_x, y, Font::Icon16, icons::INFORMATION)?
        }
    }

    canvas.draw_centered(layout.previous_x, y, Font::Icon21, icons::SKIP_PREVIOUS)?;
    if status.is_active() {
        canvas.draw_centered(layout.pause_x, y, Font::Icon21, icons::PAUSE)?;
    } else {
        canvas.draw_centered(layout.play_x, y, Font::Icon21, icons::PLAY)?;
    }
    canvas.draw_centered(layout.next_x, y, Font::Icon21, icons::SKIP_NEXT)?;
    canvas.draw_centered(layout.volume_sync_x, y, Font::Icon18, icons::VOLUME_EQUAL)
}
