//! Statistics page
//!
//! Wifi signal and API link status above the volume bar.

use core::fmt::Write;

use heapless::String;
use mediaremote_core::config::DisplayConfig;
use mediaremote_core::state::{ConnectivityState, PlaybackState, SignalState};

use super::controls::render_volume;
use crate::backend::{Canvas, DisplayError, Font, TextAlign};
use crate::icons;

/// Draw one frame of the page
pub fn render_statistics<C: Canvas + ?Sized>(
    canvas: &mut C,
    config: &DisplayConfig,
    connectivity: &ConnectivityState,
    playback: &PlaybackState<'_>,
) -> Result<(), DisplayError> {
    let layout = &config.layout.stats;

    let wifi_icon = match connectivity.signal() {
        SignalState::Connected => icons::WIFI,
        SignalState::Disconnected => icons::WIFI_OFF,
    };
    let (x, y) = layout.wifi_icon;
    canvas.draw_text(x, y, Font::Icon16, TextAlign::TopLeft, wifi_icon)?;

    let mut signal: String<16> = String::new();
    write!(signal, "{:.0} dBm", connectivity.wifi_signal_dbm)
        .map_err(|_| DisplayError::BufferOverflow)?;
    let (x, y) = layout.wifi_text;
    canvas.draw_text(x, y, Font::Body, TextAlign::TopLeft, &signal)?;

    let (api_icon, (x, y)) = if connectivity.api_connected {
        (icons::CAST_CONNECTED, layout.api_icon_connected)
    } else {
        (icons::CAST, layout.api_icon_disconnected)
    };
    canvas.draw_text(x, y, Font::Icon16, TextAlign::TopLeft, api_icon)?;

    let status = if connectivity.api_connected {
        "Connected"
    } else {
        "Disconnected"
    };
    let (x, y) = layout.api_text;
    canvas.draw_text(x, y, Font::Body, TextAlign::TopLeft, status)?;

    render_volume(canvas, &config.layout.volume, playback)
}
