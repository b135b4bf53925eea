//! Fixed-rate render loop
//!
//! Redraws the active page every `refresh_ms`. Page changes requested by
//! the input side arrive through a `Signal` and are applied at the start of
//! the next frame, so the renderer itself is only ever touched from here.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};

use crate::backend::{Canvas, DisplayError};
use crate::pages::Page;
use crate::renderer::{RemoteState, Renderer};

/// Page change requested by the buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PageRequest {
    /// Cycle to the following page
    Next,
    /// Jump to a page
    Show(Page),
}

/// Supplies the remote state for a frame
pub trait StateSource {
    /// Call `f` with the current state
    fn with_state<R>(&mut self, f: impl FnOnce(&RemoteState<'_>) -> R) -> R;
}

/// Apply a pending page request and draw one frame
pub fn render_frame<M, C, S>(
    renderer: &mut Renderer,
    canvas: &mut C,
    source: &mut S,
    requests: &Signal<M, PageRequest>,
) -> Result<(), DisplayError>
where
    M: RawMutex,
    C: Canvas + ?Sized,
    S: StateSource,
{
    match requests.try_take() {
        Some(PageRequest::Next) => renderer.next_page(),
        Some(PageRequest::Show(page)) => renderer.set_page(page),
        None => {}
    }
    source.with_state(|state| renderer.render(canvas, state))
}

/// Render forever at the configured refresh rate
///
/// Draw errors are logged and the next frame is attempted as usual; scroll
/// positions keep advancing either way.
pub async fn run_render_loop<M, C, S>(
    renderer: &mut Renderer,
    canvas: &mut C,
    source: &mut S,
    requests: &Signal<M, PageRequest>,
) -> !
where
    M: RawMutex,
    C: Canvas + ?Sized,
    S: StateSource,
{
    let period = Duration::from_millis(renderer.config().layout.refresh_ms as u64);
    let mut ticker = Ticker::every(period);

    #[cfg(feature = "defmt")]
    defmt::info!("Render loop started, {}ms per frame", renderer.config().layout.refresh_ms);

    loop {
        ticker.next().await;
        if let Err(_e) = render_frame(renderer, canvas, source, requests) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Frame render failed: {}", _e);
        }
    }
}
