//! Page rendering for the media remote display
//!
//! This crate provides:
//! - `Canvas` / `TextMeasurer` traits for the drawing collaborator
//! - `Scroller`, the layout engine that animates over-wide text rows
//! - The now-playing, playlist selection and statistics pages
//! - `Renderer`, which owns per-page scroll state across render ticks
//!
//! # Architecture
//!
//! The renderer is driven once per tick by an external timer. Each tick it
//! reads a `RemoteState` snapshot, measures the texts it needs, decides
//! how to lay them out and issues draw calls. Scroll positions persist in
//! the renderer between ticks and reset whenever a measured width changes.
//!
//! ## Backends
//!
//! - `graphics` (default): `EgCanvas` draws onto any `embedded-graphics`
//!   `DrawTarget<Color = BinaryColor>` using mono fonts.
//! - `embassy`: `run_render_loop` redraws on an `embassy-time` ticker.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
#[cfg(feature = "graphics")]
pub mod eg;
pub mod icons;
pub mod pages;
pub mod renderer;
pub mod scroll;
#[cfg(feature = "embassy")]
pub mod ticker;

#[cfg(test)]
pub(crate) mod mock;

// Re-export key types
pub use backend::{Canvas, DisplayError, Font, TextAlign, TextMeasurer};
pub use pages::Page;
pub use renderer::{RemoteState, Renderer};
pub use scroll::{ScrollLine, Scroller, StaticLine};
