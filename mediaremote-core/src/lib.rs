//! Board-agnostic core logic for the media remote display
//!
//! This crate contains everything that does not touch a display driver:
//!
//! - Display geometry and layout tuning constants
//! - Scroll state for animated text fields (positions, wrap alignment)
//! - Layout mode selection and pacing for paired fields
//! - Remote state snapshots (playback, connectivity, playlists)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod scroll;
pub mod state;

pub use config::{DisplayConfig, DisplayGeometry, LayoutConfig, WrapTrigger};
pub use scroll::{LayoutMode, Pacing, ScrollField};
pub use state::{ConnectivityState, PlaybackState, PlaybackStatus, Playlists, SignalState};
