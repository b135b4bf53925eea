//! Remote state snapshots
//!
//! Read-only views of what the network layer reports. The display code
//! never mutates these; it reads them once per render tick.

pub mod connectivity;
pub mod playback;
pub mod playlist;

pub use connectivity::{ConnectivityState, SignalState};
pub use playback::{PlaybackState, PlaybackStatus};
pub use playlist::{
    split_playlists, PlaylistName, PlaylistNames, Playlists, MAX_PLAYLISTS, MAX_PLAYLIST_NAME_LEN,
};
