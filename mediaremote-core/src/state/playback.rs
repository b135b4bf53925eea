//! Media player state

/// Player status as reported by the remote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaybackStatus {
    Playing,
    Buffering,
    Paused,
    Idle,
    Off,
    #[default]
    Unknown,
}

impl PlaybackStatus {
    /// Map a remote state string onto a status
    pub fn parse(state: &str) -> Self {
        match state {
            "playing" => PlaybackStatus::Playing,
            "buffering" => PlaybackStatus::Buffering,
            "paused" => PlaybackStatus::Paused,
            "idle" => PlaybackStatus::Idle,
            "off" => PlaybackStatus::Off,
            _ => PlaybackStatus::Unknown,
        }
    }

    /// Whether media is (about to be) playing
    pub fn is_active(&self) -> bool {
        matches!(self, PlaybackStatus::Playing | PlaybackStatus::Buffering)
    }
}

/// Snapshot of the current track and player
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlaybackState<'a> {
    pub title: &'a str,
    pub artist: &'a str,
    /// Volume in [0, 1]
    pub volume: f32,
    pub status: PlaybackStatus,
    /// Whether the remote API link is up
    pub connected: bool,
}

impl PlaybackState<'_> {
    /// Volume clamped to [0, 1], NaN reads as muted
    pub fn volume_fraction(&self) -> f32 {
        if self.volume.is_nan() {
            0.0
        } else {
            self.volume.clamp(0.0, 1.0)
        }
    }

    /// Whether there is a track worth showing
    pub fn has_track(&self) -> bool {
        self.connected && !self.title.is_empty()
    }
}
