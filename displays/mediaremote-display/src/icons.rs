//! Material Design Icons glyphs used on the pages
//!
//! These sit in the supplementary private use area and need an icon font
//! that maps them.

pub const VOLUME_HIGH: &str = "\u{F057E}";
pub const VOLUME_EQUAL: &str = "\u{F1B10}";

pub const CAST_VARIANT: &str = "\u{F001F}";
pub const PLAYLIST_MUSIC: &str = "\u{F0CB8}";
pub const INFORMATION: &str = "\u{F02FC}";

pub const SKIP_PREVIOUS: &str = "\u{F04AE}";
pub const SKIP_NEXT: &str = "\u{F04AD}";
pub const PLAY: &str = "\u{F040A}";
pub const PAUSE: &str = "\u{F03E4}";

pub const WIFI: &str = "\u{F05A9}";
pub const WIFI_OFF: &str = "\u{F05AA}";
pub const CAST: &str = "\u{F0118}";
pub const CAST_CONNECTED: &str = "\u{F0119}";
