//! Playlist names and selection
//!
//! The remote publishes its playlists as one comma-separated string.
//! Names are stored in bounded buffers; anything that does not fit is
//! truncated rather than rejected so the page always has something to show.

use heapless::{String, Vec};

/// Maximum number of playlists kept
pub const MAX_PLAYLISTS: usize = 32;

/// Maximum bytes per playlist name
pub const MAX_PLAYLIST_NAME_LEN: usize = 48;

/// A single playlist name
pub type PlaylistName = String<MAX_PLAYLIST_NAME_LEN>;

/// Ordered playlist names
pub type PlaylistNames = Vec<PlaylistName, MAX_PLAYLISTS>;

/// Split a comma-separated playlist list into names
///
/// Empty names between two commas are kept, a trailing comma does not add
/// an empty name, and an empty input yields no names.
pub fn split_playlists(list: &str) -> PlaylistNames {
    let mut names = PlaylistNames::new();
    let mut tokens = list.split(',').peekable();

    while let Some(token) = tokens.next() {
        if token.is_empty() && tokens.peek().is_none() {
            break;
        }
        if names.is_full() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Playlist list exceeds {} names, dropping the rest", MAX_PLAYLISTS);
            break;
        }
        let _ = names.push(bounded_name(token));
    }

    names
}

/// Copy a name, truncating on a char boundary if it is too long
fn bounded_name(token: &str) -> PlaylistName {
    let mut end = token.len().min(MAX_PLAYLIST_NAME_LEN);
    while !token.is_char_boundary(end) {
        end -= 1;
    }
    #[cfg(feature = "defmt")]
    if end < token.len() {
        defmt::warn!("Playlist name truncated to {} bytes", end);
    }

    let mut name = PlaylistName::new();
    let _ = name.push_str(&token[..end]);
    name
}

/// Playlist names plus the currently selected index
///
/// The index is owned by the input side; it is not checked against the
/// list here.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Playlists {
    names: PlaylistNames,
    selected: usize,
}

impl Playlists {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the names from a comma-separated list
    ///
    /// The selected index is left untouched.
    pub fn load(&mut self, list: &str) {
        self.names = split_playlists(list);

        #[cfg(feature = "defmt")]
        defmt::debug!("Loaded {} playlists", self.names.len());
    }

    pub fn names(&self) -> &[PlaylistName] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name at an index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(|name| name.as_str())
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Name at the selected index, if it is in range
    pub fn selected(&self) -> Option<&str> {
        self.get(self.selected)
    }

    /// Set the selected index
    pub fn select(&mut self, index: usize) {
        self.selected = index;
    }

    /// Move the selection down, stopping at the last name
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.names.len() {
            self.selected += 1;
        }
    }

    /// Move the selection up, stopping at the first name
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
