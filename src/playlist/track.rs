//! The `Track` value type stored in a playlist.

/// A single playlist entry.
///
/// Tracks carry no identity of their own: two tracks with the same title,
/// artist and duration are equal, and a playlist may hold duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Track {
    title: String,
    artist: String,
    /// Length in whole seconds.
    duration: u32,
}

impl Track {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration: u32) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Duration in seconds.
    pub fn duration(&self) -> u32 {
        self.duration
    }
}
