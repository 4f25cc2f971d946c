use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/setlist/config.toml` or `~/.config/setlist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SETLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playlist: PlaylistSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Maximum number of tracks the playlist holds. Extra scanned tracks are skipped.
    pub capacity: usize,
    /// Sort the playlist by duration (shortest first) before printing.
    pub sort_by_duration: bool,
    /// Print the count / total duration / shortest track footer.
    pub show_summary: bool,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            capacity: 100,
            sort_by_duration: false,
            show_summary: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
    /// Artist recorded for files without an artist tag.
    pub unknown_artist: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
            unknown_artist: "Unknown Artist".to_string(),
        }
    }
}
