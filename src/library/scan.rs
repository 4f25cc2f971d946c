use std::path::Path;

use lofty::prelude::{Accessor, AudioFile, TaggedFileExt};
use log::warn;
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::playlist::Track;

pub(super) fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Build a `Track` for `path`, falling back to the file stem, the configured
/// unknown-artist label and a zero duration when tags are missing.
pub(super) fn read_track(path: &Path, settings: &LibrarySettings) -> Track {
    let mut title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    let mut artist = settings.unknown_artist.clone();
    let mut duration = 0u32;

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            let secs = tagged.properties().duration().as_secs();
            duration = u32::try_from(secs).unwrap_or(u32::MAX);

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.title().as_deref().and_then(non_blank) {
                    title = v;
                }
                if let Some(v) = tag.artist().as_deref().and_then(non_blank) {
                    artist = v;
                }
            }
        }
        Err(e) => warn!("setlist: unreadable metadata in {}: {e}", path.display()),
    }

    Track::new(title, artist, duration)
}

/// Scan `dir` for audio files, ordered case-insensitively by title.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_audio_file(path, settings)
        {
            tracks.push(read_track(path, settings));
        }
    }

    tracks.sort_by_key(|t| t.title().to_lowercase());
    tracks
}
