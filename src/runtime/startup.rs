use setlist::config::PlaylistSettings;
use setlist::playlist::{BoundedTrackList, Track, format_duration};

/// Fill a playlist of the configured capacity from `tracks`.
///
/// Returns the playlist and the number of tracks that did not fit.
pub fn build_playlist(
    tracks: Vec<Track>,
    settings: &PlaylistSettings,
) -> (BoundedTrackList, usize) {
    let mut playlist = BoundedTrackList::new(settings.capacity);
    let mut skipped = 0;
    for track in tracks {
        if playlist.append(track).is_err() {
            skipped += 1;
        }
    }

    if settings.sort_by_duration {
        playlist.sort_by_duration();
    }

    (playlist, skipped)
}

/// One-line footer: fill level, total running time and the shortest track.
pub fn summary(playlist: &BoundedTrackList) -> String {
    format!(
        "{}/{} tracks, total {}, shortest: {}",
        playlist.len(),
        playlist.capacity(),
        format_duration(playlist.total_duration()),
        playlist.shortest_track_title().unwrap_or("-"),
    )
}
