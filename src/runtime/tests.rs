use super::startup::{build_playlist, summary};
use setlist::config::PlaylistSettings;
use setlist::playlist::{BoundedTrackList, Track};

fn t(title: &str, duration: u32) -> Track {
    Track::new(title, "Artist", duration)
}

#[test]
fn build_playlist_counts_tracks_that_do_not_fit() {
    let settings = PlaylistSettings {
        capacity: 2,
        ..PlaylistSettings::default()
    };
    let (playlist, skipped) = build_playlist(vec![t("a", 1), t("b", 2), t("c", 3)], &settings);

    assert_eq!(playlist.len(), 2);
    assert_eq!(skipped, 1);
    assert_eq!(playlist.render(), "a,Artist,1\nb,Artist,2\n");
}

#[test]
fn build_playlist_sorts_when_configured() {
    let settings = PlaylistSettings {
        capacity: 5,
        sort_by_duration: true,
        ..PlaylistSettings::default()
    };
    let (playlist, skipped) = build_playlist(
        vec![t("long", 300), t("short", 30), t("mid", 120)],
        &settings,
    );

    assert_eq!(skipped, 0);
    let titles: Vec<&str> = playlist.iter().map(Track::title).collect();
    assert_eq!(titles, vec!["short", "mid", "long"]);
}

#[test]
fn summary_reports_fill_total_and_shortest() {
    let (playlist, _) = build_playlist(
        vec![t("a", 3000), t("b", 600), t("c", 61)],
        &PlaylistSettings::default(),
    );
    assert_eq!(summary(&playlist), "3/100 tracks, total 1:01:01, shortest: c");
}

#[test]
fn summary_of_empty_playlist_has_no_shortest_track() {
    assert_eq!(
        summary(&BoundedTrackList::new(4)),
        "0/4 tracks, total 0:00, shortest: -"
    );
}
