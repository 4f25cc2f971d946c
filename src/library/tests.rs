use super::scan;
use super::scan::{is_audio_file, read_track};
use crate::config::LibrarySettings;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn titles(dir: &Path, settings: &LibrarySettings) -> Vec<String> {
    scan(dir, settings)
        .iter()
        .map(|t| t.title().to_string())
        .collect()
}

#[test]
fn is_audio_file_matches_configured_extensions_case_insensitive() {
    let settings = LibrarySettings::default();
    assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
    assert!(is_audio_file(Path::new("/tmp/a.MP3"), &settings));
    assert!(is_audio_file(Path::new("/tmp/a.flac"), &settings));
    assert!(is_audio_file(Path::new("/tmp/a.wav"), &settings));
    assert!(is_audio_file(Path::new("/tmp/a.ogg"), &settings));
    assert!(!is_audio_file(Path::new("/tmp/a.txt"), &settings));
    assert!(!is_audio_file(Path::new("/tmp/a"), &settings));

    let dotted = LibrarySettings {
        extensions: vec![".Opus".into(), "  ".into()],
        ..LibrarySettings::default()
    };
    assert!(is_audio_file(Path::new("/tmp/a.opus"), &dotted));
    assert!(!is_audio_file(Path::new("/tmp/a.mp3"), &dotted));
}

#[test]
fn read_track_falls_back_when_tags_are_unreadable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Fallback Song.mp3");
    fs::write(&path, b"not a real mp3").unwrap();

    let settings = LibrarySettings {
        unknown_artist: "Nobody".into(),
        ..LibrarySettings::default()
    };
    let track = read_track(&path, &settings);
    assert_eq!(track.title(), "Fallback Song");
    assert_eq!(track.artist(), "Nobody");
    assert_eq!(track.duration(), 0);
}

#[test]
fn scan_filters_non_audio_and_sorts_by_title_case_insensitive() {
    let dir = tempdir().unwrap();

    fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("A.ogg"), b"not a real ogg").unwrap();
    fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();

    assert_eq!(titles(dir.path(), &LibrarySettings::default()), vec!["A", "b"]);
}

#[test]
fn scan_respects_include_hidden_false() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".hidden.mp3"), b"not real").unwrap();
    fs::write(dir.path().join("visible.mp3"), b"not real").unwrap();

    let settings = LibrarySettings {
        include_hidden: false,
        ..LibrarySettings::default()
    };
    assert_eq!(titles(dir.path(), &settings), vec!["visible"]);
}

#[test]
fn scan_respects_recursive_false() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(sub.join("child.mp3"), b"not real").unwrap();

    let settings = LibrarySettings {
        recursive: false,
        ..LibrarySettings::default()
    };
    assert_eq!(titles(dir.path(), &settings), vec!["root"]);
}

#[test]
fn scan_respects_max_depth() {
    let dir = tempdir().unwrap();
    let d1 = dir.path().join("d1");
    let d2 = d1.join("d2");
    fs::create_dir_all(&d2).unwrap();
    fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
    fs::write(d1.join("one.mp3"), b"not real").unwrap();
    fs::write(d2.join("two.mp3"), b"not real").unwrap();

    // WalkDir depth counts root as 0, children as 1, grandchildren as 2.
    let settings = LibrarySettings {
        max_depth: Some(2),
        ..LibrarySettings::default()
    };
    let names = titles(dir.path(), &settings);
    assert!(names.contains(&"root".to_string()));
    assert!(names.contains(&"one".to_string()));
    assert!(!names.contains(&"two".to_string()));
}
