use std::fmt;

use super::model::BoundedTrackList;
use super::track::Track;

/// Format a number of seconds as `H:MM:SS`, or `M:SS` below an hour.
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

impl fmt::Display for Track {
    /// `title,artist,duration` with no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.title(), self.artist(), self.duration())
    }
}

impl fmt::Display for BoundedTrackList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for track in self {
            writeln!(f, "{track}")?;
        }
        Ok(())
    }
}
