use std::env;
use std::io::{self, Write};
use std::path::Path;

use log::{info, warn};
use setlist::library::scan;

mod settings;
mod startup;

#[cfg(test)]
mod tests;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let dir = env::args().nth(1).unwrap_or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| ".".to_string())
    });

    info!("setlist: scanning {dir}");
    let tracks = scan(Path::new(&dir), &settings.library);
    info!("setlist: found {} track(s)", tracks.len());

    let (playlist, skipped) = startup::build_playlist(tracks, &settings.playlist);
    if skipped > 0 {
        warn!(
            "setlist: playlist is full at {} tracks, skipped {skipped}",
            playlist.capacity()
        );
    }

    let mut out = io::stdout().lock();
    out.write_all(playlist.render().as_bytes())?;
    if settings.playlist.show_summary {
        writeln!(out, "{}", startup::summary(&playlist))?;
    }
    out.flush()?;

    Ok(())
}
