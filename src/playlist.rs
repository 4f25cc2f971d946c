//! Playlist module: a fixed-capacity, ordered list of tracks.
//!
//! `BoundedTrackList` lives in `playlist::model` and owns a slot array sized
//! once at construction. Every mutation either applies fully or leaves the
//! list untouched and reports a `PlaylistError`.

mod display;
mod error;
mod model;
mod track;

pub use display::format_duration;
pub use error::PlaylistError;
pub use model::*;
pub use track::Track;
