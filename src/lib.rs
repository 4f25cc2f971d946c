//! # setlist
//!
//! A fixed-capacity playlist of tracks.
//!
//! The heart of the crate is [`playlist::BoundedTrackList`], an ordered list
//! whose capacity is chosen once and never grows. It supports appending,
//! positional insertion and removal, title lookup, total and shortest
//! duration queries and an in-place sort by duration. Rejected mutations
//! report a [`playlist::PlaylistError`] and leave the list untouched.
//!
//! The [`library`] and [`config`] modules back the `setlist` binary, which
//! fills a playlist from a music directory and prints it.

pub mod config;
pub mod library;
pub mod playlist;
