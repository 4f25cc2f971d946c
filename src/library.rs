//! Music directory scanning.
//!
//! Walks a directory tree and turns every audio file it finds into a
//! playlist `Track`, reading title, artist and duration from the file's tags.

mod scan;

pub use scan::scan;

#[cfg(test)]
mod tests;
