//! Playlist model: `BoundedTrackList`.
//!
//! Tracks occupy the leading `len` slots of a boxed slice whose length is the
//! capacity. The slice is never reallocated; inserts and removals shift the
//! occupied range in place.

use std::slice;

use log::debug;

use super::error::PlaylistError;
use super::track::Track;

/// An ordered list of tracks that can never hold more than `capacity` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedTrackList {
    slots: Box<[Option<Track>]>,
    len: usize,
}

impl BoundedTrackList {
    /// Create an empty list able to hold `capacity` tracks.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Number of tracks that can still be added.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// Return the track at `index`, or `None` past the occupied range.
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.occupied().get(index).and_then(Option::as_ref)
    }

    /// Iterate over the occupied tracks in list order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.occupied().iter(),
        }
    }

    /// Index of the first track whose title matches `title`, ignoring case.
    pub fn index_of(&self, title: &str) -> Option<usize> {
        let wanted = title.to_lowercase();
        self.iter().position(|t| t.title().to_lowercase() == wanted)
    }

    /// Sum of all track durations in seconds.
    pub fn total_duration(&self) -> u64 {
        self.iter().map(|t| u64::from(t.duration())).sum()
    }

    /// Title of the shortest track; the earliest one wins a tie.
    ///
    /// Returns `None` for an empty list.
    pub fn shortest_track_title(&self) -> Option<&str> {
        self.min_index_from(0)
            .and_then(|i| self.get(i))
            .map(Track::title)
    }

    /// Place `track` after the last occupied slot.
    pub fn append(&mut self, track: Track) -> Result<(), PlaylistError> {
        self.ensure_room(1)?;
        self.slots[self.len] = Some(track);
        self.len += 1;
        Ok(())
    }

    /// Insert `track` at `index`, shifting the tracks from `index` onwards one
    /// slot to the right. `index == len()` appends.
    pub fn insert_at(&mut self, index: usize, track: Track) -> Result<(), PlaylistError> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }
        self.ensure_room(1)?;

        // Slot `len` is free; rotating it down to `index` moves the tail up by one.
        self.slots[self.len] = Some(track);
        self.slots[index..=self.len].rotate_right(1);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the track at `index`, closing the gap it leaves.
    pub fn remove_at(&mut self, index: usize) -> Result<Track, PlaylistError> {
        let len = self.len;
        let Some(removed) = self.slots[..len].get_mut(index).and_then(Option::take) else {
            return Err(self.out_of_range(index));
        };

        // The emptied slot travels to the end of the occupied range.
        self.slots[index..len].rotate_left(1);
        self.len -= 1;
        Ok(removed)
    }

    /// Remove the first track whose title equals `title` exactly (case-sensitive).
    pub fn remove_by_title(&mut self, title: &str) -> Result<Track, PlaylistError> {
        match self.iter().position(|t| t.title() == title) {
            Some(index) => self.remove_at(index),
            None => {
                debug!("playlist: no track titled {title:?} to remove");
                Err(PlaylistError::NotFound(title.to_string()))
            }
        }
    }

    pub fn remove_first(&mut self) -> Option<Track> {
        if self.is_empty() {
            return None;
        }
        self.remove_at(0).ok()
    }

    pub fn remove_last(&mut self) -> Option<Track> {
        let last = self.len.checked_sub(1)?;
        self.remove_at(last).ok()
    }

    /// Append every track of `other`, in order, or nothing at all.
    ///
    /// Fails without touching either list when the combined length would
    /// exceed this list's capacity.
    pub fn append_all(&mut self, other: &BoundedTrackList) -> Result<(), PlaylistError> {
        self.ensure_room(other.len())?;
        for track in other {
            self.slots[self.len] = Some(track.clone());
            self.len += 1;
        }
        Ok(())
    }

    /// Sort in place by non-decreasing duration.
    ///
    /// Selection sort: each pass picks the earliest minimum of the unsorted
    /// suffix and rotates it down to the sorted boundary. Rotating rather than
    /// swapping keeps tracks of equal duration in their original order.
    pub fn sort_by_duration(&mut self) {
        for boundary in 0..self.len.saturating_sub(1) {
            if let Some(min) = self.min_index_from(boundary) {
                self.slots[boundary..=min].rotate_right(1);
            }
        }
    }

    /// One `title,artist,duration` line per track, each ending in `\n`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn occupied(&self) -> &[Option<Track>] {
        &self.slots[..self.len]
    }

    /// Index of the shortest track at or after `start`.
    fn min_index_from(&self, start: usize) -> Option<usize> {
        self.iter()
            .enumerate()
            .skip(start)
            .min_by_key(|(_, t)| t.duration())
            .map(|(i, _)| i)
    }

    fn ensure_room(&self, requested: usize) -> Result<(), PlaylistError> {
        if requested <= self.remaining() {
            return Ok(());
        }
        debug!(
            "playlist: rejecting {requested} track(s), {} of {} slots used",
            self.len,
            self.capacity()
        );
        Err(PlaylistError::CapacityExceeded {
            capacity: self.capacity(),
            len: self.len,
            requested,
        })
    }

    fn out_of_range(&self, index: usize) -> PlaylistError {
        debug!("playlist: index {index} out of range (len {})", self.len);
        PlaylistError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }
}

/// Iterator over the occupied tracks of a `BoundedTrackList`.
pub struct Iter<'a> {
    inner: slice::Iter<'a, Option<Track>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Track;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a> IntoIterator for &'a BoundedTrackList {
    type Item = &'a Track;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
