use thiserror::Error;

/// Reasons a playlist mutation was rejected.
///
/// A rejected call never changes the list, so callers can simply carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    /// Adding `requested` tracks would push the list past its capacity.
    #[error("playlist is limited to {capacity} tracks ({len} present, {requested} requested)")]
    CapacityExceeded {
        capacity: usize,
        len: usize,
        requested: usize,
    },
    /// The index does not address an occupied slot (or, for inserts, the end).
    #[error("index {index} is out of range for a playlist of {len} tracks")]
    IndexOutOfRange { index: usize, len: usize },
    /// No track carries the given title.
    #[error("no track titled {0:?}")]
    NotFound(String),
}
