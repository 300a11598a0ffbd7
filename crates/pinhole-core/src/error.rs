use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Normalized error taxonomy surfaced by every [`Store`] backend.
///
/// Backend-specific failures (connection drops, timeouts, protocol
/// errors) are folded into [`StoreError::Unavailable`] before they
/// leave the storage layer, so callers never match on backend details.
///
/// [`Store`]: crate::store::Store
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The id is absent or its entry has expired.
    #[error("link not found")]
    NotFound,
    /// Insert-if-absent found the id already taken. This is the
    /// collision signal consumed by the shortener's retry loop, not a
    /// terminal failure.
    #[error("link already exists")]
    AlreadyExists,
    /// The backend could not serve the request (I/O, connectivity,
    /// caller-imposed deadline).
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
}
