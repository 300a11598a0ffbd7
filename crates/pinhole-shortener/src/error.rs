use pinhole_core::StoreError;
use thiserror::Error;

/// Result type for shortener operations.
pub type Result<T> = std::result::Result<T, ShortenError>;

/// Errors surfaced by the [`Shortener`] service.
///
/// [`Shortener`]: crate::service::Shortener
#[derive(Debug, Clone, Error)]
pub enum ShortenError {
    /// The submitted link is not a well-formed absolute URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// The id does not resolve to a stored link.
    #[error("link does not exist")]
    NotFound,
    /// Every generation attempt collided with an existing id.
    /// Operators seeing this under load should raise the retry budget
    /// or widen the id space.
    #[error("max retries exceeded after {attempts} attempts")]
    MaxRetriesExceeded { attempts: u32 },
    /// The store backend failed; the request cannot proceed.
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for ShortenError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound => Self::NotFound,
            // Collisions are consumed by the retry loop; one escaping
            // the store outside of it means the backend misbehaved.
            StoreError::AlreadyExists => Self::Unavailable("unexpected id conflict".to_string()),
            StoreError::Unavailable(message) => Self::Unavailable(message),
        }
    }
}
