use crate::error::Result;
use crate::id::LinkId;
use async_trait::async_trait;

/// The stored value pair associated with one id, as returned by
/// [`Store::expand_link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The original URL.
    pub url: String,
    /// The visit count after the expansion that produced this entry.
    pub visits: u64,
}

/// A key-value holder of id → (url, visit count) pairs, polymorphic
/// over backend.
///
/// Both halves of an entry are created together and deleted together:
/// no backend may expose an id whose url exists without its counter or
/// vice versa. Backends with native expiration share one logical TTL
/// across the pair and refresh it on every successful
/// [`expand_link`](Store::expand_link) (sliding expiration).
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Inserts a new entry only if `id` is absent, with the visit
    /// count initialized to zero.
    ///
    /// Returns [`StoreError::AlreadyExists`] if the id is taken; the
    /// caller's retry loop treats that as a collision, not a failure.
    ///
    /// [`StoreError::AlreadyExists`]: crate::error::StoreError::AlreadyExists
    async fn add_link(&self, id: &LinkId, url: &str) -> Result<()>;

    /// Atomically increments the visit counter and returns it,
    /// post-increment, together with the stored url.
    ///
    /// The increment and the read are observed together; concurrent
    /// expansions of the same id never see a torn update or lose a
    /// count. Fails with [`StoreError::NotFound`] if the id is absent
    /// or expired.
    ///
    /// [`StoreError::NotFound`]: crate::error::StoreError::NotFound
    async fn expand_link(&self, id: &LinkId) -> Result<Entry>;

    /// Removes both halves of the entry. Deleting an absent id is not
    /// an error.
    async fn delete_link(&self, id: &LinkId) -> Result<()>;

    /// Liveness check of the backend, independent of any key.
    async fn ping(&self) -> Result<()>;

    /// Releases backend resources. Safe to call once at shutdown.
    async fn close(&self) -> Result<()>;
}
