use crate::error::{Result, ShortenError};
use crate::generator::IdGenerator;
use pinhole_core::{Host, LinkId, Record, Store, StoreError};
use std::sync::Arc;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;
use url::Url;

/// Options for the [`Shortener`] service.
#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortenerOptions {
    /// How many extra generation attempts a shorten call may spend
    /// after the first one collides.
    #[builder(default = 5)]
    pub max_retries: u32,
}

impl Default for ShortenerOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Returns whether `link` is a well-formed absolute URL with an
/// authority. Usable as a guard before constructing a shorten request;
/// [`Shortener::shorten`] applies the same check internally.
pub fn validate(link: &str) -> bool {
    match Url::parse(link) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

/// Stateless service wrapping a [`Store`]: validates input, generates
/// candidate ids, and retries inserts on collision.
///
/// Shared across request workers; all state lives in the store and the
/// generator.
#[derive(Debug)]
pub struct Shortener<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
    options: ShortenerOptions,
}

// Not derived: clones share the store and generator, so `S` and `G`
// themselves need not be `Clone`.
impl<S, G> Clone for Shortener<S, G> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            generator: Arc::clone(&self.generator),
            options: self.options.clone(),
        }
    }
}

impl<S: Store, G: IdGenerator> Shortener<S, G> {
    /// Creates a new shortener over a store and an id generator.
    pub fn new(store: S, generator: G, options: ShortenerOptions) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
            options,
        }
    }

    /// Stores `link` under a freshly generated id and returns the
    /// resulting record.
    ///
    /// Colliding ids are retried with a fresh candidate up to
    /// `max_retries` extra attempts; two callers racing on the same id
    /// are resolved by the store's atomic insert-if-absent, never by a
    /// cross-request lock.
    pub async fn shorten(&self, host: &Host, link: &str) -> Result<Record> {
        if !validate(link) {
            return Err(ShortenError::InvalidUrl(link.to_string()));
        }

        let attempts = self.options.max_retries + 1;

        for attempt in 1..=attempts {
            let id = self.generator.generate();
            trace!(id = %id, attempt, "attempting insert");

            match self.store.add_link(&id, link).await {
                Ok(()) => {
                    debug!(id = %id, attempt, "link shortened");
                    return Ok(Record {
                        shortened_url: host.link_url(&id),
                        id,
                        visits: 0,
                        expanded_url: link.to_string(),
                    });
                }
                Err(StoreError::AlreadyExists) => {
                    debug!(id = %id, attempt, "id collision, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ShortenError::MaxRetriesExceeded { attempts })
    }

    /// Resolves `id` to its record, counting the visit. The returned
    /// visit count is post-increment.
    pub async fn expand(&self, host: &Host, id: &LinkId) -> Result<Record> {
        let entry = self.store.expand_link(id).await?;

        Ok(Record {
            shortened_url: host.link_url(id),
            id: id.clone(),
            visits: entry.visits,
            expanded_url: entry.url,
        })
    }

    /// Returns the wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
