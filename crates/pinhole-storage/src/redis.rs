use async_trait::async_trait;
use pinhole_core::{Entry, LinkId, Result, Store, StoreError};
use std::time::Duration;
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

const DEFAULT_EXPIRATION: Duration = Duration::from_secs(24 * 60 * 60);

/// Options for connecting a [`RedisStore`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct RedisStoreOptions {
    /// Connection URL, e.g. `redis://localhost:6379/0`.
    #[builder(setter(into))]
    pub url: String,
    /// Logical TTL shared by both halves of an entry. Refreshed on
    /// every successful expansion (sliding expiration).
    #[builder(default = DEFAULT_EXPIRATION)]
    pub expiration: Duration,
    /// Namespace prepended to every key.
    #[builder(default = String::from("ph:link:"), setter(into))]
    pub key_prefix: String,
}

/// Redis-backed implementation of the [`Store`] trait.
///
/// Each entry occupies two keys, `<prefix><id>` for the url and
/// `<prefix><id>:visits` for the counter, written and removed in one
/// `MULTI`/`EXEC` transaction so neither half is ever visible without
/// the other. Expiration is enforced natively by Redis; no sweep runs
/// in-process.
#[derive(Debug, Clone)]
pub struct RedisStore {
    conn: redis::aio::MultiplexedConnection,
    options: RedisStoreOptions,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StoreError {
    StoreError::Unavailable(format!("{operation}: {err}"))
}

/// Key holding the url half of an entry.
fn link_key(prefix: &str, id: &LinkId) -> String {
    format!("{}{}", prefix, id.as_str())
}

/// Key holding the visit counter half of an entry.
fn visit_key(prefix: &str, id: &LinkId) -> String {
    format!("{}{}:visits", prefix, id.as_str())
}

impl RedisStore {
    /// Opens a new connection described by the options.
    pub async fn connect(options: RedisStoreOptions) -> Result<Self> {
        let client = redis::Client::open(options.url.as_str())
            .map_err(|e| map_redis_error("invalid redis url", e))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| map_redis_error("failed to connect to redis", e))?;

        Ok(Self::new(conn, options))
    }

    /// Wraps an existing multiplexed connection.
    pub fn new(conn: redis::aio::MultiplexedConnection, options: RedisStoreOptions) -> Self {
        Self { conn, options }
    }

    fn link_key(&self, id: &LinkId) -> String {
        link_key(&self.options.key_prefix, id)
    }

    fn visit_key(&self, id: &LinkId) -> String {
        visit_key(&self.options.key_prefix, id)
    }

    fn ttl_seconds(&self) -> u64 {
        // Redis rejects a zero EX argument; clamp to the minimum TTL.
        self.options.expiration.as_secs().max(1)
    }
}

#[async_trait]
impl Store for RedisStore {
    async fn add_link(&self, id: &LinkId, url: &str) -> Result<()> {
        let ttl = self.ttl_seconds();
        trace!(id = %id, "inserting link into redis");

        let mut conn = self.conn.clone();
        let (url_set, visits_set): (Option<String>, Option<String>) = redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(self.link_key(id))
            .arg(url)
            .arg("NX")
            .arg("EX")
            .arg(ttl)
            .cmd("SET")
            .arg(self.visit_key(id))
            .arg(0)
            .arg("NX")
            .arg("EX")
            .arg(ttl)
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                warn!(id = %id, error = %e, "redis error on add");
                map_redis_error("failed to insert link", e)
            })?;

        // Both SET NX sub-commands commit independently; if either half
        // was already present the whole insert counts as a collision.
        if url_set.is_none() || visits_set.is_none() {
            debug!(id = %id, "id collision on insert");
            return Err(StoreError::AlreadyExists);
        }

        debug!(id = %id, "link inserted");
        Ok(())
    }

    async fn expand_link(&self, id: &LinkId) -> Result<Entry> {
        let ttl = self.ttl_seconds();
        trace!(id = %id, "expanding link from redis");

        let mut conn = self.conn.clone();
        let (url, visits, _): (Option<String>, u64, i64) = redis::pipe()
            .atomic()
            .cmd("GETEX")
            .arg(self.link_key(id))
            .arg("EX")
            .arg(ttl)
            .cmd("INCR")
            .arg(self.visit_key(id))
            .cmd("EXPIRE")
            .arg(self.visit_key(id))
            .arg(ttl)
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                warn!(id = %id, error = %e, "redis error on expand");
                map_redis_error("failed to expand link", e)
            })?;

        // The INCR above still ran when the url key is gone; the stray
        // counter carries a TTL and ages out on its own.
        let Some(url) = url else {
            trace!(id = %id, "link not found");
            return Err(StoreError::NotFound);
        };

        debug!(id = %id, visits, "link expanded");
        Ok(Entry { url, visits })
    }

    async fn delete_link(&self, id: &LinkId) -> Result<()> {
        trace!(id = %id, "deleting link from redis");

        let mut conn = self.conn.clone();
        let _: (i64, i64) = redis::pipe()
            .atomic()
            .cmd("DEL")
            .arg(self.link_key(id))
            .cmd("DEL")
            .arg(self.visit_key(id))
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                warn!(id = %id, error = %e, "redis error on delete");
                map_redis_error("failed to delete link", e)
            })?;

        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| map_redis_error("failed to ping redis", e))?;

        Ok(())
    }

    async fn close(&self) -> Result<()> {
        // The multiplexed connection closes its socket once the last
        // clone is dropped; nothing to tear down eagerly.
        Ok(())
    }
}
