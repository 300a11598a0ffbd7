//! Store backends for the Pinhole URL shortener.
//!
//! Two interchangeable implementations of the [`Store`] contract: a
//! non-persistent in-process map for development and testing, and a
//! Redis-backed store with native TTLs and atomic multi-key updates.
//!
//! [`Store`]: pinhole_core::Store

pub mod memory;
pub mod redis;

pub use memory::MemoryStore;
pub use redis::{RedisStore, RedisStoreOptions};
