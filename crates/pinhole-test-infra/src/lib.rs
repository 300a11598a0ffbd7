//! Test infrastructure for Pinhole integration tests.
//!
//! Spins up throwaway Redis containers so storage tests run against a
//! real backend. Requires a local container runtime.

mod error;
mod redis;

pub use error::Error;
pub use redis::RedisServer;
