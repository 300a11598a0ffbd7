//! Core types and traits for the Pinhole URL shortener.
//!
//! This crate provides the shared vocabulary used by the storage
//! backends and the shortener service: link identifiers, the
//! caller-facing record, the store contract, and its error taxonomy.

pub mod error;
pub mod id;
pub mod record;
pub mod store;

pub use error::{Result, StoreError};
pub use id::LinkId;
pub use record::{Host, Record};
pub use store::{Entry, Store};
