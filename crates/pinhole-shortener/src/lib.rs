//! URL shortener service for Pinhole.
//!
//! This crate owns input validation, identifier generation, and the
//! insert-collision retry loop. Storage backends and shared types live
//! in `pinhole_core` / `pinhole_storage`.

pub mod error;
pub mod generator;
pub mod service;

pub use error::ShortenError;
pub use generator::{random::RandomGenerator, IdGenerator};
pub use service::{validate, Shortener, ShortenerOptions};
