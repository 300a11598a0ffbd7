pub mod random;

use pinhole_core::LinkId;

/// Trait for generating candidate link identifiers.
///
/// Implementations are pure generators that never touch storage;
/// uniqueness is settled by the store's insert-if-absent, with the
/// shortener retrying on collision. Each call must draw a fresh
/// candidate so retry attempts are independent.
pub trait IdGenerator: Send + Sync + 'static {
    /// Generates the next candidate id.
    fn generate(&self) -> LinkId;
}
