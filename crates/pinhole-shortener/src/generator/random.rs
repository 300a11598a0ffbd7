use crate::generator::IdGenerator;
use parking_lot::Mutex;
use pinhole_core::LinkId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates ids by base58-encoding uniformly random 64-bit values.
///
/// Candidates are independent across calls, so the per-attempt
/// collision probability is just the birthday bound over the 64-bit id
/// space. The RNG sits behind a mutex; the service shares one
/// generator across request workers.
#[derive(Debug)]
pub struct RandomGenerator {
    rng: Mutex<StdRng>,
}

impl RandomGenerator {
    /// Creates a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a deterministic generator for tests and reproduction.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomGenerator {
    fn generate(&self) -> LinkId {
        LinkId::from_u64(self.rng.lock().random())
    }
}
