//! Entropy sources for pool shuffling and sampling.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropySource {
    /// Thread-local CSPRNG, reseeded from the OS.
    Thread,
    /// Every draw goes straight to the OS entropy source.
    Os,
    /// Deterministic generator for reproducible output.
    Seeded(u64),
}

impl EntropySource {
    pub fn into_rng(self) -> Box<dyn RngCore> {
        match self {
            EntropySource::Thread => Box::new(rand::thread_rng()),
            EntropySource::Os => Box::new(OsRng),
            EntropySource::Seeded(seed) => Box::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EntropySource::Thread => "thread rng",
            EntropySource::Os => "os entropy",
            EntropySource::Seeded(_) => "seeded",
        }
    }
}
