//! Shuffle strategies for the allocator's room and event orders.
//!
//! The allocator consumes one strategy per run: rooms are shuffled first, then
//! the unplaced events, both from the same stream.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Reorders a slice in place.
pub trait Shuffle {
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Reproducible shuffle driven by a ChaCha8 stream seeded from an integer.
#[derive(Debug, Clone)]
pub struct SeededShuffle {
    rng: ChaCha8Rng,
}

impl SeededShuffle {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Shuffle for SeededShuffle {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Leaves every slice in its given order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unshuffled;

impl Shuffle for Unshuffled {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}
