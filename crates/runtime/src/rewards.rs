//! Reward randomness backed by `rand`.

use duel_core::RewardRng;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// [`RewardRng`] over `rand`'s standard generator.
#[derive(Debug, Clone)]
pub struct StdRewardRng {
    inner: StdRng,
}

impl StdRewardRng {
    /// Deterministic generator for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }
}

impl RewardRng for StdRewardRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.inner.gen_range(min..=max)
    }
}
