//! Ranked reward settlement.
//!
//! The engine only computes deltas. Applying them (and flooring trophies at
//! zero) is the progress store's job, atomically per player.

use crate::ids::PlayerId;

// ============================================================================
// Reward Table
// ============================================================================

/// Inclusive range a reward is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardRange {
    pub min: u32,
    pub max: u32,
}

impl RewardRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn roll(&self, rng: &mut dyn RewardRng) -> u32 {
        rng.range(self.min, self.max)
    }
}

/// Reward ranges for a ranked victory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardTable {
    pub winner_trophies: RewardRange,
    pub winner_souls: RewardRange,
    /// Subtracted from the loser.
    pub loser_trophies: RewardRange,
}

impl RewardTable {
    pub const DEFAULT_WINNER_TROPHIES: RewardRange = RewardRange::new(10, 30);
    pub const DEFAULT_WINNER_SOULS: RewardRange = RewardRange::new(50, 150);
    pub const DEFAULT_LOSER_TROPHIES: RewardRange = RewardRange::new(5, 15);

    pub fn new() -> Self {
        Self {
            winner_trophies: Self::DEFAULT_WINNER_TROPHIES,
            winner_souls: Self::DEFAULT_WINNER_SOULS,
            loser_trophies: Self::DEFAULT_LOSER_TROPHIES,
        }
    }

    /// Draw the rewards for one ranked result.
    ///
    /// Rolls happen in a fixed order (winner trophies, loser trophies,
    /// winner souls) so a seeded generator replays identically.
    pub fn settle(&self, winner: PlayerId, loser: PlayerId, rng: &mut dyn RewardRng) -> Settlement {
        let trophy_gain = self.winner_trophies.roll(rng);
        let trophy_loss = self.loser_trophies.roll(rng);
        let souls = self.winner_souls.roll(rng);

        Settlement {
            winner: RewardDelta {
                player: winner,
                trophies: i64::from(trophy_gain),
                souls: i64::from(souls),
            },
            loser: RewardDelta {
                player: loser,
                trophies: -i64::from(trophy_loss),
                souls: 0,
            },
        }
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Change to one player's totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardDelta {
    pub player: PlayerId,
    pub trophies: i64,
    pub souls: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settlement {
    pub winner: RewardDelta,
    pub loser: RewardDelta,
}

// ============================================================================
// Randomness
// ============================================================================

/// Source of reward rolls.
pub trait RewardRng: Send {
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[min, max]`. Returns `min` for an empty range.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32()) % span) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Fixed(Vec<u32>);

    impl RewardRng for Fixed {
        fn next_u32(&mut self) -> u32 {
            self.0.remove(0)
        }
    }

    #[test]
    fn settlement_signs_and_roll_order() {
        let table = RewardTable::default();
        // spans: 21, 11, 101
        let mut rng = Fixed(vec![0, 10, 100]);
        let s = table.settle(PlayerId::new(1), PlayerId::new(2), &mut rng);
        assert_eq!(s.winner.trophies, 10);
        assert_eq!(s.loser.trophies, -15);
        assert_eq!(s.winner.souls, 150);
        assert_eq!(s.loser.souls, 0);
    }

    #[test]
    fn empty_range_returns_its_minimum() {
        let mut rng = Fixed(vec![]);
        assert_eq!(RewardRange::new(7, 7).roll(&mut rng), 7);
        assert_eq!(RewardRange::new(9, 3).roll(&mut rng), 9);
    }

    proptest! {
        #[test]
        fn rolls_stay_in_range(draws in prop::array::uniform3(any::<u32>())) {
            let table = RewardTable::default();
            let s = table.settle(PlayerId::new(1), PlayerId::new(2), &mut Fixed(draws.to_vec()));
            prop_assert!((10..=30).contains(&s.winner.trophies));
            prop_assert!((50..=150).contains(&s.winner.souls));
            prop_assert!((-15..=-5).contains(&s.loser.trophies));
        }
    }
}
