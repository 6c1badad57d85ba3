//! Buff accumulators.

/// Additive percent accumulators of one duel side.
///
/// Modifiers stack without a game-rule cap and never decay during a duel.
/// The only bound is `i32` saturation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buffs {
    pub attack_percent: i32,
    pub defense_percent: i32,
}

impl Buffs {
    pub fn add_attack(&mut self, percent: i32) {
        self.attack_percent = self.attack_percent.saturating_add(percent);
    }

    pub fn add_defense(&mut self, percent: i32) {
        self.defense_percent = self.defense_percent.saturating_add(percent);
    }
}
