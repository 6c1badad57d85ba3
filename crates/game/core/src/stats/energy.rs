use crate::config::DuelConfig;

/// Per-side energy pool, always within `0..=MAX_ENERGY`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyMeter {
    current: u8,
}

impl EnergyMeter {
    pub const fn full() -> Self {
        Self {
            current: DuelConfig::MAX_ENERGY,
        }
    }

    pub const fn current(&self) -> u8 {
        self.current
    }

    pub const fn can_afford(&self, cost: u8) -> bool {
        self.current >= cost
    }

    /// Pay `cost`, then regain `restore` up to the cap.
    ///
    /// Returns the recorded delta `restore - cost`, which ignores the cap: a
    /// restoring ability used at full energy still reports its restore.
    /// Callers check [`Self::can_afford`] first; an unaffordable cost floors
    /// at zero instead of wrapping.
    pub fn spend_then_restore(&mut self, cost: u8, restore: u8) -> i32 {
        self.current = self
            .current
            .saturating_sub(cost)
            .saturating_add(restore)
            .min(DuelConfig::MAX_ENERGY);
        i32::from(restore) - i32::from(cost)
    }
}

impl Default for EnergyMeter {
    fn default() -> Self {
        Self::full()
    }
}
