/// Duel configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DuelConfig {
    /// Apply per-level scaling to ability damage in ranked duels.
    pub scale_ranked_damage: bool,

    /// Apply per-level scaling to ability damage in friendly duels.
    ///
    /// Off by default: friendly duels have always used raw ability values.
    pub scale_friendly_damage: bool,
}

impl DuelConfig {
    // ===== compile-time constants =====
    /// Energy cap and starting energy for both sides.
    pub const MAX_ENERGY: u8 = 10;
    /// Maximum summed ability weight per character loadout.
    pub const WEIGHT_BUDGET: u32 = 10;
    /// Highest loadout slot number (slots are 1-based).
    pub const MAX_SLOTS: u8 = 12;
    /// Every level above 1 divides stats by this factor.
    pub const LEVEL_SCALE_DIVISOR: f64 = 0.9;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SCALE_RANKED_DAMAGE: bool = true;
    pub const DEFAULT_SCALE_FRIENDLY_DAMAGE: bool = false;

    pub fn new() -> Self {
        Self {
            scale_ranked_damage: Self::DEFAULT_SCALE_RANKED_DAMAGE,
            scale_friendly_damage: Self::DEFAULT_SCALE_FRIENDLY_DAMAGE,
        }
    }

    /// Uses the same damage scaling for both duel kinds.
    pub fn with_uniform_scaling(scale: bool) -> Self {
        Self {
            scale_ranked_damage: scale,
            scale_friendly_damage: scale,
        }
    }

    /// Whether ability damage is level-scaled for the given duel kind.
    pub fn scales_damage(&self, kind: crate::duel::DuelKind) -> bool {
        match kind {
            crate::duel::DuelKind::Ranked => self.scale_ranked_damage,
            crate::duel::DuelKind::Friendly => self.scale_friendly_damage,
        }
    }
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self::new()
    }
}
