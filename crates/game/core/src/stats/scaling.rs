use crate::catalog::BaseStats;
use crate::config::DuelConfig;

/// Scale a level-1 stat to `level`.
///
/// Each level above 1 divides the running value by
/// [`DuelConfig::LEVEL_SCALE_DIVISOR`] and truncates, so rounding compounds
/// step by step. Levels 0 and 1 return `base` unchanged.
pub fn scale_stat(base: u32, level: u8) -> u32 {
    let mut value = base;
    for _ in 1..level {
        value = (f64::from(value) / DuelConfig::LEVEL_SCALE_DIVISOR) as u32;
    }
    value
}

/// Level-adjusted stats snapshotted into a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaledStats {
    pub level: u8,
    pub max_hp: u32,
    pub damage_min: u32,
    pub damage_max: u32,
    pub defense: u32,
    pub crit: u32,
}

impl ScaledStats {
    pub fn from_base(base: &BaseStats, level: u8) -> Self {
        Self {
            level,
            max_hp: scale_stat(base.hp, level),
            damage_min: scale_stat(base.damage.min, level),
            damage_max: scale_stat(base.damage.max, level),
            defense: scale_stat(base.defense, level),
            crit: scale_stat(base.crit, level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DamageRange;
    use proptest::prelude::*;

    #[test]
    fn level_one_is_identity() {
        assert_eq!(scale_stat(1200, 1), 1200);
        assert_eq!(scale_stat(1200, 0), 1200);
    }

    #[test]
    fn truncates_every_step() {
        // 100 / 0.9 = 111.1 -> 111, 111 / 0.9 = 123.3 -> 123
        assert_eq!(scale_stat(100, 2), 111);
        assert_eq!(scale_stat(100, 3), 123);
        assert_eq!(scale_stat(0, 10), 0);
    }

    #[test]
    fn snapshot_scales_each_stat() {
        let base = BaseStats {
            hp: 1000,
            damage: DamageRange { min: 50, max: 100 },
            defense: 40,
            crit: 10,
        };
        let stats = ScaledStats::from_base(&base, 2);
        assert_eq!(stats.max_hp, 1111);
        assert_eq!(stats.damage_min, 55);
        assert_eq!(stats.damage_max, 111);
        assert_eq!(stats.defense, 44);
        assert_eq!(stats.crit, 11);
    }

    proptest! {
        #[test]
        fn scaling_never_decreases(base in 0u32..1_000_000, level in 1u8..10) {
            prop_assert!(scale_stat(base, level + 1) >= scale_stat(base, level));
            prop_assert!(scale_stat(base, level) >= base);
        }
    }
}
