//! Character definitions and rarity tiers.

use super::Ability;
use crate::stats::ScaledStats;

/// Rarity tier of a character. Fixes the highest level it can be upgraded to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Rarity {
    Human,
    Planet,
    Universe,
    Multiverse,
}

impl Rarity {
    pub const fn max_level(self) -> u8 {
        match self {
            Self::Human => 3,
            Self::Planet => 5,
            Self::Universe => 7,
            Self::Multiverse => 10,
        }
    }
}

/// Inclusive damage range of a character's basic attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

/// Level-1 stats as listed in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub damage: DamageRange,
    pub defense: u32,
    pub crit: u32,
}

/// Immutable catalog entry for a playable character.
///
/// Abilities are addressed by their position in `abilities`; a loadout
/// stores these indices, so reordering the list invalidates saved loadouts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    pub rarity: Rarity,
    pub base: BaseStats,
    pub abilities: Vec<Ability>,
}

impl Character {
    pub fn ability(&self, index: usize) -> Option<&Ability> {
        self.abilities.get(index)
    }

    pub fn max_level(&self) -> u8 {
        self.rarity.max_level()
    }

    /// Stats after applying per-level scaling.
    pub fn stats_at(&self, level: u8) -> ScaledStats {
        ScaledStats::from_base(&self.base, level)
    }
}
