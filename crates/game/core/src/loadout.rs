//! Per-character ability loadouts and the weight budget.

use std::collections::BTreeMap;

use crate::catalog::{Ability, Character};
use crate::config::DuelConfig;
use crate::error::{EngineError, ErrorSeverity};

/// Rejections raised while editing a loadout. Nothing is mutated on error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum LoadoutError {
    #[error("slot {slot} is outside 1..={max}", max = DuelConfig::MAX_SLOTS)]
    SlotOutOfRange { slot: u8 },

    #[error("character {character} has no ability #{index}")]
    AbilityNotFound { character: String, index: usize },

    #[error("weight budget exceeded: {current} + {added} > {budget}")]
    BudgetExceeded { current: u32, added: u32, budget: u32 },
}

impl EngineError for LoadoutError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        self.into()
    }
}

/// Result of a successful [`Loadout::assign`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignOutcome {
    /// Ability index previously held by the slot.
    pub replaced: Option<usize>,
    /// Summed weight after the assignment.
    pub total_weight: u32,
    /// No equipped ability costs zero energy. A warning, not a failure.
    pub missing_zero_cost: bool,
}

/// Slot number (1-based) to ability index within one character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Loadout {
    slots: BTreeMap<u8, usize>,
}

impl Loadout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: u8) -> Option<usize> {
        self.slots.get(&slot).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// `(slot, ability_index)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.slots.iter().map(|(slot, index)| (*slot, *index))
    }

    /// Equipped abilities in slot order. Indices unknown to `character` are skipped.
    pub fn abilities<'a>(
        &'a self,
        character: &'a Character,
    ) -> impl Iterator<Item = (u8, &'a Ability)> + 'a {
        self.iter()
            .filter_map(|(slot, index)| character.ability(index).map(|a| (slot, a)))
    }

    pub fn total_weight(&self, character: &Character) -> u32 {
        self.abilities(character).map(|(_, a)| a.weight).sum()
    }

    pub fn has_zero_cost(&self, character: &Character) -> bool {
        self.abilities(character).any(|(_, a)| a.is_free())
    }

    /// Equip `ability_index` into `slot`, replacing whatever was there.
    ///
    /// The budget check excludes the ability being replaced, so swapping a
    /// heavy ability for a lighter one is always allowed.
    pub fn assign(
        &mut self,
        character: &Character,
        slot: u8,
        ability_index: usize,
    ) -> Result<AssignOutcome, LoadoutError> {
        if !(1..=DuelConfig::MAX_SLOTS).contains(&slot) {
            return Err(LoadoutError::SlotOutOfRange { slot });
        }
        let ability = character
            .ability(ability_index)
            .ok_or_else(|| LoadoutError::AbilityNotFound {
                character: character.id.clone(),
                index: ability_index,
            })?;

        let current: u32 = self
            .abilities(character)
            .filter(|(s, _)| *s != slot)
            .map(|(_, a)| a.weight)
            .sum();
        if current + ability.weight > DuelConfig::WEIGHT_BUDGET {
            return Err(LoadoutError::BudgetExceeded {
                current,
                added: ability.weight,
                budget: DuelConfig::WEIGHT_BUDGET,
            });
        }

        let replaced = self.slots.insert(slot, ability_index);
        Ok(AssignOutcome {
            replaced,
            total_weight: current + ability.weight,
            missing_zero_cost: !self.has_zero_cost(character),
        })
    }
}

impl FromIterator<(u8, usize)> for Loadout {
    fn from_iter<I: IntoIterator<Item = (u8, usize)>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AbilityEffect, BaseStats, DamageRange, Rarity};
    use proptest::prelude::*;

    fn character() -> Character {
        let dmg = |amount| AbilityEffect::Damage { amount };
        Character {
            id: "tester".into(),
            name: "Tester".into(),
            title: String::new(),
            rarity: Rarity::Human,
            base: BaseStats {
                hp: 1000,
                damage: DamageRange { min: 10, max: 20 },
                defense: 10,
                crit: 5,
            },
            abilities: vec![
                Ability::new("jab", 1, 0, dmg(20)),
                Ability::new("hook", 3, 2, dmg(60)),
                Ability::new("uppercut", 5, 4, dmg(120)),
                Ability::new("haymaker", 7, 6, dmg(200)),
            ],
        }
    }

    #[test]
    fn rejects_out_of_range_slots() {
        let c = character();
        let mut loadout = Loadout::new();
        assert_eq!(
            loadout.assign(&c, 0, 0),
            Err(LoadoutError::SlotOutOfRange { slot: 0 })
        );
        assert_eq!(
            loadout.assign(&c, 13, 0),
            Err(LoadoutError::SlotOutOfRange { slot: 13 })
        );
        assert!(loadout.is_empty());
    }

    #[test]
    fn rejects_unknown_ability() {
        let c = character();
        let mut loadout = Loadout::new();
        let err = loadout.assign(&c, 1, 9).unwrap_err();
        assert_eq!(err.error_code(), "ability_not_found");
    }

    #[test]
    fn budget_excludes_replaced_slot() {
        let c = character();
        let mut loadout = Loadout::new();
        loadout.assign(&c, 1, 3).unwrap(); // 7
        loadout.assign(&c, 2, 0).unwrap(); // 8

        assert_eq!(
            loadout.assign(&c, 3, 1),
            Err(LoadoutError::BudgetExceeded {
                current: 8,
                added: 3,
                budget: 10
            })
        );

        // Replacing slot 1 (weight 7) with weight 5 fits.
        let outcome = loadout.assign(&c, 1, 2).unwrap();
        assert_eq!(outcome.replaced, Some(3));
        assert_eq!(outcome.total_weight, 6);
        assert!(!outcome.missing_zero_cost);
    }

    #[test]
    fn warns_when_no_zero_cost_ability() {
        let c = character();
        let mut loadout = Loadout::new();
        let outcome = loadout.assign(&c, 4, 1).unwrap();
        assert!(outcome.missing_zero_cost);
        assert!(!loadout.has_zero_cost(&c));
    }

    proptest! {
        #[test]
        fn weight_never_exceeds_budget(
            ops in prop::collection::vec((0u8..14, 0usize..5), 0..40)
        ) {
            let c = character();
            let mut loadout = Loadout::new();
            for (slot, index) in ops {
                let _ = loadout.assign(&c, slot, index);
                prop_assert!(loadout.total_weight(&c) <= DuelConfig::WEIGHT_BUDGET);
            }
        }
    }
}
