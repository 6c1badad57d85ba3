use std::collections::BTreeMap;

use super::SessionError;
use crate::catalog::{Ability, Character};
use crate::combat::Buffs;
use crate::ids::PlayerId;
use crate::loadout::Loadout;
use crate::stats::{EnergyMeter, ScaledStats};

/// What a player brings into a duel: read from progress at activation time.
#[derive(Clone, Copy, Debug)]
pub struct FighterSetup<'a> {
    pub character: &'a Character,
    pub level: u8,
    pub loadout: &'a Loadout,
}

impl<'a> FighterSetup<'a> {
    pub fn new(character: &'a Character, level: u8, loadout: &'a Loadout) -> Self {
        Self {
            character,
            level,
            loadout,
        }
    }
}

/// One side of an active duel.
///
/// Stats and abilities are copied in at activation, so upgrades and loadout
/// edits made mid-duel do not leak into it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub player: PlayerId,
    pub character_id: String,
    pub character_name: String,
    pub stats: ScaledStats,
    /// Goes negative on overkill.
    pub hp: i64,
    pub energy: EnergyMeter,
    pub buffs: Buffs,
    /// Equipped abilities keyed by slot.
    pub abilities: BTreeMap<u8, Ability>,
    /// HP change caused by the most recent action (display only).
    pub last_hp_delta: i64,
    /// Restore minus cost of the most recent action, before the energy cap
    /// (display only).
    pub last_energy_delta: i32,
}

impl Fighter {
    pub fn prepare(player: PlayerId, setup: FighterSetup<'_>) -> Result<Self, SessionError> {
        let mut abilities = BTreeMap::new();
        for (slot, index) in setup.loadout.iter() {
            let ability = setup
                .character
                .ability(index)
                .ok_or(SessionError::InvalidLoadout {
                    player,
                    slot,
                    index,
                })?;
            abilities.insert(slot, ability.clone());
        }

        let stats = setup.character.stats_at(setup.level);
        Ok(Self {
            player,
            character_id: setup.character.id.clone(),
            character_name: setup.character.name.clone(),
            stats,
            hp: i64::from(stats.max_hp),
            energy: EnergyMeter::full(),
            buffs: Buffs::default(),
            abilities,
            last_hp_delta: 0,
            last_energy_delta: 0,
        })
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    pub(crate) fn clear_deltas(&mut self) {
        self.last_hp_delta = 0;
        self.last_energy_delta = 0;
    }
}
