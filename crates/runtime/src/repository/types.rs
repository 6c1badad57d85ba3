//! Stored progress records.

use std::collections::BTreeMap;

use duel_core::Loadout;
use serde::{Deserialize, Serialize};

/// A character in a player's collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedCharacter {
    pub level: u8,
    #[serde(default)]
    pub loadout: Loadout,
}

impl OwnedCharacter {
    pub fn new(level: u8) -> Self {
        Self {
            level,
            loadout: Loadout::new(),
        }
    }
}

/// Everything the engine reads or writes about one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProgress {
    pub souls: u64,
    pub trophy_souls: u64,
    pub trophies: u64,
    pub active_character: Option<String>,
    pub characters: BTreeMap<String, OwnedCharacter>,
}

impl PlayerProgress {
    pub fn owns(&self, character: &str) -> bool {
        self.characters.contains_key(character)
    }

    /// Add a signed delta to a balance, flooring at zero.
    pub(crate) fn apply_delta(balance: u64, delta: i64) -> u64 {
        if delta >= 0 {
            balance.saturating_add(delta.unsigned_abs())
        } else {
            balance.saturating_sub(delta.unsigned_abs())
        }
    }
}
