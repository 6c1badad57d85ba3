//! Character oracle implementing [`duel_core::CharacterOracle`].

use std::collections::BTreeMap;

use duel_core::{Character, CharacterOracle};

/// Oracle providing character definitions.
pub struct CharacterOracleImpl {
    characters: BTreeMap<String, Character>,
}

impl CharacterOracleImpl {
    /// Create an empty oracle.
    pub fn new() -> Self {
        Self {
            characters: BTreeMap::new(),
        }
    }

    /// Build from loaded content. Later duplicates replace earlier ones.
    pub fn from_characters(characters: impl IntoIterator<Item = Character>) -> Self {
        let mut oracle = Self::new();
        for character in characters {
            oracle.add(character);
        }
        oracle
    }

    pub fn add(&mut self, character: Character) {
        self.characters.insert(character.id.clone(), character);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.characters.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl Default for CharacterOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterOracle for CharacterOracleImpl {
    fn character(&self, id: &str) -> Option<&Character> {
        self.characters.get(id)
    }

    fn character_ids(&self) -> Vec<String> {
        self.characters.keys().cloned().collect()
    }
}
