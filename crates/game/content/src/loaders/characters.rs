//! Character catalog loader.

use std::collections::HashSet;
use std::path::Path;

use duel_core::{Character, DuelConfig};

use crate::loaders::{LoadResult, read_file};

/// Highest energy cost an ability may declare.
const MAX_ENERGY_COST: u8 = DuelConfig::MAX_ENERGY;

/// Loader for the character catalog from RON files.
pub struct CharacterLoader;

impl CharacterLoader {
    /// Load and validate a character catalog.
    ///
    /// RON format: `Vec<Character>`
    pub fn load(path: &Path) -> LoadResult<Vec<Character>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    /// Parse and validate catalog text.
    pub fn parse(content: &str) -> LoadResult<Vec<Character>> {
        let characters: Vec<Character> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character catalog RON: {}", e))?;
        Self::validate(&characters)?;
        Ok(characters)
    }

    /// The catalog compiled into this crate.
    pub fn bundled() -> LoadResult<Vec<Character>> {
        Self::parse(crate::BUNDLED_CHARACTERS)
    }

    fn validate(characters: &[Character]) -> LoadResult<()> {
        let mut seen = HashSet::new();
        for character in characters {
            if !seen.insert(character.id.as_str()) {
                anyhow::bail!("duplicate character id '{}'", character.id);
            }
            if character.abilities.is_empty() {
                anyhow::bail!("character '{}' has no abilities", character.id);
            }
            if character.base.damage.min > character.base.damage.max {
                anyhow::bail!(
                    "character '{}' has damage range {}..{}",
                    character.id,
                    character.base.damage.min,
                    character.base.damage.max
                );
            }
            for (index, ability) in character.abilities.iter().enumerate() {
                if !(1..=DuelConfig::WEIGHT_BUDGET).contains(&ability.weight) {
                    anyhow::bail!(
                        "ability #{} '{}' of '{}' has weight {} (expected 1..={})",
                        index,
                        ability.name,
                        character.id,
                        ability.weight,
                        DuelConfig::WEIGHT_BUDGET
                    );
                }
                if ability.energy_cost > MAX_ENERGY_COST {
                    anyhow::bail!(
                        "ability #{} '{}' of '{}' costs {} energy (max {})",
                        index,
                        ability.name,
                        character.id,
                        ability.energy_cost,
                        MAX_ENERGY_COST
                    );
                }
            }
        }
        Ok(())
    }
}
