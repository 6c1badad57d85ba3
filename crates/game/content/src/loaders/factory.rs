//! Content factory for loading all duel content from a data directory.

use std::path::{Path, PathBuf};

use duel_core::Character;

use crate::loaders::{CharacterLoader, ConfigLoader, LoadResult, RulesConfig};

/// Content factory that loads all duel content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── engine.toml
/// └── characters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load duel rules from `engine.toml`.
    pub fn load_rules(&self) -> LoadResult<RulesConfig> {
        ConfigLoader::load(&self.data_dir.join("engine.toml"))
    }

    /// Load the character catalog from `characters.ron`.
    pub fn load_characters(&self) -> LoadResult<Vec<Character>> {
        CharacterLoader::load(&self.data_dir.join("characters.ron"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
