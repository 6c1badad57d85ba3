//! Content loaders for reading duel data from files.
//!
//! Loaders turn RON/TOML text into duel-core types and reject content the
//! engine could not run safely (duplicate ids, out-of-range costs).

pub mod characters;
pub mod config;
pub mod factory;

pub use characters::CharacterLoader;
pub use config::{ConfigLoader, RulesConfig};
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
