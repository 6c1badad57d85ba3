//! Duel rules loader.

use std::path::Path;

use duel_core::{DuelConfig, RewardRange, RewardTable};

use crate::loaders::{LoadResult, read_file};

/// Tunable rules read from `engine.toml`. Missing sections fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RulesConfig {
    pub duel: DuelConfig,
    pub rewards: RewardTable,
}

/// Loader for duel rules from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load rules from a TOML file.
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        let rules: RulesConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;

        check_range("winner_trophies", rules.rewards.winner_trophies)?;
        check_range("winner_souls", rules.rewards.winner_souls)?;
        check_range("loser_trophies", rules.rewards.loser_trophies)?;
        Ok(rules)
    }

    /// The rules compiled into this crate.
    pub fn bundled() -> LoadResult<RulesConfig> {
        Self::parse(crate::BUNDLED_RULES)
    }
}

fn check_range(name: &str, range: RewardRange) -> LoadResult<()> {
    if range.min > range.max {
        anyhow::bail!("rewards.{name}: min {} exceeds max {}", range.min, range.max);
    }
    Ok(())
}
