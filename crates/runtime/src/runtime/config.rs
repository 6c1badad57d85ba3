//! Engine configuration.

use std::env;

use duel_content::RulesConfig;
use duel_core::{DuelConfig, RewardTable};

/// Configuration shared by every engine service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub duel: DuelConfig,
    pub rewards: RewardTable,
    /// Capacity of each event topic.
    pub event_buffer_size: usize,
    /// Seed for reward rolls. `None` draws from OS entropy.
    pub reward_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            duel: DuelConfig::default(),
            rewards: RewardTable::default(),
            event_buffer_size: 100,
            reward_seed: None,
        }
    }
}

impl EngineConfig {
    pub const ENV_SCALE_RANKED_DAMAGE: &'static str = "DUEL_SCALE_RANKED_DAMAGE";
    pub const ENV_SCALE_FRIENDLY_DAMAGE: &'static str = "DUEL_SCALE_FRIENDLY_DAMAGE";
    pub const ENV_EVENT_BUFFER: &'static str = "DUEL_EVENT_BUFFER";
    pub const ENV_REWARD_SEED: &'static str = "DUEL_REWARD_SEED";

    /// Defaults overridden by `DUEL_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Rules loaded from `engine.toml`, everything else at defaults.
    pub fn from_rules(rules: RulesConfig) -> Self {
        Self {
            duel: rules.duel,
            rewards: rules.rewards,
            ..Self::default()
        }
    }

    /// Apply overrides from `lookup`. Unset or unparsable keys keep their
    /// current value.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(scale) = read_bool(&lookup, Self::ENV_SCALE_RANKED_DAMAGE) {
            self.duel.scale_ranked_damage = scale;
        }
        if let Some(scale) = read_bool(&lookup, Self::ENV_SCALE_FRIENDLY_DAMAGE) {
            self.duel.scale_friendly_damage = scale;
        }
        if let Some(size) = read_value(&lookup, Self::ENV_EVENT_BUFFER) {
            self.event_buffer_size = size;
        }
        if let Some(seed) = read_value(&lookup, Self::ENV_REWARD_SEED) {
            self.reward_seed = Some(seed);
        }
        self
    }

    pub fn with_reward_seed(mut self, seed: u64) -> Self {
        self.reward_seed = Some(seed);
        self
    }
}

fn read_value<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn read_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    match lookup(key)?.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
