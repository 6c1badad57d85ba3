//! Content loading, engine wiring and bot enrollment.
use std::env;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use duel_content::{CharacterLoader, ConfigLoader, ContentFactory, RulesConfig};
use duel_core::{AbilityEffect, Character, DuelConfig, PlayerId};
use duel_runtime::{CharacterOracleImpl, DuelEngine, EngineConfig, InMemoryProgressRepo};
use tracing::{debug, info};

pub struct Content {
    pub characters: Vec<Character>,
    pub rules: RulesConfig,
}

pub fn load_content(data_dir: Option<&Path>) -> Result<Content> {
    match data_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            info!("Loading content from {}", factory.data_dir().display());
            Ok(Content {
                characters: factory.load_characters()?,
                rules: factory.load_rules()?,
            })
        }
        None => Ok(Content {
            characters: CharacterLoader::bundled()?,
            rules: ConfigLoader::bundled()?,
        }),
    }
}

pub struct Table {
    pub engine: DuelEngine,
    pub repo: Arc<InMemoryProgressRepo>,
}

pub fn build_engine(content: Content) -> Result<Table> {
    let config = EngineConfig::from_rules(content.rules).with_overrides(|key| env::var(key).ok());
    let repo = Arc::new(InMemoryProgressRepo::new());
    let engine = DuelEngine::builder()
        .config(config)
        .oracle(Arc::new(CharacterOracleImpl::from_characters(
            content.characters,
        )))
        .repository(repo.clone())
        .build()?;
    Ok(Table { engine, repo })
}

/// Pick the two characters the bots will play.
pub fn choose_characters(engine: &DuelEngine, requested: &[String]) -> Result<[String; 2]> {
    let eligible: Vec<String> = engine
        .oracle()
        .character_ids()
        .into_iter()
        .filter(|id| {
            engine
                .oracle()
                .character(id)
                .is_some_and(|c| c.abilities.iter().any(|a| a.is_free()))
        })
        .collect();

    let first = requested
        .first()
        .or_else(|| eligible.first())
        .ok_or_else(|| anyhow!("catalog has no character with a zero-cost ability"))?;
    let second = requested
        .get(1)
        .or_else(|| eligible.iter().find(|id| *id != first))
        .unwrap_or(first);
    Ok([first.clone(), second.clone()])
}

/// Give `player` the character and equip a loadout within the weight budget.
///
/// The lightest zero-cost ability goes in first, then abilities by damage,
/// skipping anything that would break the budget.
pub fn enroll(table: &Table, player: PlayerId, character_id: &str) -> Result<()> {
    let character = table
        .engine
        .oracle()
        .character(character_id)
        .ok_or_else(|| anyhow!("unknown character '{character_id}'"))?
        .clone();
    table.repo.grant_character(player, character_id, 1)?;
    table.engine.select_character(player, character_id)?;

    let mut order: Vec<usize> = (0..character.abilities.len()).collect();
    order.sort_by_key(|&i| {
        let ability = &character.abilities[i];
        let free_first = if ability.is_free() { 0 } else { 1 };
        (free_first, std::cmp::Reverse(priority(&ability.effect)), ability.weight)
    });

    let mut slot = 1;
    for index in order {
        if slot > DuelConfig::MAX_SLOTS {
            break;
        }
        match table.engine.assign_slot(player, character_id, slot, index) {
            Ok(assignment) => {
                debug!(%player, slot, index, weight = assignment.outcome.total_weight, "slot filled");
                slot += 1;
            }
            Err(err) => debug!(%player, index, %err, "ability skipped"),
        }
    }
    Ok(())
}

/// Rough usefulness used to order abilities when filling slots.
pub fn priority(effect: &AbilityEffect) -> u32 {
    match *effect {
        AbilityEffect::Damage { amount } => amount,
        AbilityEffect::Heal { amount } => amount / 2,
        AbilityEffect::DefenseModifier { percent } => percent.unsigned_abs(),
        AbilityEffect::AttackModifier { percent } => percent.unsigned_abs(),
    }
}
