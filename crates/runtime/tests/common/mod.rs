#![allow(dead_code)]

use std::sync::Arc;

use duel_core::{Ability, AbilityEffect, BaseStats, Character, DamageRange, PlayerId, Rarity};
use duel_runtime::{
    CharacterOracleImpl, DuelEngine, EngineConfig, InMemoryProgressRepo, ProgressRepository,
};

pub const A: PlayerId = PlayerId::new(1);
pub const B: PlayerId = PlayerId::new(2);
pub const C: PlayerId = PlayerId::new(3);

pub const DUELIST: &str = "duelist";

// Ability indices of the test character.
pub const STRIKE: usize = 0;
pub const REST: usize = 1;
pub const EXPOSE: usize = 2;
pub const FOCUS: usize = 3;
pub const FINISHER: usize = 4;
pub const ANVIL: usize = 5;

// Slots used by `enroll`.
pub const SLOT_STRIKE: u8 = 1;
pub const SLOT_REST: u8 = 2;
pub const SLOT_FINISHER: u8 = 3;

/// 300 HP, 50 defense, universe rarity (max level 7).
pub fn duelist() -> Character {
    Character {
        id: DUELIST.into(),
        name: "Duelist".into(),
        title: "Test Subject".into(),
        rarity: Rarity::Universe,
        base: BaseStats {
            hp: 300,
            damage: DamageRange { min: 10, max: 20 },
            defense: 50,
            crit: 5,
        },
        abilities: vec![
            Ability::new("Strike", 2, 2, AbilityEffect::Damage { amount: 120 }),
            Ability::new("Rest", 1, 0, AbilityEffect::Heal { amount: 100 }).with_energy_restore(3),
            Ability::new("Expose", 2, 3, AbilityEffect::DefenseModifier { percent: -50 }),
            Ability::new("Focus", 2, 1, AbilityEffect::AttackModifier { percent: 20 }),
            Ability::new("Finisher", 3, 10, AbilityEffect::Damage { amount: 1000 }),
            Ability::new("Anvil", 9, 0, AbilityEffect::Damage { amount: 10 }),
        ],
    }
}

pub struct Harness {
    pub engine: DuelEngine,
    pub repo: Arc<InMemoryProgressRepo>,
}

pub fn harness() -> Harness {
    harness_with(EngineConfig::default().with_reward_seed(7))
}

pub fn harness_with(config: EngineConfig) -> Harness {
    let repo = Arc::new(InMemoryProgressRepo::new());
    let oracle = CharacterOracleImpl::from_characters([duelist()]);
    let engine = DuelEngine::builder()
        .config(config)
        .oracle(Arc::new(oracle))
        .repository(repo.clone())
        .build()
        .expect("engine builds");
    Harness { engine, repo }
}

impl Harness {
    /// Give `player` a level-1 duelist equipped with Strike, Rest and Finisher.
    pub fn enroll(&self, player: PlayerId) {
        self.enroll_at(player, 1);
    }

    pub fn enroll_at(&self, player: PlayerId, level: u8) {
        self.repo.grant_character(player, DUELIST, level).unwrap();
        for (slot, ability) in [
            (SLOT_STRIKE, STRIKE),
            (SLOT_REST, REST),
            (SLOT_FINISHER, FINISHER),
        ] {
            self.repo
                .set_loadout_slot(player, DUELIST, slot, ability)
                .unwrap();
        }
    }

    /// Start an active friendly duel with `challenger` moving first.
    pub fn friendly(&self, challenger: PlayerId, target: PlayerId) {
        self.engine.challenge(challenger, target).unwrap();
        self.engine.accept_challenge(target).unwrap();
    }

    pub fn hp_of(&self, player: PlayerId) -> i64 {
        let view = self.engine.session_for(player).unwrap().expect("in a duel");
        view.fighter_for(player).expect("fighter").hp
    }

    pub fn energy_of(&self, player: PlayerId) -> u8 {
        let view = self.engine.session_for(player).unwrap().expect("in a duel");
        view.fighter_for(player).expect("fighter").energy
    }
}
