//! Duel engine orchestrator.
//!
//! [`DuelEngine`] owns the queue, the session registry and the challenge
//! board, and borrows catalog and progress data through the oracle and
//! repository it was built with. It is cheap to clone; clones share state, so
//! one handle per request task is the intended use.
//!
//! Operations are grouped by concern:
//! - [`ranked`](self::ranked): queue entry, pairing and session creation
//! - [`duel`](self::duel): accept / reject / forfeit / act and settlement
//! - [`friendly`](self::friendly): challenges
//! - [`progression`](self::progression): character selection, loadouts, upgrades

mod config;
mod duel;
mod friendly;
mod progression;
mod ranked;

pub use config::EngineConfig;

use std::sync::{Arc, Mutex};

use duel_core::{Character, CharacterOracle, FighterSetup, Loadout, PlayerId, RewardRng};
use tokio::sync::broadcast;

use crate::api::{Result, RuntimeError};
use crate::challenges::ChallengeBoard;
use crate::events::{Event, EventBus, Topic};
use crate::matchmaking::MatchmakingQueue;
use crate::repository::ProgressRepository;
use crate::rewards::StdRewardRng;
use crate::sessions::SessionRegistry;

/// Shared duel engine.
#[derive(Clone)]
pub struct DuelEngine {
    config: Arc<EngineConfig>,
    oracle: Arc<dyn CharacterOracle>,
    repository: Arc<dyn ProgressRepository>,
    queue: Arc<MatchmakingQueue>,
    registry: Arc<SessionRegistry>,
    challenges: Arc<ChallengeBoard>,
    events: EventBus,
    rng: Arc<Mutex<Box<dyn RewardRng>>>,
    /// Serializes loadout edits and upgrades against the progress store.
    progress_guard: Arc<Mutex<()>>,
}

/// A player's ranked/friendly entry read from progress.
struct Entrant<'a> {
    character: &'a Character,
    level: u8,
    loadout: Loadout,
}

impl Entrant<'_> {
    fn setup(&self) -> FighterSetup<'_> {
        FighterSetup::new(self.character, self.level, &self.loadout)
    }
}

impl DuelEngine {
    pub fn builder() -> DuelEngineBuilder {
        DuelEngineBuilder::new()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn oracle(&self) -> &dyn CharacterOracle {
        self.oracle.as_ref()
    }

    pub fn repository(&self) -> &dyn ProgressRepository {
        self.repository.as_ref()
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Subscribe to one event topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    /// Players waiting for a ranked match, in queue order.
    pub fn waiting_players(&self) -> Result<Vec<PlayerId>> {
        self.queue.snapshot()
    }

    pub fn is_in_duel(&self, player: PlayerId) -> Result<bool> {
        self.registry.is_in_duel(player)
    }

    /// Resolve `player`'s active character and check it can enter a duel.
    ///
    /// Checks run in a fixed order: selected character, catalog entry,
    /// ownership, non-empty loadout, at least one zero-cost ability.
    fn entrant(&self, player: PlayerId) -> Result<Entrant<'_>> {
        let progress = self.repository.progress(player)?;
        let Some(character_id) = progress.active_character.clone() else {
            return Err(RuntimeError::NoActiveCharacter { player });
        };
        let character = self.oracle.character(&character_id).ok_or_else(|| {
            RuntimeError::UnknownCharacter {
                character: character_id.clone(),
            }
        })?;
        let owned = progress.characters.get(&character_id).ok_or_else(|| {
            RuntimeError::CharacterNotOwned {
                player,
                character: character_id.clone(),
            }
        })?;

        if owned.loadout.is_empty() {
            return Err(RuntimeError::EmptyLoadout { player });
        }
        if !owned.loadout.has_zero_cost(character) {
            return Err(RuntimeError::NoZeroCostAbility { player });
        }

        Ok(Entrant {
            character,
            level: owned.level,
            loadout: owned.loadout.clone(),
        })
    }

    fn catalog_entry(&self, character: &str) -> Result<&Character> {
        self.oracle
            .character(character)
            .ok_or_else(|| RuntimeError::UnknownCharacter {
                character: character.to_owned(),
            })
    }
}

/// Builder for [`DuelEngine`].
pub struct DuelEngineBuilder {
    config: EngineConfig,
    oracle: Option<Arc<dyn CharacterOracle>>,
    repository: Option<Arc<dyn ProgressRepository>>,
    rng: Option<Box<dyn RewardRng>>,
}

impl DuelEngineBuilder {
    fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            oracle: None,
            repository: None,
            rng: None,
        }
    }

    /// Override engine configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the required character catalog
    pub fn oracle(mut self, oracle: Arc<dyn CharacterOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Set the required progress store
    pub fn repository(mut self, repository: Arc<dyn ProgressRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Use a custom reward generator instead of the one derived from
    /// `EngineConfig::reward_seed`.
    pub fn reward_rng(mut self, rng: impl RewardRng + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn build(self) -> Result<DuelEngine> {
        let (Some(oracle), Some(repository)) = (self.oracle, self.repository) else {
            return Err(RuntimeError::MissingDependencies);
        };

        let rng: Box<dyn RewardRng> = match (self.rng, self.config.reward_seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => Box::new(StdRewardRng::seeded(seed)),
            (None, None) => Box::new(StdRewardRng::from_entropy()),
        };

        tracing::debug!(
            characters = oracle.character_ids().len(),
            scale_ranked = self.config.duel.scale_ranked_damage,
            scale_friendly = self.config.duel.scale_friendly_damage,
            "duel engine built"
        );

        Ok(DuelEngine {
            events: EventBus::with_capacity(self.config.event_buffer_size),
            config: Arc::new(self.config),
            oracle,
            repository,
            queue: Arc::new(MatchmakingQueue::new()),
            registry: Arc::new(SessionRegistry::new()),
            challenges: Arc::new(ChallengeBoard::new()),
            rng: Arc::new(Mutex::new(rng)),
            progress_guard: Arc::new(Mutex::new(())),
        })
    }
}
