//! Runtime orchestration for two-player duels.
//!
//! This crate wires the pure duel rules from `duel-core` to shared mutable
//! state: the ranked queue, the session registry, pending friendly
//! challenges, and a progress store. Consumers embed [`DuelEngine`] and call
//! it from whatever request handlers they run.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the engine, its builder and configuration
//! - [`api`] exposes the errors and result types callers interact with
//! - [`events`] provides a topic-based event bus
//! - [`matchmaking`], [`sessions`] and [`challenges`] hold the shared state
//! - [`oracle`] and [`repository`] provide data adapters
pub mod api;
pub mod challenges;
pub mod events;
pub mod matchmaking;
pub mod oracle;
pub mod repository;
pub mod rewards;
pub mod runtime;
pub mod sessions;

pub use api::{ActionResult, Result, RuntimeError, SlotAssignment, UpgradeOutcome};
pub use events::{DuelEvent, Event, EventBus, MatchmakingEvent, Topic};
pub use matchmaking::{MatchmakingQueue, WaitingList};
pub use oracle::CharacterOracleImpl;
pub use repository::{
    InMemoryProgressRepo, OwnedCharacter, PlayerProgress, ProgressRepository, RepositoryError,
};
pub use rewards::StdRewardRng;
pub use runtime::{DuelEngine, DuelEngineBuilder, EngineConfig};
pub use sessions::SessionRegistry;
