//! Deterministic duel rules and data types shared by the runtime and tools.
//!
//! `duel-core` defines the catalog model, stat scaling, loadout validation,
//! ability resolution and the duel-session state machine. Everything here is
//! pure: no locks, no I/O, and randomness only through [`RewardRng`].
//! Concurrency and storage live in `duel-runtime`.
pub mod catalog;
pub mod combat;
pub mod config;
pub mod duel;
pub mod error;
pub mod ids;
pub mod loadout;
pub mod rewards;
pub mod stats;

pub use catalog::{
    Ability, AbilityEffect, BaseStats, Character, CharacterOracle, DamageRange, Rarity,
    UpgradeRequirement,
};
pub use combat::{Buffs, EffectContext, EffectOutcome, resolve_effect};
pub use config::DuelConfig;
pub use duel::{
    ActError, ActionReport, DuelKind, DuelSession, DuelStatus, Fighter, FighterSetup,
    FighterView, SessionError, SessionView, Side, SlotView,
};
pub use error::{EngineError, ErrorSeverity};
pub use ids::{PlayerId, SessionId};
pub use loadout::{AssignOutcome, Loadout, LoadoutError};
pub use rewards::{RewardDelta, RewardRange, RewardRng, RewardTable, Settlement};
pub use stats::{EnergyMeter, ScaledStats, scale_stat};
