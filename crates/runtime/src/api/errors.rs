//! Unified error types surfaced by the runtime API.
//!
//! Wraps rejections from duel-core, queue and registry conflicts, and
//! repository failures so the chat layer can map each to a notice through
//! [`EngineError::error_code`].
use duel_core::{
    ActError, EngineError, ErrorSeverity, LoadoutError, PlayerId, SessionError, SessionId,
    UpgradeRequirement,
};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RuntimeError {
    // ===== matchmaking & registry =====
    #[error("{player} is already searching for a match")]
    AlreadyQueued { player: PlayerId },

    #[error("{player} is already in a duel")]
    AlreadyInDuel { player: PlayerId },

    #[error("no opponent available for {player}")]
    OpponentNotFound { player: PlayerId },

    #[error("{player} has no active duel")]
    NoActiveDuel { player: PlayerId },

    #[error("session {session} not found")]
    SessionNotFound { session: SessionId },

    #[error("a player cannot duel themselves")]
    SelfChallenge,

    #[error("no pending challenge for {target}")]
    ChallengeNotFound { target: PlayerId },

    // ===== eligibility =====
    #[error("{player} has not selected a character")]
    NoActiveCharacter { player: PlayerId },

    #[error("{player}'s loadout is empty")]
    EmptyLoadout { player: PlayerId },

    #[error("{player}'s loadout has no zero-cost ability")]
    NoZeroCostAbility { player: PlayerId },

    #[error("unknown character '{character}'")]
    UnknownCharacter { character: String },

    #[error("{player} does not own character '{character}'")]
    CharacterNotOwned { player: PlayerId, character: String },

    // ===== progression =====
    #[error("character '{character}' is already at max level {level}")]
    MaxLevelReached { character: String, level: u8 },

    #[error(
        "upgrade needs {} souls, {} trophy souls and {} trophies",
        .required.souls_cost,
        .required.trophy_souls,
        .required.trophies
    )]
    InsufficientResources { required: UpgradeRequirement },

    // ===== wrapped =====
    #[error(transparent)]
    Act(#[from] ActError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Loadout(#[from] LoadoutError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("engine lock was poisoned")]
    LockPoisoned,

    #[error("engine requires a character oracle and a progress repository before building")]
    MissingDependencies,
}

impl EngineError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Act(e) => e.severity(),
            Self::Session(e) => e.severity(),
            Self::Loadout(e) => e.severity(),
            Self::SessionNotFound { .. } | Self::NoActiveDuel { .. } => ErrorSeverity::Recoverable,
            Self::Repository(RepositoryError::InsufficientSouls { .. }) => {
                ErrorSeverity::Recoverable
            }
            Self::Repository(_) | Self::LockPoisoned | Self::MissingDependencies => {
                ErrorSeverity::Internal
            }
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Act(e) => e.error_code(),
            Self::Session(e) => e.error_code(),
            Self::Loadout(e) => e.error_code(),
            other => other.into(),
        }
    }
}
