//! Error types raised by repository implementations.

use duel_core::PlayerId;
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("progress repository lock was poisoned")]
    LockPoisoned,

    #[error("{player} does not own character '{character}'")]
    CharacterNotOwned { player: PlayerId, character: String },

    #[error("{player} needs {needed} souls but has {available}")]
    InsufficientSouls {
        player: PlayerId,
        needed: u64,
        available: u64,
    },

    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
