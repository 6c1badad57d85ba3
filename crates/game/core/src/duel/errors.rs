//! Rejections raised by session transitions.

use super::DuelStatus;
use crate::error::{EngineError, ErrorSeverity};
use crate::ids::PlayerId;

/// Why an `act` request was refused. Checked in declaration order, before
/// any state is touched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ActError {
    #[error("duel is {status}, not active")]
    DuelNotActive { status: DuelStatus },

    #[error("it is {turn_owner}'s turn, not {player}'s")]
    NotYourTurn { player: PlayerId, turn_owner: PlayerId },

    #[error("no ability equipped in slot {slot}")]
    AbilityNotFound { slot: u8 },

    #[error("ability needs {required} energy, {available} available")]
    InsufficientEnergy { required: u8, available: u8 },
}

impl EngineError for ActError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuelNotActive { .. } => ErrorSeverity::Recoverable,
            Self::NotYourTurn { .. } => ErrorSeverity::Recoverable,
            Self::AbilityNotFound { .. } | Self::InsufficientEnergy { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        self.into()
    }
}

/// Why a lifecycle transition (activate, reject, forfeit) was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SessionError {
    #[error("duel is {status}, not pending")]
    DuelNotPending { status: DuelStatus },

    #[error("duel is already finished")]
    AlreadyFinished,

    #[error("{player} is not part of this duel")]
    NotParticipant { player: PlayerId },

    #[error("{player}'s loadout references missing ability #{index} in slot {slot}")]
    InvalidLoadout {
        player: PlayerId,
        slot: u8,
        index: usize,
    },
}

impl EngineError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuelNotPending { .. } | Self::AlreadyFinished => ErrorSeverity::Recoverable,
            Self::NotParticipant { .. } => ErrorSeverity::Validation,
            Self::InvalidLoadout { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        self.into()
    }
}
