//! Event payloads.

use duel_core::{ActionReport, DuelKind, PlayerId, SessionId, Settlement};
use serde::{Deserialize, Serialize};

/// Queue and challenge traffic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchmakingEvent {
    SearchStarted {
        player: PlayerId,
    },
    SearchCancelled {
        player: PlayerId,
    },
    /// A ranked pairing was made; `initiator` is side A.
    MatchFound {
        session: SessionId,
        initiator: PlayerId,
        opponent: PlayerId,
    },
    ChallengeIssued {
        challenger: PlayerId,
        target: PlayerId,
    },
    ChallengeDeclined {
        challenger: PlayerId,
        target: PlayerId,
    },
}

/// Session lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelEvent {
    SessionStarted {
        session: SessionId,
        kind: DuelKind,
        players: [PlayerId; 2],
    },
    ActionResolved {
        session: SessionId,
        report: ActionReport,
    },
    DuelFinished {
        session: SessionId,
        kind: DuelKind,
        winner: Option<PlayerId>,
        forfeit: bool,
        rewards: Option<Settlement>,
    },
    /// A pending session was rejected or abandoned before activation.
    SessionCancelled {
        session: SessionId,
    },
}
