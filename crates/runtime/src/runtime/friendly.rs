//! Friendly challenges.

use duel_core::{DuelKind, PlayerId, SessionView};
use tracing::{debug, warn};

use super::DuelEngine;
use crate::api::{Result, RuntimeError};
use crate::events::MatchmakingEvent;

impl DuelEngine {
    /// Challenge `target` to a friendly duel. A newer challenge to the same
    /// target replaces the pending one.
    pub fn challenge(&self, challenger: PlayerId, target: PlayerId) -> Result<()> {
        if challenger == target {
            return Err(RuntimeError::SelfChallenge);
        }
        self.entrant(challenger)?;
        for player in [challenger, target] {
            if self.registry.is_in_duel(player)? {
                return Err(RuntimeError::AlreadyInDuel { player });
            }
        }

        if let Some(previous) = self.challenges.issue(challenger, target)? {
            debug!(%target, %previous, %challenger, "pending challenge replaced");
        }
        self.events
            .publish(MatchmakingEvent::ChallengeIssued { challenger, target });
        Ok(())
    }

    /// Accept the pending challenge addressed to `target` and start the duel
    /// right away, challenger moving first.
    pub fn accept_challenge(&self, target: PlayerId) -> Result<SessionView> {
        let challenger = self
            .challenges
            .take(target)?
            .ok_or(RuntimeError::ChallengeNotFound { target })?;
        self.entrant(target)?;

        let session = self.create_session(DuelKind::Friendly, challenger, target)?;
        match self.accept_session(session) {
            Ok(view) => Ok(view),
            Err(err) => {
                if let Err(cleanup) = self.reject_session(session) {
                    warn!(%session, %cleanup, "failed to discard unstartable session");
                }
                Err(err)
            }
        }
    }

    /// Drop the pending challenge addressed to `target`. Returns the
    /// challenger, if there was one.
    pub fn decline_challenge(&self, target: PlayerId) -> Result<Option<PlayerId>> {
        let challenger = self.challenges.take(target)?;
        if let Some(challenger) = challenger {
            self.events
                .publish(MatchmakingEvent::ChallengeDeclined { challenger, target });
        }
        Ok(challenger)
    }

    pub fn pending_challenge(&self, target: PlayerId) -> Result<Option<PlayerId>> {
        self.challenges.challenger_of(target)
    }
}
