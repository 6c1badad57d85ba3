//! Ranked queue entry and session creation.

use duel_core::{DuelKind, PlayerId, SessionId};
use tracing::{debug, trace};

use super::DuelEngine;
use crate::api::{Result, RuntimeError};
use crate::events::MatchmakingEvent;

impl DuelEngine {
    /// Search for a ranked opponent.
    ///
    /// Returns the new pending session when someone was waiting; otherwise
    /// the player joins the queue and `None` is returned. The caller is side
    /// A of the created session.
    pub fn enqueue_for_match(&self, player: PlayerId) -> Result<Option<SessionId>> {
        if self.registry.is_in_duel(player)? {
            return Err(RuntimeError::AlreadyInDuel { player });
        }
        if self.queue.contains(player)? {
            return Err(RuntimeError::AlreadyQueued { player });
        }
        self.entrant(player)?;

        let mut waiting = self.queue.lock()?;
        loop {
            let Some(opponent) = waiting.find_match(player) else {
                waiting.enqueue(player);
                drop(waiting);
                debug!(%player, "searching for a ranked opponent");
                self.events
                    .publish(MatchmakingEvent::SearchStarted { player });
                return Ok(None);
            };

            waiting.dequeue(opponent);
            match self.registry.create(DuelKind::Ranked, player, opponent) {
                Ok((session, _)) => {
                    waiting.dequeue(player);
                    drop(waiting);
                    debug!(%session, initiator = %player, %opponent, "ranked match found");
                    self.events.publish(MatchmakingEvent::MatchFound {
                        session,
                        initiator: player,
                        opponent,
                    });
                    return Ok(Some(session));
                }
                Err(RuntimeError::AlreadyInDuel { player: busy }) if busy == opponent => {
                    trace!(%opponent, "skipping queued player who is already dueling");
                }
                Err(err) => {
                    waiting.enqueue(opponent);
                    return Err(err);
                }
            }
        }
    }

    /// Leave the ranked queue. Returns whether the player was waiting.
    pub fn cancel_search(&self, player: PlayerId) -> Result<bool> {
        let removed = self.queue.dequeue(player)?;
        if removed {
            debug!(%player, "search cancelled");
            self.events
                .publish(MatchmakingEvent::SearchCancelled { player });
        }
        Ok(removed)
    }

    /// First waiting player other than `player`, without pairing anyone.
    pub fn find_opponent(&self, player: PlayerId) -> Result<PlayerId> {
        self.queue
            .find_match(player)?
            .ok_or(RuntimeError::OpponentNotFound { player })
    }

    /// Create a pending session between `a` (side A) and `b`, pulling both
    /// out of the ranked queue.
    pub fn create_session(&self, kind: DuelKind, a: PlayerId, b: PlayerId) -> Result<SessionId> {
        let mut waiting = self.queue.lock()?;
        let (session, _) = self.registry.create(kind, a, b)?;
        waiting.dequeue(a);
        waiting.dequeue(b);
        Ok(session)
    }
}
