//! Session lifecycle: accept, reject, forfeit, act.
//!
//! Every operation clones the session handle out of the registry, drops the
//! registry lock, and only then locks the session. Registry cleanup and
//! event publishing happen after the session lock is released.

use duel_core::{DuelKind, DuelStatus, PlayerId, SessionError, SessionId, SessionView, Settlement};
use tracing::{debug, trace, warn};

use super::DuelEngine;
use crate::api::{ActionResult, Result, RuntimeError};
use crate::events::DuelEvent;
use crate::sessions::{SharedSession, lock_session};

impl DuelEngine {
    /// Snapshot of the session `player` is in, if any.
    pub fn session_for(&self, player: PlayerId) -> Result<Option<SessionView>> {
        let Some((_, shared)) = self.registry.session_for(player)? else {
            return Ok(None);
        };
        let session = lock_session(&shared)?;
        Ok(Some(session.view()))
    }

    pub fn session(&self, id: SessionId) -> Result<SessionView> {
        let shared = self.shared_session(id)?;
        let session = lock_session(&shared)?;
        Ok(session.view())
    }

    /// The other participant of `player`'s duel, for relaying chat. Only a
    /// started duel counts; a pending session has no chat yet.
    pub fn opponent_of(&self, player: PlayerId) -> Result<PlayerId> {
        let (_, shared) = self.active_session_of(player)?;
        let session = lock_session(&shared)?;
        if session.status() != DuelStatus::Active {
            return Err(RuntimeError::NoActiveDuel { player });
        }
        session
            .opponent_of(player)
            .ok_or(RuntimeError::NoActiveDuel { player })
    }

    /// `pending → active`: snapshot both fighters and hand the turn to side A.
    pub fn accept_session(&self, id: SessionId) -> Result<SessionView> {
        let shared = self.shared_session(id)?;
        let mut session = lock_session(&shared)?;
        let status = session.status();
        if status != DuelStatus::Pending {
            return Err(SessionError::DuelNotPending { status }.into());
        }

        let [a, b] = session.players();
        let first = self.entrant(a)?;
        let second = self.entrant(b)?;
        session.activate(first.setup(), second.setup())?;
        let view = session.view();
        let kind = session.kind();
        drop(session);

        debug!(%id, %kind, %a, %b, "session activated");
        self.events.publish(DuelEvent::SessionStarted {
            session: id,
            kind,
            players: [a, b],
        });
        Ok(view)
    }

    /// `pending → finished` without a winner.
    pub fn reject_session(&self, id: SessionId) -> Result<()> {
        let shared = self.shared_session(id)?;
        lock_session(&shared)?.reject()?;
        self.registry.release(id)?;

        debug!(%id, "session rejected");
        self.events
            .publish(DuelEvent::SessionCancelled { session: id });
        Ok(())
    }

    /// Leave the current duel. In an active duel the opponent wins; no
    /// rewards are settled either way.
    pub fn forfeit(&self, player: PlayerId) -> Result<Option<PlayerId>> {
        let (id, shared) = self.active_session_of(player)?;
        let mut session = lock_session(&shared)?;
        let winner = session.forfeit(player)?;
        let kind = session.kind();
        drop(session);
        self.registry.release(id)?;

        debug!(%id, %player, ?winner, "duel forfeited");
        match winner {
            Some(winner) => self.events.publish(DuelEvent::DuelFinished {
                session: id,
                kind,
                winner: Some(winner),
                forfeit: true,
                rewards: None,
            }),
            None => self
                .events
                .publish(DuelEvent::SessionCancelled { session: id }),
        }
        Ok(winner)
    }

    /// Use the ability in `slot` on behalf of `player`.
    ///
    /// The turn check and the mutation share one session lock. When the hit
    /// ends the duel the session is released, and a ranked win is settled.
    pub fn act(&self, player: PlayerId, slot: u8) -> Result<ActionResult> {
        let (id, shared) = self.active_session_of(player)?;
        let mut session = lock_session(&shared)?;
        let report = session.act(player, slot, &self.config.duel)?;
        let view = session.view();
        let kind = session.kind();
        let loser = session.opponent_of(player);
        drop(session);

        trace!(%id, %player, slot, ability = %report.ability, "action resolved");
        self.events.publish(DuelEvent::ActionResolved {
            session: id,
            report: report.clone(),
        });

        let mut rewards = None;
        if let Some(winner) = report.winner {
            self.registry.release(id)?;
            if let (DuelKind::Ranked, Some(loser)) = (kind, loser) {
                rewards = Some(self.settle(winner, loser));
            }
            debug!(%id, %kind, %winner, "duel finished");
            self.events.publish(DuelEvent::DuelFinished {
                session: id,
                kind,
                winner: Some(winner),
                forfeit: false,
                rewards,
            });
        }

        Ok(ActionResult {
            view,
            ended: report.ended(),
            winner: report.winner,
            report,
            rewards,
        })
    }

    /// Roll and apply ranked rewards. Failures are logged, not returned: the
    /// duel has already ended when this runs.
    fn settle(&self, winner: PlayerId, loser: PlayerId) -> Settlement {
        let settlement = {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| {
                warn!("reward rng lock poisoned, reusing generator");
                poisoned.into_inner()
            });
            self.config.rewards.settle(winner, loser, &mut **rng)
        };

        for delta in [settlement.winner, settlement.loser] {
            if let Err(err) =
                self.repository
                    .apply_reward_delta(delta.player, delta.trophies, delta.souls)
            {
                warn!(player = %delta.player, %err, "failed to apply reward delta");
            }
        }
        debug!(
            %winner,
            %loser,
            trophies = settlement.winner.trophies,
            souls = settlement.winner.souls,
            lost = settlement.loser.trophies,
            "ranked rewards settled"
        );
        settlement
    }

    fn shared_session(&self, id: SessionId) -> Result<SharedSession> {
        self.registry
            .get(id)?
            .ok_or(RuntimeError::SessionNotFound { session: id })
    }

    fn active_session_of(&self, player: PlayerId) -> Result<(SessionId, SharedSession)> {
        self.registry
            .session_for(player)?
            .ok_or(RuntimeError::NoActiveDuel { player })
    }
}
