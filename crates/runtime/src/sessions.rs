//! Session registry: an arena of duel sessions indexed by both participants.
//!
//! Lock discipline:
//! - the index lock is held only for map lookups and updates, never while a
//!   session lock is being acquired;
//! - callers clone the session `Arc` out of the index, release the index, and
//!   then lock the session;
//! - index entries are removed only if they still point at the finished
//!   session, so a player who already moved on is never unindexed.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use duel_core::{DuelKind, DuelSession, PlayerId, SessionId};

use crate::api::{Result, RuntimeError};

/// A session shared between the two request handlers of its participants.
pub type SharedSession = Arc<Mutex<DuelSession>>;

/// Lock a shared session, mapping poisoning to an error.
pub fn lock_session(session: &SharedSession) -> Result<MutexGuard<'_, DuelSession>> {
    session.lock().map_err(|_| RuntimeError::LockPoisoned)
}

#[derive(Default)]
struct Index {
    sessions: HashMap<SessionId, SharedSession>,
    by_player: HashMap<PlayerId, SessionId>,
    next_id: u64,
}

#[derive(Default)]
pub struct SessionRegistry {
    index: Mutex<Index>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn index(&self) -> Result<MutexGuard<'_, Index>> {
        self.index.lock().map_err(|_| RuntimeError::LockPoisoned)
    }

    /// Create a pending session and index it under both players.
    ///
    /// Fails with `AlreadyInDuel` naming the first participant that is
    /// still indexed elsewhere.
    pub fn create(
        &self,
        kind: DuelKind,
        a: PlayerId,
        b: PlayerId,
    ) -> Result<(SessionId, SharedSession)> {
        if a == b {
            return Err(RuntimeError::SelfChallenge);
        }
        let mut index = self.index()?;
        for player in [a, b] {
            if index.by_player.contains_key(&player) {
                return Err(RuntimeError::AlreadyInDuel { player });
            }
        }

        index.next_id += 1;
        let id = SessionId(index.next_id);
        let session = Arc::new(Mutex::new(DuelSession::new(id, kind, a, b)));
        index.sessions.insert(id, Arc::clone(&session));
        index.by_player.insert(a, id);
        index.by_player.insert(b, id);
        tracing::debug!(%id, %kind, %a, %b, "session created");
        Ok((id, session))
    }

    pub fn get(&self, id: SessionId) -> Result<Option<SharedSession>> {
        Ok(self.index()?.sessions.get(&id).cloned())
    }

    /// The session `player` is currently indexed under.
    pub fn session_for(&self, player: PlayerId) -> Result<Option<(SessionId, SharedSession)>> {
        let index = self.index()?;
        Ok(index
            .by_player
            .get(&player)
            .and_then(|id| index.sessions.get(id).map(|s| (*id, Arc::clone(s)))))
    }

    pub fn is_in_duel(&self, player: PlayerId) -> Result<bool> {
        Ok(self.index()?.by_player.contains_key(&player))
    }

    /// Drop a finished session from the arena and from both players' index
    /// entries. Idempotent.
    pub fn release(&self, id: SessionId) -> Result<()> {
        let mut index = self.index()?;
        if index.sessions.remove(&id).is_some() {
            tracing::debug!(%id, "session released");
        }
        index.by_player.retain(|_, session| *session != id);
        Ok(())
    }

    /// Number of sessions in the arena.
    pub fn len(&self) -> Result<usize> {
        Ok(self.index()?.sessions.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
