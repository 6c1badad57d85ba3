//! Pending friendly challenges, one per target.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use duel_core::PlayerId;

use crate::api::{Result, RuntimeError};

#[derive(Debug, Default)]
pub struct ChallengeBoard {
    /// target → challenger
    pending: Mutex<HashMap<PlayerId, PlayerId>>,
}

impl ChallengeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn pending(&self) -> Result<MutexGuard<'_, HashMap<PlayerId, PlayerId>>> {
        self.pending.lock().map_err(|_| RuntimeError::LockPoisoned)
    }

    /// Record a challenge. Returns the challenger it replaced, if any.
    pub fn issue(&self, challenger: PlayerId, target: PlayerId) -> Result<Option<PlayerId>> {
        Ok(self.pending()?.insert(target, challenger))
    }

    /// Remove and return the pending challenger for `target`.
    pub fn take(&self, target: PlayerId) -> Result<Option<PlayerId>> {
        Ok(self.pending()?.remove(&target))
    }

    pub fn challenger_of(&self, target: PlayerId) -> Result<Option<PlayerId>> {
        Ok(self.pending()?.get(&target).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_challenge_replaces_older() {
        let board = ChallengeBoard::new();
        let target = PlayerId::new(9);
        assert_eq!(board.issue(PlayerId::new(1), target).unwrap(), None);
        assert_eq!(
            board.issue(PlayerId::new(2), target).unwrap(),
            Some(PlayerId::new(1))
        );
        assert_eq!(board.take(target).unwrap(), Some(PlayerId::new(2)));
        assert_eq!(board.take(target).unwrap(), None);
    }
}
