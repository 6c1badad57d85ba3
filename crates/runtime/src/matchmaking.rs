//! Ranked matchmaking queue.
//!
//! One mutex guards the waiting list. The engine holds that guard across
//! find → dequeue → create so two searches can never claim the same
//! opponent.

use std::sync::{Mutex, MutexGuard};

use duel_core::PlayerId;

use crate::api::{Result, RuntimeError};

/// Insertion-ordered set of waiting players.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WaitingList {
    players: Vec<PlayerId>,
}

impl WaitingList {
    /// Add `player` if absent. Returns whether it was added.
    pub fn enqueue(&mut self, player: PlayerId) -> bool {
        if self.contains(player) {
            return false;
        }
        self.players.push(player);
        true
    }

    /// Remove `player` if present. Returns whether it was removed.
    pub fn dequeue(&mut self, player: PlayerId) -> bool {
        let before = self.players.len();
        self.players.retain(|p| *p != player);
        self.players.len() != before
    }

    /// First waiting player other than `player`. Nobody is removed.
    pub fn find_match(&self, player: PlayerId) -> Option<PlayerId> {
        self.players.iter().copied().find(|p| *p != player)
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        self.players.contains(&player)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().copied()
    }
}

/// Thread-safe wrapper around [`WaitingList`].
#[derive(Debug, Default)]
pub struct MatchmakingQueue {
    waiting: Mutex<WaitingList>,
}

impl MatchmakingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclusive access for multi-step sequences.
    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, WaitingList>> {
        self.waiting.lock().map_err(|_| RuntimeError::LockPoisoned)
    }

    pub fn enqueue(&self, player: PlayerId) -> Result<bool> {
        Ok(self.lock()?.enqueue(player))
    }

    pub fn dequeue(&self, player: PlayerId) -> Result<bool> {
        Ok(self.lock()?.dequeue(player))
    }

    pub fn find_match(&self, player: PlayerId) -> Result<Option<PlayerId>> {
        Ok(self.lock()?.find_match(player))
    }

    pub fn contains(&self, player: PlayerId) -> Result<bool> {
        Ok(self.lock()?.contains(player))
    }

    /// Waiting players in queue order.
    pub fn snapshot(&self) -> Result<Vec<PlayerId>> {
        Ok(self.lock()?.iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PlayerId = PlayerId::new(1);
    const B: PlayerId = PlayerId::new(2);
    const C: PlayerId = PlayerId::new(3);

    #[test]
    fn enqueue_and_dequeue_are_idempotent() {
        let mut list = WaitingList::default();
        assert!(list.enqueue(A));
        assert!(!list.enqueue(A));
        assert_eq!(list.len(), 1);
        assert!(list.dequeue(A));
        assert!(!list.dequeue(A));
        assert!(list.is_empty());
    }

    #[test]
    fn find_match_skips_self_and_removes_nobody() {
        let mut list = WaitingList::default();
        list.enqueue(A);
        assert_eq!(list.find_match(A), None);
        list.enqueue(B);
        assert_eq!(list.find_match(A), Some(B));
        assert_eq!(list.find_match(B), Some(A));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn requeued_player_moves_to_the_back() {
        let queue = MatchmakingQueue::new();
        for p in [A, B, C] {
            queue.enqueue(p).unwrap();
        }
        assert_eq!(queue.find_match(A).unwrap(), Some(B));
        queue.dequeue(B).unwrap();
        queue.enqueue(B).unwrap();
        assert_eq!(queue.find_match(A).unwrap(), Some(C));
        assert_eq!(queue.snapshot().unwrap(), vec![A, C, B]);
    }
}
