//! In-memory ProgressRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use duel_core::PlayerId;

use super::{OwnedCharacter, PlayerProgress, ProgressRepository, RepositoryError, Result};

/// In-memory implementation of ProgressRepository.
///
/// One `RwLock` guards all players, which makes every method trivially
/// atomic per player.
pub struct InMemoryProgressRepo {
    players: RwLock<HashMap<PlayerId, PlayerProgress>>,
}

impl InMemoryProgressRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
        }
    }

    /// Replace a player's whole record.
    pub fn insert(&self, player: PlayerId, progress: PlayerProgress) -> Result<()> {
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        players.insert(player, progress);
        Ok(())
    }

    /// Add a character to a player's collection at `level`, selecting it if
    /// the player has no active character yet.
    pub fn grant_character(&self, player: PlayerId, character: &str, level: u8) -> Result<()> {
        self.update(player, |progress| {
            progress
                .characters
                .entry(character.to_owned())
                .or_insert_with(|| OwnedCharacter::new(level));
            if progress.active_character.is_none() {
                progress.active_character = Some(character.to_owned());
            }
            Ok(())
        })
    }

    /// Overwrite currency and trophy totals.
    pub fn set_balances(
        &self,
        player: PlayerId,
        souls: u64,
        trophy_souls: u64,
        trophies: u64,
    ) -> Result<()> {
        self.update(player, |progress| {
            progress.souls = souls;
            progress.trophy_souls = trophy_souls;
            progress.trophies = trophies;
            Ok(())
        })
    }

    fn update<T>(
        &self,
        player: PlayerId,
        f: impl FnOnce(&mut PlayerProgress) -> Result<T>,
    ) -> Result<T> {
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let progress = players.entry(player).or_default();
        let mut draft = progress.clone();
        let out = f(&mut draft)?;
        *progress = draft;
        Ok(out)
    }
}

impl Default for InMemoryProgressRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn owned_mut<'a>(
    progress: &'a mut PlayerProgress,
    player: PlayerId,
    character: &str,
) -> Result<&'a mut OwnedCharacter> {
    progress
        .characters
        .get_mut(character)
        .ok_or_else(|| RepositoryError::CharacterNotOwned {
            player,
            character: character.to_owned(),
        })
}

impl ProgressRepository for InMemoryProgressRepo {
    fn progress(&self, player: PlayerId) -> Result<PlayerProgress> {
        let players = self
            .players
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(players.get(&player).cloned().unwrap_or_default())
    }

    fn set_active_character(&self, player: PlayerId, character: &str) -> Result<()> {
        self.update(player, |progress| {
            owned_mut(progress, player, character)?;
            progress.active_character = Some(character.to_owned());
            Ok(())
        })
    }

    fn set_loadout_slot(
        &self,
        player: PlayerId,
        character: &str,
        slot: u8,
        ability_index: usize,
    ) -> Result<()> {
        self.update(player, |progress| {
            let owned = owned_mut(progress, player, character)?;
            let mut slots: Vec<(u8, usize)> = owned.loadout.iter().collect();
            slots.retain(|(s, _)| *s != slot);
            slots.push((slot, ability_index));
            owned.loadout = slots.into_iter().collect();
            Ok(())
        })
    }

    fn apply_reward_delta(
        &self,
        player: PlayerId,
        trophies: i64,
        souls: i64,
    ) -> Result<PlayerProgress> {
        self.update(player, |progress| {
            progress.trophies = PlayerProgress::apply_delta(progress.trophies, trophies);
            progress.souls = PlayerProgress::apply_delta(progress.souls, souls);
            Ok(progress.clone())
        })
    }

    fn set_level(&self, player: PlayerId, character: &str, level: u8) -> Result<()> {
        self.update(player, |progress| {
            owned_mut(progress, player, character)?.level = level;
            Ok(())
        })
    }

    fn spend_souls(&self, player: PlayerId, amount: u64) -> Result<()> {
        self.update(player, |progress| {
            if progress.souls < amount {
                return Err(RepositoryError::InsufficientSouls {
                    player,
                    needed: amount,
                    available: progress.souls,
                });
            }
            progress.souls -= amount;
            Ok(())
        })
    }
}
