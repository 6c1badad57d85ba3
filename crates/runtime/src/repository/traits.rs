//! Repository contract for player progress.

use duel_core::{Loadout, PlayerId};

use super::{PlayerProgress, Result};

/// Read/write access to player progress.
///
/// Every method is atomic per player. Unknown players read as a fresh
/// profile, the way a chat bot treats first contact.
pub trait ProgressRepository: Send + Sync {
    /// Full snapshot of a player's progress.
    fn progress(&self, player: PlayerId) -> Result<PlayerProgress>;

    /// Currently selected character id, if any.
    fn active_character(&self, player: PlayerId) -> Result<Option<String>> {
        Ok(self.progress(player)?.active_character)
    }

    /// Select `character` for duels. The player must own it.
    fn set_active_character(&self, player: PlayerId, character: &str) -> Result<()>;

    /// Level of an owned character, `None` when not owned.
    fn level_of(&self, player: PlayerId, character: &str) -> Result<Option<u8>> {
        Ok(self
            .progress(player)?
            .characters
            .get(character)
            .map(|owned| owned.level))
    }

    fn owns_character(&self, player: PlayerId, character: &str) -> Result<bool> {
        Ok(self.level_of(player, character)?.is_some())
    }

    /// Loadout of an owned character. Unowned characters read as empty.
    fn loadout_of(&self, player: PlayerId, character: &str) -> Result<Loadout> {
        Ok(self
            .progress(player)?
            .characters
            .get(character)
            .map(|owned| owned.loadout.clone())
            .unwrap_or_default())
    }

    /// Store one slot assignment. Validation is the caller's job.
    fn set_loadout_slot(
        &self,
        player: PlayerId,
        character: &str,
        slot: u8,
        ability_index: usize,
    ) -> Result<()>;

    /// Add signed deltas to trophies and souls, flooring both at zero.
    /// Returns the updated progress.
    fn apply_reward_delta(&self, player: PlayerId, trophies: i64, souls: i64)
    -> Result<PlayerProgress>;

    fn set_level(&self, player: PlayerId, character: &str, level: u8) -> Result<()>;

    /// Deduct `amount` souls, failing without change when the balance is short.
    fn spend_souls(&self, player: PlayerId, amount: u64) -> Result<()>;
}
