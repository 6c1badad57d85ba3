//! Character selection, loadout edits and upgrades.
//!
//! Loadout edits and upgrades run under one progress guard so the weight
//! budget and soul balance checks see the value they are about to replace.

use duel_core::{DuelConfig, LoadoutError, PlayerId, UpgradeRequirement};
use tracing::{debug, warn};

use super::DuelEngine;
use crate::api::{Result, RuntimeError, SlotAssignment, UpgradeOutcome};
use crate::repository::PlayerProgress;

impl DuelEngine {
    pub fn progress(&self, player: PlayerId) -> Result<PlayerProgress> {
        Ok(self.repository.progress(player)?)
    }

    /// Choose the character used for the next duel.
    pub fn select_character(&self, player: PlayerId, character: &str) -> Result<()> {
        self.catalog_entry(character)?;
        self.ensure_owned(player, character)?;
        self.repository.set_active_character(player, character)?;
        debug!(%player, character, "character selected");
        Ok(())
    }

    /// Equip ability `ability_index` of `character` into `slot`.
    ///
    /// Checks slot range, catalog entry, ownership, ability index and weight
    /// budget, in that order, before anything is stored.
    pub fn assign_slot(
        &self,
        player: PlayerId,
        character: &str,
        slot: u8,
        ability_index: usize,
    ) -> Result<SlotAssignment> {
        let _guard = self
            .progress_guard
            .lock()
            .map_err(|_| RuntimeError::LockPoisoned)?;

        if !(1..=DuelConfig::MAX_SLOTS).contains(&slot) {
            return Err(LoadoutError::SlotOutOfRange { slot }.into());
        }
        let definition = self.catalog_entry(character)?;
        self.ensure_owned(player, character)?;

        let mut loadout = self.repository.loadout_of(player, character)?;
        let outcome = loadout.assign(definition, slot, ability_index)?;
        self.repository
            .set_loadout_slot(player, character, slot, ability_index)?;

        debug!(
            %player,
            character,
            slot,
            ability_index,
            total_weight = outcome.total_weight,
            "loadout slot assigned"
        );
        Ok(SlotAssignment {
            slot,
            ability_index,
            outcome,
        })
    }

    /// Raise `character` one level, spending souls.
    ///
    /// Trophy souls and trophies are thresholds only. Sessions already in
    /// progress keep the stats they were activated with.
    pub fn upgrade_character(&self, player: PlayerId, character: &str) -> Result<UpgradeOutcome> {
        let _guard = self
            .progress_guard
            .lock()
            .map_err(|_| RuntimeError::LockPoisoned)?;

        let definition = self.catalog_entry(character)?;
        let progress = self.repository.progress(player)?;
        let level = progress
            .characters
            .get(character)
            .map(|owned| owned.level)
            .ok_or_else(|| RuntimeError::CharacterNotOwned {
                player,
                character: character.to_owned(),
            })?;

        let max_reached = || RuntimeError::MaxLevelReached {
            character: character.to_owned(),
            level,
        };
        if level >= definition.max_level() {
            return Err(max_reached());
        }
        let next = level + 1;
        let required = UpgradeRequirement::for_level(next).ok_or_else(max_reached)?;
        if !required.is_met_by(progress.souls, progress.trophy_souls, progress.trophies) {
            return Err(RuntimeError::InsufficientResources { required });
        }

        self.repository.spend_souls(player, required.souls_cost)?;
        if let Err(err) = self.repository.set_level(player, character, next) {
            let refund = i64::try_from(required.souls_cost).unwrap_or(i64::MAX);
            if let Err(refund_err) = self.repository.apply_reward_delta(player, 0, refund) {
                warn!(%player, %refund_err, "failed to refund souls after a failed upgrade");
            }
            return Err(err.into());
        }

        debug!(%player, character, level = next, souls = required.souls_cost, "character upgraded");
        Ok(UpgradeOutcome {
            character: character.to_owned(),
            level: next,
            souls_spent: required.souls_cost,
        })
    }

    fn ensure_owned(&self, player: PlayerId, character: &str) -> Result<()> {
        if self.repository.owns_character(player, character)? {
            Ok(())
        } else {
            Err(RuntimeError::CharacterNotOwned {
                player,
                character: character.to_owned(),
            })
        }
    }
}
