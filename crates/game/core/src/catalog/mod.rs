//! Static character and ability catalog.
//!
//! The engine never owns catalog data. It reads it through [`CharacterOracle`],
//! which the runtime backs with whatever the content loader produced.

mod ability;
mod character;
mod upgrade;

pub use ability::{Ability, AbilityEffect};
pub use character::{BaseStats, Character, DamageRange, Rarity};
pub use upgrade::UpgradeRequirement;

/// Read-only access to character definitions.
pub trait CharacterOracle: Send + Sync {
    /// Look up a character by catalog id.
    fn character(&self, id: &str) -> Option<&Character>;

    /// All catalog ids, in a stable order.
    fn character_ids(&self) -> Vec<String>;
}
