//! Ability definitions.

/// What an ability does once its energy cost has been paid.
///
/// The set is closed on purpose: adding a kind means adding a resolver in
/// [`crate::combat`], and every `match` over this enum has to be revisited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AbilityEffect {
    /// Flat damage dealt to the opponent before level scaling and buffs.
    Damage { amount: u32 },

    /// Flat HP restored to the caster, capped at the caster's max HP.
    Heal { amount: u32 },

    /// Signed percent added to the opponent's defense accumulator.
    ///
    /// Negative values are debuffs and are the only ones that change
    /// mitigation (see [`crate::combat::effective_defense`]).
    DefenseModifier { percent: i32 },

    /// Signed percent added to the caster's attack accumulator.
    AttackModifier { percent: i32 },
}

impl AbilityEffect {
    /// Stable label for logs and error messages.
    pub fn label(&self) -> &'static str {
        self.into()
    }
}

/// Immutable catalog entry for a single ability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub name: String,
    pub description: String,
    /// Cost toward the loadout weight budget (1–10).
    pub weight: u32,
    /// Energy spent on use (0–10).
    pub energy_cost: u8,
    /// Energy returned after the cost is paid, capped at the energy maximum.
    #[cfg_attr(feature = "serde", serde(default))]
    pub energy_restore: u8,
    pub effect: AbilityEffect,
    /// Cosmetic animation shown by the chat layer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub asset: Option<String>,
}

impl Ability {
    pub fn new(name: impl Into<String>, weight: u32, energy_cost: u8, effect: AbilityEffect) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            weight,
            energy_cost,
            energy_restore: 0,
            effect,
            asset: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_energy_restore(mut self, restore: u8) -> Self {
        self.energy_restore = restore;
        self
    }

    pub fn with_asset(mut self, asset: impl Into<String>) -> Self {
        self.asset = Some(asset.into());
        self
    }

    /// Zero-cost abilities keep a player from being stuck without a legal move.
    pub fn is_free(&self) -> bool {
        self.energy_cost == 0
    }
}
