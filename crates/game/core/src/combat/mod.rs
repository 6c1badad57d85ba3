//! Ability effect resolution.
//!
//! Pure functions over copied session values. The duel session gathers an
//! [`EffectContext`], calls [`resolve_effect`] and applies the returned
//! [`EffectOutcome`] to its own state.
//!
//! # Core Functions
//!
//! - `resolve_effect`: one resolver per [`AbilityEffect`](crate::catalog::AbilityEffect) kind
//! - `calculate_damage`: level scaling, attack buff, defense mitigation
//! - `apply_heal`: HP restore capped at max

pub mod damage;
pub mod effect;
pub mod heal;
pub mod modifiers;

pub use damage::{DamageInput, apply_attack_buff, calculate_damage, effective_defense, mitigate};
pub use effect::{EffectContext, EffectOutcome, resolve_effect};
pub use heal::{HealOutcome, apply_heal};
pub use modifiers::Buffs;
