//! Effect dispatch.

use super::damage::{DamageInput, calculate_damage};
use super::heal::apply_heal;
use super::modifiers::Buffs;
use crate::catalog::AbilityEffect;

/// Session values an effect may read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectContext {
    pub caster_level: u8,
    pub caster_hp: i64,
    pub caster_max_hp: u32,
    pub caster_buffs: Buffs,
    pub target_defense: u32,
    pub target_buffs: Buffs,
    /// Level-scale damage in this duel.
    pub scale_damage: bool,
}

/// What the session must apply after an effect resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectOutcome {
    /// Subtract `amount` from the target's HP.
    Damage { amount: u32 },
    /// Set the caster's HP to `hp`.
    Heal { hp: i64, healed: u32 },
    /// Add `percent` to the target's defense accumulator.
    DefenseModified { percent: i32 },
    /// Add `percent` to the caster's attack accumulator.
    AttackModified { percent: i32 },
}

pub fn resolve_effect(effect: AbilityEffect, ctx: &EffectContext) -> EffectOutcome {
    match effect {
        AbilityEffect::Damage { amount } => resolve_damage(amount, ctx),
        AbilityEffect::Heal { amount } => resolve_heal(amount, ctx),
        AbilityEffect::DefenseModifier { percent } => EffectOutcome::DefenseModified { percent },
        AbilityEffect::AttackModifier { percent } => EffectOutcome::AttackModified { percent },
    }
}

fn resolve_damage(amount: u32, ctx: &EffectContext) -> EffectOutcome {
    let input = DamageInput {
        base: amount,
        attacker_level: ctx.caster_level,
        scale_by_level: ctx.scale_damage,
        attack_percent: ctx.caster_buffs.attack_percent,
        defense: ctx.target_defense,
        defense_percent: ctx.target_buffs.defense_percent,
    };
    EffectOutcome::Damage {
        amount: calculate_damage(&input),
    }
}

fn resolve_heal(amount: u32, ctx: &EffectContext) -> EffectOutcome {
    let out = apply_heal(ctx.caster_hp, ctx.caster_max_hp, amount);
    EffectOutcome::Heal {
        hp: out.hp,
        healed: out.healed,
    }
}
