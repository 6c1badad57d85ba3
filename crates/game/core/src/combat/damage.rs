//! Damage calculation.
//!
//! Fractional steps use `f64` and truncate toward zero, so a given set of
//! inputs always lands on the same integer.

use crate::stats::scale_stat;

// ============================================================================
// Damage Input
// ============================================================================

/// Everything the damage formula reads from the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageInput {
    /// Flat amount from the ability definition.
    pub base: u32,
    pub attacker_level: u8,
    /// Whether `base` is scaled by `attacker_level` for this duel kind.
    pub scale_by_level: bool,
    /// Attacker's attack accumulator.
    pub attack_percent: i32,
    /// Defender's scaled defense.
    pub defense: u32,
    /// Defender's defense accumulator.
    pub defense_percent: i32,
}

// ============================================================================
// Damage Calculation
// ============================================================================

/// Calculate the final damage of one hit.
///
/// # Formula
///
/// ```text
/// dmg = scale(base, level)            if scale_by_level
/// dmg = trunc(dmg * (1 + atk% / 100)) if atk% > 0
/// final = max(1, dmg - effective_defense(def, def%))
/// ```
pub fn calculate_damage(input: &DamageInput) -> u32 {
    let mut damage = input.base;
    if input.scale_by_level {
        damage = scale_stat(damage, input.attacker_level);
    }
    damage = apply_attack_buff(damage, input.attack_percent);
    mitigate(damage, effective_defense(input.defense, input.defense_percent))
}

/// Amplify damage by a positive attack accumulator. Zero and negative
/// accumulators leave damage unchanged.
pub fn apply_attack_buff(damage: u32, attack_percent: i32) -> u32 {
    if attack_percent <= 0 {
        return damage;
    }
    (f64::from(damage) * (1.0 + f64::from(attack_percent) / 100.0)) as u32
}

/// Defense after the defender's accumulator.
///
/// Only a negative accumulator (a debuff) changes defense. Below -100% the
/// result goes negative and increases the damage taken.
pub fn effective_defense(defense: u32, defense_percent: i32) -> i64 {
    if defense_percent >= 0 {
        return i64::from(defense);
    }
    (f64::from(defense) * (1.0 + f64::from(defense_percent) / 100.0)) as i64
}

/// Subtract defense, never dealing less than 1.
pub fn mitigate(damage: u32, effective_defense: i64) -> u32 {
    let reduced = (i64::from(damage) - effective_defense).max(1);
    u32::try_from(reduced).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(base: u32, defense: u32) -> DamageInput {
        DamageInput {
            base,
            attacker_level: 1,
            scale_by_level: false,
            attack_percent: 0,
            defense,
            defense_percent: 0,
        }
    }

    #[test]
    fn defense_is_subtracted() {
        assert_eq!(calculate_damage(&input(120, 50)), 70);
    }

    #[test]
    fn at_least_one_damage() {
        assert_eq!(calculate_damage(&input(80, 500)), 1);
        assert_eq!(calculate_damage(&input(0, 0)), 1);
    }

    #[test]
    fn attack_buff_amplifies_before_mitigation() {
        assert_eq!(apply_attack_buff(100, 20), 120);
        assert_eq!(apply_attack_buff(100, -50), 100);

        let buffed = DamageInput {
            attack_percent: 20,
            ..input(100, 0)
        };
        assert_eq!(calculate_damage(&buffed), 120);
    }

    #[test]
    fn only_negative_defense_accumulator_counts() {
        assert_eq!(effective_defense(100, 50), 100);
        assert_eq!(effective_defense(100, -30), 70);
        assert_eq!(effective_defense(100, -150), -50);

        let debuffed = DamageInput {
            defense_percent: -150,
            ..input(100, 100)
        };
        assert_eq!(calculate_damage(&debuffed), 150);
    }

    #[test]
    fn level_scaling_is_optional() {
        let scaled = DamageInput {
            attacker_level: 3,
            scale_by_level: true,
            ..input(100, 0)
        };
        assert_eq!(calculate_damage(&scaled), 123);

        let unscaled = DamageInput {
            scale_by_level: false,
            ..scaled
        };
        assert_eq!(calculate_damage(&unscaled), 100);
    }
}
