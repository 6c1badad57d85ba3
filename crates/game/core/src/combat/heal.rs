//! Healing.

/// HP after a heal and the amount actually restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealOutcome {
    pub hp: i64,
    pub healed: u32,
}

/// Restore `amount` HP, capped at `max_hp`.
pub fn apply_heal(hp: i64, max_hp: u32, amount: u32) -> HealOutcome {
    let healed_hp = (hp + i64::from(amount)).min(i64::from(max_hp));
    let new_hp = healed_hp.max(hp);
    HealOutcome {
        hp: new_hp,
        healed: u32::try_from(new_hp - hp).unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_at_max() {
        let out = apply_heal(990, 1000, 100);
        assert_eq!(out.hp, 1000);
        assert_eq!(out.healed, 10);
    }

    #[test]
    fn full_amount_when_room() {
        assert_eq!(apply_heal(500, 1000, 150), HealOutcome { hp: 650, healed: 150 });
    }

    #[test]
    fn full_hp_heals_nothing() {
        assert_eq!(apply_heal(1000, 1000, 80).healed, 0);
    }
}
