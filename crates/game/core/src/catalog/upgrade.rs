//! Level-up cost table.

/// Resources needed to raise a character to a given level.
///
/// Only `souls_cost` is spent. The trophy-soul and trophy thresholds are
/// checked against the player's totals and left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeRequirement {
    pub souls_cost: u64,
    pub trophy_souls: u64,
    pub trophies: u64,
}

impl UpgradeRequirement {
    const fn new(souls_cost: u64, trophy_souls: u64, trophies: u64) -> Self {
        Self {
            souls_cost,
            trophy_souls,
            trophies,
        }
    }

    /// Requirement for reaching `target_level`, or `None` outside 2..=10.
    pub const fn for_level(target_level: u8) -> Option<Self> {
        let req = match target_level {
            2 => Self::new(750, 100, 50),
            3 => Self::new(1_500, 250, 150),
            4 => Self::new(3_000, 750, 500),
            5 => Self::new(5_000, 1_000, 750),
            6 => Self::new(7_500, 1_250, 1_000),
            7 => Self::new(10_000, 2_000, 1_500),
            8 => Self::new(20_000, 4_000, 2_000),
            9 => Self::new(35_000, 5_000, 3_500),
            10 => Self::new(50_000, 7_500, 5_000),
            _ => return None,
        };
        Some(req)
    }

    pub const fn is_met_by(&self, souls: u64, trophy_souls: u64, trophies: u64) -> bool {
        souls >= self.souls_cost && trophy_souls >= self.trophy_souls && trophies >= self.trophies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_published_costs() {
        let lvl4 = UpgradeRequirement::for_level(4).unwrap();
        assert_eq!(lvl4.souls_cost, 3_000);
        assert_eq!(lvl4.trophy_souls, 750);
        assert_eq!(lvl4.trophies, 500);
        assert!(UpgradeRequirement::for_level(1).is_none());
        assert!(UpgradeRequirement::for_level(11).is_none());
    }

    #[test]
    fn every_threshold_is_checked() {
        let req = UpgradeRequirement::for_level(2).unwrap();
        assert!(req.is_met_by(750, 100, 50));
        assert!(!req.is_met_by(749, 100, 50));
        assert!(!req.is_met_by(750, 99, 50));
        assert!(!req.is_met_by(750, 100, 49));
    }
}
