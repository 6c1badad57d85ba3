//! Results returned by [`DuelEngine`](crate::DuelEngine) operations.

use duel_core::{ActionReport, AssignOutcome, PlayerId, SessionView, Settlement};
use serde::{Deserialize, Serialize};

/// Outcome of one `act` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    /// Session state after the action.
    pub view: SessionView,
    pub ended: bool,
    pub winner: Option<PlayerId>,
    pub report: ActionReport,
    /// Applied deltas when the action ended a ranked duel.
    pub rewards: Option<Settlement>,
}

/// Outcome of a successful character upgrade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeOutcome {
    pub character: String,
    pub level: u8,
    pub souls_spent: u64,
}

/// Outcome of a slot assignment, with the loadout's new total weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub slot: u8,
    pub ability_index: usize,
    pub outcome: AssignOutcome,
}
