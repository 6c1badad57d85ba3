//! Read-only snapshots handed to the chat layer for rendering.

use super::{DuelKind, DuelSession, DuelStatus, Fighter};
use crate::ids::{PlayerId, SessionId};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotView {
    pub slot: u8,
    pub name: String,
    pub energy_cost: u8,
    /// Whether the fighter can pay for it right now.
    pub affordable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterView {
    pub player: PlayerId,
    pub character_id: String,
    pub character_name: String,
    pub level: u8,
    pub hp: i64,
    pub max_hp: u32,
    pub energy: u8,
    pub attack_percent: i32,
    pub defense_percent: i32,
    pub last_hp_delta: i64,
    pub last_energy_delta: i32,
    pub slots: Vec<SlotView>,
}

impl From<&Fighter> for FighterView {
    fn from(fighter: &Fighter) -> Self {
        let energy = fighter.energy.current();
        Self {
            player: fighter.player,
            character_id: fighter.character_id.clone(),
            character_name: fighter.character_name.clone(),
            level: fighter.stats.level,
            hp: fighter.hp,
            max_hp: fighter.stats.max_hp,
            energy,
            attack_percent: fighter.buffs.attack_percent,
            defense_percent: fighter.buffs.defense_percent,
            last_hp_delta: fighter.last_hp_delta,
            last_energy_delta: fighter.last_energy_delta,
            slots: fighter
                .abilities
                .iter()
                .map(|(slot, ability)| SlotView {
                    slot: *slot,
                    name: ability.name.clone(),
                    energy_cost: ability.energy_cost,
                    affordable: ability.energy_cost <= energy,
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionView {
    pub id: SessionId,
    pub kind: DuelKind,
    pub status: DuelStatus,
    pub players: [PlayerId; 2],
    /// Only set while the duel is active.
    pub turn_owner: Option<PlayerId>,
    /// Side A first. Empty until the duel is activated.
    pub fighters: Vec<FighterView>,
    pub last_action_log: Option<String>,
    pub winner: Option<PlayerId>,
}

impl SessionView {
    pub(super) fn from_session(session: &DuelSession) -> Self {
        let fighters = [super::Side::A, super::Side::B]
            .into_iter()
            .filter_map(|side| session.fighter(side).map(FighterView::from))
            .collect();
        Self {
            id: session.id(),
            kind: session.kind(),
            status: session.status(),
            players: session.players(),
            turn_owner: (session.status() == DuelStatus::Active).then(|| session.turn_owner()),
            fighters,
            last_action_log: session.last_action_log().map(str::to_owned),
            winner: session.winner(),
        }
    }

    pub fn fighter_for(&self, player: PlayerId) -> Option<&FighterView> {
        self.fighters.iter().find(|f| f.player == player)
    }
}
