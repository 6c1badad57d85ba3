use super::{ActError, DuelKind, DuelStatus, Fighter, FighterSetup, SessionError, SessionView, Side};
use crate::combat::{EffectContext, EffectOutcome, resolve_effect};
use crate::config::DuelConfig;
use crate::ids::{PlayerId, SessionId};

/// Result of one resolved `act`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionReport {
    pub actor: PlayerId,
    pub side: Side,
    pub slot: u8,
    pub ability: String,
    pub energy_cost: u8,
    pub outcome: EffectOutcome,
    pub log: String,
    /// Set when this action ended the duel.
    pub winner: Option<PlayerId>,
}

impl ActionReport {
    pub fn ended(&self) -> bool {
        self.winner.is_some()
    }
}

/// Shared state of a two-player duel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelSession {
    id: SessionId,
    kind: DuelKind,
    status: DuelStatus,
    players: [PlayerId; 2],
    /// Present from activation on.
    fighters: Option<[Fighter; 2]>,
    turn: Side,
    last_action_log: Option<String>,
    winner: Option<PlayerId>,
}

impl DuelSession {
    /// New pending session. `a` moves first once activated.
    pub fn new(id: SessionId, kind: DuelKind, a: PlayerId, b: PlayerId) -> Self {
        Self {
            id,
            kind,
            status: DuelStatus::Pending,
            players: [a, b],
            fighters: None,
            turn: Side::A,
            last_action_log: None,
            winner: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn kind(&self) -> DuelKind {
        self.kind
    }

    pub fn status(&self) -> DuelStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == DuelStatus::Finished
    }

    pub fn players(&self) -> [PlayerId; 2] {
        self.players
    }

    pub fn player(&self, side: Side) -> PlayerId {
        self.players[side.index()]
    }

    pub fn side_of(&self, player: PlayerId) -> Option<Side> {
        if self.players[0] == player {
            Some(Side::A)
        } else if self.players[1] == player {
            Some(Side::B)
        } else {
            None
        }
    }

    pub fn opponent_of(&self, player: PlayerId) -> Option<PlayerId> {
        self.side_of(player).map(|side| self.player(side.opponent()))
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn turn_owner(&self) -> PlayerId {
        self.player(self.turn)
    }

    pub fn fighter(&self, side: Side) -> Option<&Fighter> {
        self.fighters.as_ref().map(|f| &f[side.index()])
    }

    pub fn last_action_log(&self) -> Option<&str> {
        self.last_action_log.as_deref()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn view(&self) -> SessionView {
        SessionView::from_session(self)
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// `pending → active`. Snapshots both sides and hands the turn to side A.
    pub fn activate(
        &mut self,
        a: FighterSetup<'_>,
        b: FighterSetup<'_>,
    ) -> Result<(), SessionError> {
        if self.status != DuelStatus::Pending {
            return Err(SessionError::DuelNotPending {
                status: self.status,
            });
        }
        let fighter_a = Fighter::prepare(self.players[0], a)?;
        let fighter_b = Fighter::prepare(self.players[1], b)?;

        self.fighters = Some([fighter_a, fighter_b]);
        self.status = DuelStatus::Active;
        self.turn = Side::A;
        Ok(())
    }

    /// `pending → finished` without a winner.
    pub fn reject(&mut self) -> Result<(), SessionError> {
        if self.status != DuelStatus::Pending {
            return Err(SessionError::DuelNotPending {
                status: self.status,
            });
        }
        self.status = DuelStatus::Finished;
        Ok(())
    }

    /// Leave the duel. An active duel is won by the remaining participant;
    /// a pending one simply ends.
    pub fn forfeit(&mut self, player: PlayerId) -> Result<Option<PlayerId>, SessionError> {
        let side = self
            .side_of(player)
            .ok_or(SessionError::NotParticipant { player })?;
        match self.status {
            DuelStatus::Finished => Err(SessionError::AlreadyFinished),
            DuelStatus::Pending => {
                self.status = DuelStatus::Finished;
                Ok(None)
            }
            DuelStatus::Active => {
                let winner = self.player(side.opponent());
                self.status = DuelStatus::Finished;
                self.winner = Some(winner);
                self.last_action_log = Some(format!("{player} forfeited"));
                Ok(Some(winner))
            }
        }
    }

    /// Use the ability in `slot` on behalf of `player`.
    ///
    /// All checks run before the first write, so a rejected action leaves
    /// HP, energy, buffs and the turn untouched.
    pub fn act(
        &mut self,
        player: PlayerId,
        slot: u8,
        config: &DuelConfig,
    ) -> Result<ActionReport, ActError> {
        let status = self.status;
        let fighters = match (status, self.fighters.as_mut()) {
            (DuelStatus::Active, Some(fighters)) => fighters,
            _ => return Err(ActError::DuelNotActive { status }),
        };

        let side = self.turn;
        let turn_owner = self.players[side.index()];
        if turn_owner != player {
            return Err(ActError::NotYourTurn { player, turn_owner });
        }

        let (caster_idx, target_idx) = (side.index(), side.opponent().index());
        let ability = fighters[caster_idx]
            .abilities
            .get(&slot)
            .cloned()
            .ok_or(ActError::AbilityNotFound { slot })?;
        let available = fighters[caster_idx].energy.current();
        if !fighters[caster_idx].energy.can_afford(ability.energy_cost) {
            return Err(ActError::InsufficientEnergy {
                required: ability.energy_cost,
                available,
            });
        }

        // ---- validated; mutate from here on ----
        for fighter in fighters.iter_mut() {
            fighter.clear_deltas();
        }

        let caster = &mut fighters[caster_idx];
        caster.last_energy_delta = caster
            .energy
            .spend_then_restore(ability.energy_cost, ability.energy_restore);

        let ctx = EffectContext {
            caster_level: fighters[caster_idx].stats.level,
            caster_hp: fighters[caster_idx].hp,
            caster_max_hp: fighters[caster_idx].stats.max_hp,
            caster_buffs: fighters[caster_idx].buffs,
            target_defense: fighters[target_idx].stats.defense,
            target_buffs: fighters[target_idx].buffs,
            scale_damage: config.scales_damage(self.kind),
        };
        let outcome = resolve_effect(ability.effect, &ctx);

        match outcome {
            EffectOutcome::Damage { amount } => {
                let target = &mut fighters[target_idx];
                target.hp -= i64::from(amount);
                target.last_hp_delta = -i64::from(amount);
            }
            EffectOutcome::Heal { hp, healed } => {
                let caster = &mut fighters[caster_idx];
                caster.hp = hp;
                caster.last_hp_delta = i64::from(healed);
            }
            EffectOutcome::DefenseModified { percent } => {
                fighters[target_idx].buffs.add_defense(percent);
            }
            EffectOutcome::AttackModified { percent } => {
                fighters[caster_idx].buffs.add_attack(percent);
            }
        }

        let log = describe_action(player, &ability.name, ability.energy_cost, &outcome);
        let defeated = fighters[target_idx].is_defeated();

        self.last_action_log = Some(log.clone());
        let winner = if defeated {
            self.status = DuelStatus::Finished;
            self.winner = Some(player);
            Some(player)
        } else {
            self.turn = side.opponent();
            None
        };

        Ok(ActionReport {
            actor: player,
            side,
            slot,
            ability: ability.name,
            energy_cost: ability.energy_cost,
            outcome,
            log,
            winner,
        })
    }
}

/// One-line summary shown above the duel board.
fn describe_action(player: PlayerId, ability: &str, cost: u8, outcome: &EffectOutcome) -> String {
    let head = format!("{player} used {ability} -{cost} energy");
    match outcome {
        EffectOutcome::Damage { amount } => format!("{head} and dealt {amount} damage"),
        EffectOutcome::Heal { healed, .. } => format!("{head} and restored {healed} HP"),
        EffectOutcome::DefenseModified { .. } | EffectOutcome::AttackModified { .. } => head,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Ability, AbilityEffect, BaseStats, Character, DamageRange, Rarity};
    use crate::loadout::Loadout;

    const A: PlayerId = PlayerId::new(1);
    const B: PlayerId = PlayerId::new(2);

    fn character(defense: u32) -> Character {
        Character {
            id: "duelist".into(),
            name: "Duelist".into(),
            title: String::new(),
            rarity: Rarity::Universe,
            base: BaseStats {
                hp: 300,
                damage: DamageRange { min: 10, max: 20 },
                defense,
                crit: 5,
            },
            abilities: vec![
                Ability::new("Strike", 2, 2, AbilityEffect::Damage { amount: 120 }),
                Ability::new("Rest", 1, 0, AbilityEffect::Heal { amount: 100 })
                    .with_energy_restore(3),
                Ability::new("Expose", 2, 3, AbilityEffect::DefenseModifier { percent: -50 }),
                Ability::new("Focus", 2, 1, AbilityEffect::AttackModifier { percent: 20 }),
                Ability::new("Finisher", 3, 10, AbilityEffect::Damage { amount: 1000 }),
            ],
        }
    }

    fn full_loadout() -> Loadout {
        (1..=5).map(|slot| (slot, usize::from(slot) - 1)).collect()
    }

    fn active(kind: DuelKind, defense: u32) -> DuelSession {
        let c = character(defense);
        let loadout = full_loadout();
        let mut session = DuelSession::new(SessionId(7), kind, A, B);
        session
            .activate(
                FighterSetup::new(&c, 1, &loadout),
                FighterSetup::new(&c, 1, &loadout),
            )
            .unwrap();
        session
    }

    #[test]
    fn activation_snapshots_and_gives_turn_to_a() {
        let session = active(DuelKind::Ranked, 50);
        assert_eq!(session.status(), DuelStatus::Active);
        assert_eq!(session.turn_owner(), A);
        let fighter = session.fighter(Side::B).unwrap();
        assert_eq!(fighter.hp, 300);
        assert_eq!(fighter.energy.current(), DuelConfig::MAX_ENERGY);
        assert_eq!(fighter.abilities.len(), 5);
    }

    #[test]
    fn activating_twice_is_rejected() {
        let c = character(0);
        let loadout = full_loadout();
        let mut session = active(DuelKind::Ranked, 0);
        let err = session
            .activate(
                FighterSetup::new(&c, 1, &loadout),
                FighterSetup::new(&c, 1, &loadout),
            )
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::DuelNotPending {
                status: DuelStatus::Active
            }
        );
    }

    #[test]
    fn strike_against_defense_passes_the_turn() {
        let mut session = active(DuelKind::Friendly, 50);
        let report = session.act(A, 1, &DuelConfig::default()).unwrap();

        assert_eq!(report.outcome, EffectOutcome::Damage { amount: 70 });
        assert!(!report.ended());
        assert_eq!(report.log, "#1 used Strike -2 energy and dealt 70 damage");

        let a = session.fighter(Side::A).unwrap();
        let b = session.fighter(Side::B).unwrap();
        assert_eq!(a.energy.current(), 8);
        assert_eq!(a.last_energy_delta, -2);
        assert_eq!(b.hp, 230);
        assert_eq!(b.last_hp_delta, -70);
        assert_eq!(session.turn_owner(), B);
    }

    #[test]
    fn wrong_player_changes_nothing() {
        let mut session = active(DuelKind::Ranked, 50);
        let before = session.clone();
        let err = session.act(B, 1, &DuelConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ActError::NotYourTurn {
                player: B,
                turn_owner: A
            }
        );
        assert_eq!(session, before);
    }

    #[test]
    fn precondition_order() {
        let config = DuelConfig::default();
        let mut pending = DuelSession::new(SessionId(1), DuelKind::Ranked, A, B);
        assert!(matches!(
            pending.act(A, 1, &config),
            Err(ActError::DuelNotActive { .. })
        ));

        let mut session = active(DuelKind::Ranked, 0);
        // Not the turn owner and an empty slot: the turn check wins.
        assert!(matches!(
            session.act(B, 12, &config),
            Err(ActError::NotYourTurn { .. })
        ));
        assert_eq!(
            session.act(A, 12, &config),
            Err(ActError::AbilityNotFound { slot: 12 })
        );

        session.act(A, 3, &config).unwrap(); // 10 -> 7
        session.act(B, 4, &config).unwrap();
        assert_eq!(
            session.act(A, 5, &config),
            Err(ActError::InsufficientEnergy {
                required: 10,
                available: 7
            })
        );
    }

    #[test]
    fn modifiers_target_the_right_side() {
        let config = DuelConfig::default();
        let mut session = active(DuelKind::Friendly, 100);
        session.act(A, 3, &config).unwrap(); // B's defense -50%
        session.act(B, 4, &config).unwrap(); // B's attack +20%

        let b = session.fighter(Side::B).unwrap();
        assert_eq!(b.buffs.defense_percent, -50);
        assert_eq!(b.buffs.attack_percent, 20);
        let a = session.fighter(Side::A).unwrap();
        assert_eq!(a.buffs, Default::default());

        // 120 vs defense 100 at -50% -> 70
        let report = session.act(A, 1, &config).unwrap();
        assert_eq!(report.outcome, EffectOutcome::Damage { amount: 70 });
        // 120 * 1.2 = 144 vs defense 100 -> 44
        let report = session.act(B, 1, &config).unwrap();
        assert_eq!(report.outcome, EffectOutcome::Damage { amount: 44 });
    }

    #[test]
    fn heal_caps_and_restores_energy() {
        let config = DuelConfig::default();
        let mut session = active(DuelKind::Friendly, 0);
        session.act(A, 1, &config).unwrap(); // B: 300 -> 180, A: 10 -> 8
        let report = session.act(B, 2, &config).unwrap();
        assert_eq!(
            report.outcome,
            EffectOutcome::Heal {
                hp: 280,
                healed: 100
            }
        );
        session.act(A, 2, &config).unwrap(); // A at full HP, energy 8 -> 10
        let a = session.fighter(Side::A).unwrap();
        assert_eq!(a.hp, 300);
        assert_eq!(a.last_hp_delta, 0);
        assert_eq!(a.energy.current(), 10);
        assert_eq!(a.last_energy_delta, 3);
    }

    #[test]
    fn exact_zero_hp_ends_the_duel() {
        let config = DuelConfig::default();
        let mut c = character(0);
        c.base.hp = 240;
        let loadout = full_loadout();
        let mut session = DuelSession::new(SessionId(9), DuelKind::Friendly, A, B);
        session
            .activate(
                FighterSetup::new(&c, 1, &loadout),
                FighterSetup::new(&c, 1, &loadout),
            )
            .unwrap();

        assert!(!session.act(A, 1, &config).unwrap().ended()); // 240 -> 120
        session.act(B, 4, &config).unwrap();
        let report = session.act(A, 1, &config).unwrap(); // 120 -> 0
        assert!(report.ended());
        assert_eq!(session.fighter(Side::B).unwrap().hp, 0);
        assert_eq!(session.winner(), Some(A));
    }

    #[test]
    fn lethal_hit_records_winner() {
        let config = DuelConfig::default();
        let mut session = active(DuelKind::Ranked, 0);
        let report = session.act(A, 5, &config).unwrap();
        assert_eq!(report.winner, Some(A));
        assert_eq!(session.status(), DuelStatus::Finished);
        assert_eq!(session.winner(), Some(A));
        assert!(session.fighter(Side::B).unwrap().hp < 0);
        assert!(matches!(
            session.act(B, 1, &config),
            Err(ActError::DuelNotActive {
                status: DuelStatus::Finished
            })
        ));
    }

    #[test]
    fn ranked_damage_scales_with_level() {
        let c = character(0);
        let loadout = full_loadout();
        let mut session = DuelSession::new(SessionId(3), DuelKind::Ranked, A, B);
        session
            .activate(
                FighterSetup::new(&c, 3, &loadout),
                FighterSetup::new(&c, 1, &loadout),
            )
            .unwrap();
        let report = session.act(A, 1, &DuelConfig::default()).unwrap();
        // 120 -> 133 -> 147
        assert_eq!(report.outcome, EffectOutcome::Damage { amount: 147 });
    }

    #[test]
    fn forfeit_and_reject() {
        let mut session = active(DuelKind::Ranked, 0);
        assert_eq!(session.forfeit(B), Ok(Some(A)));
        assert_eq!(session.winner(), Some(A));
        assert_eq!(session.forfeit(A), Err(SessionError::AlreadyFinished));

        let mut pending = DuelSession::new(SessionId(2), DuelKind::Friendly, A, B);
        assert_eq!(
            pending.forfeit(PlayerId::new(99)),
            Err(SessionError::NotParticipant {
                player: PlayerId::new(99)
            })
        );
        pending.reject().unwrap();
        assert!(pending.is_finished());
        assert_eq!(pending.winner(), None);
        assert!(pending.reject().is_err());
    }
}
