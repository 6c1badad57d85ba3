//! Plain-text rendering of duel state.
use duel_core::{Character, FighterView, SessionView};

pub fn board(view: &SessionView) -> String {
    let mut out = String::new();
    for fighter in &view.fighters {
        out.push_str(&fighter_line(fighter));
        out.push('\n');
    }
    if let Some(owner) = view.turn_owner {
        out.push_str(&format!("  turn: {owner}\n"));
    }
    out
}

fn fighter_line(fighter: &FighterView) -> String {
    let mut line = format!(
        "  {} {} (lv {})  HP {}/{}  EN {}",
        fighter.player,
        fighter.character_name,
        fighter.level,
        fighter.hp.max(0),
        fighter.max_hp,
        fighter.energy
    );
    if fighter.last_hp_delta != 0 {
        line.push_str(&format!("  [{:+} HP]", fighter.last_hp_delta));
    }
    if fighter.attack_percent != 0 || fighter.defense_percent != 0 {
        line.push_str(&format!(
            "  atk {:+}% def {:+}%",
            fighter.attack_percent, fighter.defense_percent
        ));
    }
    line
}

pub fn catalog_entry(character: &Character) -> String {
    let base = &character.base;
    let mut out = format!(
        "{} ({}) [{}] max lv {}\n  HP {}  DMG {}-{}  DEF {}  CRIT {}\n",
        character.name,
        character.id,
        character.rarity,
        character.max_level(),
        base.hp,
        base.damage.min,
        base.damage.max,
        base.defense,
        base.crit
    );
    for (index, ability) in character.abilities.iter().enumerate() {
        out.push_str(&format!(
            "  #{index:<2} {:<28} w{} cost {} +{}  {}\n",
            ability.name,
            ability.weight,
            ability.energy_cost,
            ability.energy_restore,
            ability.effect.label()
        ));
    }
    out
}
