//! Checks the shipped data files and the directory-based factory.

use std::io::Write;
use std::path::PathBuf;

use duel_content::{CharacterLoader, ConfigLoader, ContentFactory};
use duel_core::{AbilityEffect, Rarity, RewardTable};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn bundled_catalog_matches_data_dir() {
    let bundled = CharacterLoader::bundled().expect("bundled catalog parses");
    let from_disk = ContentFactory::new(data_dir())
        .load_characters()
        .expect("data dir catalog parses");
    assert_eq!(bundled, from_disk);
}

#[test]
fn bundled_catalog_contents() {
    let catalog = CharacterLoader::bundled().unwrap();
    let ids: Vec<&str> = catalog.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["Yuichi_Katagiri", "Ayanokoji_Kiyotaka", "Saber"]);

    let yuichi = &catalog[0];
    assert_eq!(yuichi.rarity, Rarity::Human);
    assert_eq!(yuichi.abilities.len(), 8);
    assert_eq!(yuichi.abilities[1].effect, AbilityEffect::DefenseModifier { percent: -15 });

    let ayanokoji = &catalog[1];
    assert_eq!(ayanokoji.abilities.len(), 10);
    assert_eq!(ayanokoji.base.hp, 1000);

    let saber = &catalog[2];
    assert_eq!(saber.rarity.max_level(), 5);
    assert_eq!(saber.abilities[0].energy_restore, 3);
    assert_eq!(saber.abilities[0].asset.as_deref(), Some("gifs/saber/attack.gif"));
}

#[test]
fn every_character_has_a_free_ability() {
    for character in CharacterLoader::bundled().unwrap() {
        assert!(
            character.abilities.iter().any(|a| a.is_free()),
            "{} has no zero-cost ability",
            character.id
        );
    }
}

#[test]
fn bundled_rules_are_the_defaults() {
    let rules = ConfigLoader::bundled().unwrap();
    assert!(rules.duel.scale_ranked_damage);
    assert!(!rules.duel.scale_friendly_damage);
    assert_eq!(rules.rewards, RewardTable::default());
}

#[test]
fn custom_rules_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut file = std::fs::File::create(dir.path().join("engine.toml")).unwrap();
    writeln!(
        file,
        "[duel]\nscale_friendly_damage = true\n\n[rewards]\nwinner_souls = {{ min = 1, max = 1 }}"
    )
    .unwrap();

    let rules = ContentFactory::new(dir.path()).load_rules().unwrap();
    assert!(rules.duel.scale_friendly_damage);
    assert_eq!(rules.rewards.winner_souls.min, 1);
    assert_eq!(rules.rewards.winner_trophies, RewardTable::DEFAULT_WINNER_TROPHIES);
}
