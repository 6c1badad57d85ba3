//! Data-driven content definitions and loaders.
//!
//! This crate ships the static duel content and the loaders that read it:
//! - Character catalog (data-driven via RON)
//! - Duel rules and reward ranges (data-driven via TOML)
//!
//! Content is consumed by the runtime's catalog oracle and is copied into a
//! duel only as a snapshot at activation time.
//!
//! All loaders use duel-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CharacterLoader, ConfigLoader, ContentFactory, RulesConfig};

/// Character catalog compiled into the crate.
pub const BUNDLED_CHARACTERS: &str = include_str!("../data/characters.ron");

/// Default rules file compiled into the crate.
pub const BUNDLED_RULES: &str = include_str!("../data/engine.toml");
