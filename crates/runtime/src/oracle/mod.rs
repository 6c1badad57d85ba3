//! Runtime wrappers around static duel content.
//!
//! The catalog is immutable once the engine is built and shared behind an
//! `Arc`; per-player state lives in repositories and live duel state in the
//! session registry.
mod characters;

pub use characters::CharacterOracleImpl;
