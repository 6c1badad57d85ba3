//! Repository layer for per-player progress.
//!
//! Repositories hold data that CHANGES between duels:
//! - Currency and trophy totals (rewards, upgrades)
//! - Owned characters, their levels and loadouts
//! - The active character selection
//!
//! The static character catalog is served by oracles, not repositories, and
//! live duel state never leaves the session registry.

mod error;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryProgressRepo;
pub use traits::ProgressRepository;
pub use types::{OwnedCharacter, PlayerProgress};
