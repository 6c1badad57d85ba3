//! Public runtime API surface.
//!
//! Errors and result types handed back to whatever layer drives the engine
//! (a chat bot, the demo CLI, tests).

pub mod errors;
pub mod types;

pub use errors::{RepositoryError, Result, RuntimeError};
pub use types::{ActionResult, SlotAssignment, UpgradeOutcome};
