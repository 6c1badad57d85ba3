//! Topic-based event bus for engine events.
//!
//! Every state transition the engine performs is published here so the
//! chat layer can edit messages or notify the other participant without
//! polling. Publishing is best-effort: a bus with no subscribers drops events.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{DuelEvent, MatchmakingEvent};
