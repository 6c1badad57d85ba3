//! Character stats at a given level and the per-duel energy meter.
//!
//! Stats are computed once when a duel starts and copied into the session.
//! Nothing here is stored in player progress: only the level is.

mod energy;
mod scaling;

pub use energy::EnergyMeter;
pub use scaling::{ScaledStats, scale_stat};
