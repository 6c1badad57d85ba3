//! Duel session state machine.
//!
//! ```text
//! pending ──activate──▶ active ──act (target HP ≤ 0)──▶ finished
//!    │                    │  ▲
//!    │                    └──┘ act (turn passes)
//!    └──reject / forfeit──────────────forfeit────────▶ finished
//! ```
//!
//! A session never leaves `finished`. Locking and indexing by player are the
//! runtime's job; everything here runs under the caller's exclusive borrow.

mod errors;
mod fighter;
mod session;
mod view;

pub use errors::{ActError, SessionError};
pub use fighter::{Fighter, FighterSetup};
pub use session::{ActionReport, DuelSession};
pub use view::{FighterView, SessionView, SlotView};

/// Ranked duels move trophies and souls; friendly duels change nothing.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum DuelKind {
    Ranked,
    Friendly,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum DuelStatus {
    Pending,
    Active,
    Finished,
}

/// Seat in a session. Side A is the ranked initiator or the friendly
/// challenger and always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}
