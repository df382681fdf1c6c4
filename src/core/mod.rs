//! Core types: players, per-player maps, alliances, dice RNG.
//!
//! These are the game-agnostic building blocks the legality engine and the
//! state machine are written against.

pub mod alliance;
pub mod dice;
pub mod player;

pub use alliance::AllianceMap;
pub use dice::{DiceRng, DiceRngState, DiceRoll};
pub use player::{Player, PlayerMap};
