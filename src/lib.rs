//! # chaturaji
//!
//! Rules engine and turn state machine for chaturaji, the four-player
//! dice variant of chaturanga. Four kingdoms hold the corners of an 8×8
//! board; the pasha roll dictates which piece kind may move, captured
//! Rajas eliminate whole armies, kingdoms can seal pairwise pacts, and a
//! king may yield sovereignty (and karma) to another.
//!
//! The crate is pure logic over a board snapshot plus auxiliary state.
//! Rendering, localization, lobby UI, and persistence are the caller's
//! concern; the engine exposes a read-only [`game::GameState`] snapshot
//! and accepts [`game::Intent`]s.
//!
//! ## Design
//!
//! - **Pure reducer**: [`game::reduce`] maps `(state, intent)` to the
//!   successor state. Illegal intents are rejected no-ops, never errors.
//! - **Pure legality engine**: [`rules`] answers move-legality and
//!   enumeration queries with no side effects.
//! - **Deterministic dice**: the only randomness is the pasha, drawn from
//!   a seedable [`core::DiceRng`] so tests replay exact roll sequences.
//! - **Wholesale state swap**: every accepted intent replaces the state
//!   as a whole value; the event log is a persistent `im::Vector` so the
//!   per-intent clone stays cheap.
//!
//! ## Modules
//!
//! - `core`: players, per-player total maps, alliances, dice RNG
//! - `board`: piece kinds, positions, the 8×8 grid and formations
//! - `rules`: the move-legality engine
//! - `game`: game state, intents, reducer, session wrapper

pub mod board;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::board::{Board, Piece, PieceKind, Pos, BOARD_SIZE};
pub use crate::core::{AllianceMap, DiceRng, DiceRngState, DiceRoll, Player, PlayerMap};
pub use crate::game::{Game, GamePhase, GameState, Intent, SUBMISSION_BONUS};
pub use crate::rules::{has_any_legal_move, is_legal_move, legal_moves_from, movable_pieces};
