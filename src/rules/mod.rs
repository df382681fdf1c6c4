//! The move-legality engine.

pub mod legality;

pub use legality::{has_any_legal_move, is_legal_move, legal_moves_from, movable_pieces, MoveList};
