//! Board representation: pieces, positions, the 8×8 grid.

pub mod grid;
pub mod piece;

pub use grid::{Board, Pos, BOARD_SIZE};
pub use piece::{Piece, PieceKind};
