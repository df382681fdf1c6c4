//! The 8×8 board and the four starting formations.

use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use crate::core::Player;

/// Board side length.
pub const BOARD_SIZE: u8 = 8;

/// A square on the board, `(row, col)` with both in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    /// Row, 0 at the top edge (West/North side), 7 at the bottom.
    pub row: u8,
    /// Column, 0 at the left edge, 7 at the right.
    pub col: u8,
}

impl Pos {
    /// Create a position, rejecting out-of-board coordinates.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Pos { row, col }))
    }

    /// Row and column delta from `self` to `to`.
    #[must_use]
    pub const fn delta_to(self, to: Pos) -> (i8, i8) {
        (
            to.row as i8 - self.row as i8,
            to.col as i8 - self.col as i8,
        )
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 8×8 grid; each cell holds at most one piece.
///
/// Fixed-size, no dynamic allocation. `Board` values are cheap to copy and
/// the state machine replaces them wholesale on every accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// The full four-army starting formation.
    ///
    /// Each army holds one corner: back rank Ratha, Ashva, Gaja, Raja from
    /// the corner inward, with four Padati in front of them.
    #[must_use]
    pub fn initial() -> Self {
        use PieceKind::{Ashva, Gaja, Padati, Raja, Ratha};

        let mut b = Self::empty();
        let back = [Ratha, Ashva, Gaja, Raja];

        // South: bottom-left, back rank on row 7, footmen on row 6.
        for (i, &kind) in back.iter().enumerate() {
            b.cells[7][i] = Some(Piece::new(kind, Player::South));
        }
        for col in 0..4 {
            b.cells[6][col] = Some(Piece::new(Padati, Player::South));
        }

        // West: top-left, back rank down column 0, footmen on column 1.
        for (i, &kind) in back.iter().enumerate() {
            b.cells[i][0] = Some(Piece::new(kind, Player::West));
        }
        for row in 0..4 {
            b.cells[row][1] = Some(Piece::new(Padati, Player::West));
        }

        // North: top-right, back rank on row 0, footmen on row 1.
        for (i, &kind) in back.iter().enumerate() {
            b.cells[0][7 - i] = Some(Piece::new(kind, Player::North));
        }
        for col in 4..8 {
            b.cells[1][col] = Some(Piece::new(Padati, Player::North));
        }

        // East: bottom-right, back rank up column 7, footmen on column 6.
        for (i, &kind) in back.iter().enumerate() {
            b.cells[7 - i][7] = Some(Piece::new(kind, Player::East));
        }
        for row in 4..8 {
            b.cells[row][6] = Some(Piece::new(Padati, Player::East));
        }

        b
    }

    /// The starting formation filtered down to the given players.
    #[must_use]
    pub fn initial_for(players: &[Player]) -> Self {
        let mut b = Self::initial();
        for pos in Pos::all() {
            if let Some(piece) = b.get(pos) {
                if !players.contains(&piece.owner) {
                    b.set(pos, None);
                }
            }
        }
        b
    }

    /// The piece at `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Option<Piece> {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Replace the cell at `pos`.
    pub fn set(&mut self, pos: Pos, cell: Option<Piece>) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// All occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        Pos::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    /// All squares occupied by `player`, in row-major order.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.owner == player)
    }

    /// Remove every piece belonging to `player`.
    pub fn remove_army(&mut self, player: Player) {
        for pos in Pos::all() {
            if self.get(pos).is_some_and(|piece| piece.owner == player) {
                self.set(pos, None);
            }
        }
    }

    /// The square holding `player`'s Raja, if it is still on the board.
    #[must_use]
    pub fn raja_of(&self, player: Player) -> Option<Pos> {
        self.pieces_of(player)
            .find(|(_, piece)| piece.kind == PieceKind::Raja)
            .map(|(pos, _)| pos)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
