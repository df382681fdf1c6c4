//! Piece kinds, point values, and dice gating.

use serde::{Deserialize, Serialize};

use crate::core::{DiceRoll, Player};

/// The five piece kinds of chaturaji.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// King: one square in any direction. Capturing it eliminates the army.
    Raja,
    /// Elephant: jumps exactly two squares orthogonally.
    Gaja,
    /// Horse: standard knight jump.
    Ashva,
    /// Boat (Nauka): jumps exactly two squares diagonally.
    Ratha,
    /// Footman: one square forward, captures one square diagonally forward.
    Padati,
}

impl PieceKind {
    /// Karma awarded for capturing a piece of this kind.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            PieceKind::Padati => 1,
            PieceKind::Ratha => 2,
            PieceKind::Ashva => 3,
            PieceKind::Gaja => 4,
            PieceKind::Raja => 5,
        }
    }

    /// Whether a pasha roll authorizes this kind to move.
    ///
    /// 5 moves the Padati and the Raja, 4 the Gaja, 3 the Ashva, 2 the
    /// Ratha.
    #[must_use]
    pub const fn moves_on(self, roll: DiceRoll) -> bool {
        match roll.value() {
            5 => matches!(self, PieceKind::Padati | PieceKind::Raja),
            4 => matches!(self, PieceKind::Gaja),
            3 => matches!(self, PieceKind::Ashva),
            2 => matches!(self, PieceKind::Ratha),
            _ => false,
        }
    }

    /// Display name used in the event log.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Raja => "Raja",
            PieceKind::Gaja => "Gaja",
            PieceKind::Ashva => "Ashva",
            PieceKind::Ratha => "Nauka",
            PieceKind::Padati => "Padati",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece on the board: a kind and its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// What the piece is.
    pub kind: PieceKind,
    /// Which kingdom it belongs to.
    pub owner: Player,
}

impl Piece {
    /// Create a piece.
    #[must_use]
    pub const fn new(kind: PieceKind, owner: Player) -> Self {
        Self { kind, owner }
    }
}
