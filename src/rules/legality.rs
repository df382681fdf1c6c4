//! Pure move-legality decisions over a board snapshot.
//!
//! Everything here is side-effect free and deterministic: the same board,
//! mover, dice, and alliances always produce the same answer. The state
//! machine consults these functions; the UI uses them for highlighting.
//!
//! Checks run in a fixed order and short-circuit on the first failure:
//! ownership at the origin, friendly/ally occupancy at the destination,
//! dice gating, then the geometry of the piece kind. The Ratha and Gaja
//! are jumps: squares between origin and destination are never examined.

use smallvec::SmallVec;

use crate::board::{Board, PieceKind, Pos};
use crate::core::{AllianceMap, DiceRoll, Player};

/// Destination list for a single piece.
///
/// No piece on an 8×8 board has more than eight geometric moves, so this
/// stays on the stack.
pub type MoveList = SmallVec<[Pos; 8]>;

/// Decide whether moving `from` → `to` is legal for `mover`.
///
/// A dice value of `None` skips the gating check; the UI uses this for
/// "what could move" previews before a roll.
#[must_use]
pub fn is_legal_move(
    board: &Board,
    from: Pos,
    to: Pos,
    mover: Player,
    dice: Option<DiceRoll>,
    alliances: &AllianceMap,
) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    if piece.owner != mover {
        return false;
    }

    let target = board.get(to);
    if let Some(target) = target {
        if target.owner == mover || alliances.are_allied(mover, target.owner) {
            return false;
        }
    }

    if let Some(roll) = dice {
        if !piece.kind.moves_on(roll) {
            return false;
        }
    }

    let (dr, dc) = from.delta_to(to);
    let (abs_dr, abs_dc) = (dr.abs(), dc.abs());

    match piece.kind {
        PieceKind::Raja => abs_dr <= 1 && abs_dc <= 1 && (abs_dr != 0 || abs_dc != 0),
        // Jump: the intermediate diagonal square is irrelevant.
        PieceKind::Ratha => abs_dr == 2 && abs_dc == 2,
        // Jump: two squares along exactly one orthogonal axis.
        PieceKind::Gaja => (abs_dr == 2 && abs_dc == 0) || (abs_dr == 0 && abs_dc == 2),
        PieceKind::Ashva => (abs_dr == 2 && abs_dc == 1) || (abs_dr == 1 && abs_dc == 2),
        PieceKind::Padati => {
            let (fr, fc) = mover.forward();

            // Plain forward step, empty destination only.
            if dr == fr && dc == fc && target.is_none() {
                return true;
            }

            // Forward-diagonal step, capture only.
            if abs_dr == 1 && abs_dc == 1 && target.is_some() {
                return match mover {
                    Player::South => dr == -1,
                    Player::West => dc == 1,
                    Player::North => dr == 1,
                    Player::East => dc == -1,
                };
            }

            false
        }
    }
}

/// All legal destinations for the piece at `pos`, in row-major order.
///
/// Empty if `pos` does not hold a piece of `mover`.
#[must_use]
pub fn legal_moves_from(
    board: &Board,
    pos: Pos,
    mover: Player,
    dice: Option<DiceRoll>,
    alliances: &AllianceMap,
) -> MoveList {
    Pos::all()
        .filter(|&to| is_legal_move(board, pos, to, mover, dice, alliances))
        .collect()
}

/// Whether `mover` has at least one legal move anywhere under `dice`.
///
/// False means the roll forces a pass: the mover has no movable piece of
/// the authorized kind, or every such piece is blocked.
#[must_use]
pub fn has_any_legal_move(
    board: &Board,
    mover: Player,
    dice: Option<DiceRoll>,
    alliances: &AllianceMap,
) -> bool {
    board
        .pieces_of(mover)
        .any(|(pos, _)| !legal_moves_from(board, pos, mover, dice, alliances).is_empty())
}

/// Origin squares of `mover`'s pieces that have at least one legal move.
///
/// The per-frame highlight query for the UI.
#[must_use]
pub fn movable_pieces(
    board: &Board,
    mover: Player,
    dice: Option<DiceRoll>,
    alliances: &AllianceMap,
) -> Vec<Pos> {
    board
        .pieces_of(mover)
        .filter(|&(pos, _)| !legal_moves_from(board, pos, mover, dice, alliances).is_empty())
        .map(|(pos, _)| pos)
        .collect()
}
