//! The pure state transition function.
//!
//! `reduce` takes the current state and an intent and returns the successor
//! state. Invalid intents are rejected as no-ops: the returned state equals
//! the input. The only randomness is the pasha roll, drawn from the caller's
//! [`DiceRng`].

use crate::board::{Piece, PieceKind, Pos};
use crate::core::{DiceRng, Player, PlayerMap};
use crate::rules;

use super::intent::Intent;
use super::state::{GamePhase, GameState};

/// Karma bonus granted to the liege on top of the submitter's score.
pub const SUBMISSION_BONUS: u32 = 5;

/// Apply `intent` to `state`, producing the successor state.
#[must_use]
pub fn reduce(state: &GameState, intent: &Intent, rng: &mut DiceRng) -> GameState {
    match intent {
        Intent::EnterLobby => enter_lobby(state),
        Intent::StartGame { players, names } => start_game(state, players, names),
        Intent::Restart { players } => restart(state, players),
        Intent::RollDice => roll_dice(state, rng),
        Intent::SelectOrMove(pos) => select_or_move(state, *pos),
        Intent::Pass => pass(state),
        Intent::ProposeAlliance(target) => propose_alliance(state, *target),
        Intent::SubmitSovereignty(target) => submit_sovereignty(state, *target),
    }
}

/// Next player in canonical cyclic order (South, West, North, East),
/// skipping anyone not in `active`.
///
/// The 8-step bound is a safety net against a malformed active set; with
/// at least one active player the scan never needs more than 4 steps.
#[must_use]
pub fn next_turn(current: Player, active: &[Player]) -> Player {
    let mut idx = current.index();
    for _ in 0..8 {
        idx = (idx + 1) % Player::ALL.len();
        let candidate = Player::ALL[idx];
        if active.contains(&candidate) {
            return candidate;
        }
    }
    debug_assert!(false, "no active player within the rotation bound");
    active.first().copied().unwrap_or(current)
}

fn enter_lobby(state: &GameState) -> GameState {
    match state.phase {
        GamePhase::LanguagePicker | GamePhase::GameOver => {
            let mut next = state.clone();
            next.phase = GamePhase::Lobby;
            next
        }
        _ => state.clone(),
    }
}

/// At least two distinct kingdoms, each listed once.
fn valid_selection(players: &[Player]) -> bool {
    let mut seen = [false; 4];
    for &p in players {
        if seen[p.index()] {
            return false;
        }
        seen[p.index()] = true;
    }
    players.len() >= 2
}

fn start_game(state: &GameState, players: &[Player], names: &PlayerMap<String>) -> GameState {
    if state.phase != GamePhase::Lobby || !valid_selection(players) {
        return state.clone();
    }

    let mut next = fresh_war(state, players);
    next.kingdom_names = names.clone();
    next.log
        .push_front("The Great War of Kingdoms has been declared.".to_string());
    next
}

fn restart(state: &GameState, players: &[Player]) -> GameState {
    if state.phase != GamePhase::Playing || !valid_selection(players) {
        return state.clone();
    }

    let mut next = fresh_war(state, players);
    next.log
        .push_front("The battlefield has been cleared.".to_string());
    next
}

/// Common reset for a new war: filtered board, zeroed scores, no pacts.
fn fresh_war(state: &GameState, players: &[Player]) -> GameState {
    let mut next = state.clone();
    next.board = crate::board::Board::initial_for(players);
    next.phase = GamePhase::Playing;
    next.active_players = players.to_vec();
    next.turn = players[0];
    next.initial_player_count = players.len();
    next.selected = None;
    next.log.clear();
    next.winners.clear();
    next.dice = None;
    next.alliances = crate::core::AllianceMap::new();
    next.scores = PlayerMap::with_value(0);
    next
}

fn roll_dice(state: &GameState, rng: &mut DiceRng) -> GameState {
    if state.phase != GamePhase::Playing || state.dice.is_some() || !state.winners.is_empty() {
        return state.clone();
    }

    let mut next = state.clone();
    next.dice = Some(rng.roll());
    next
}

fn select_or_move(state: &GameState, pos: Pos) -> GameState {
    if state.phase != GamePhase::Playing {
        return state.clone();
    }

    if let Some(from) = state.selected {
        if rules::is_legal_move(&state.board, from, pos, state.turn, state.dice, &state.alliances)
        {
            if let Some(piece) = state.board.get(from) {
                return execute_move(state, from, pos, piece);
            }
        }
    }

    // No move happened: select an own piece (only with a pending roll),
    // anything else deselects.
    let mut next = state.clone();
    next.selected = match state.board.get(pos) {
        Some(piece) if piece.owner == state.turn && state.dice.is_some() => Some(pos),
        _ => None,
    };
    next
}

fn execute_move(state: &GameState, from: Pos, to: Pos, piece: Piece) -> GameState {
    let mut next = state.clone();
    let mover = state.turn;
    let captured = next.board.get(to);

    next.board.set(to, Some(piece));
    next.board.set(from, None);

    next.log.push_front(format!(
        "{}: {} moved.",
        state.name_of(mover),
        piece.kind.name()
    ));

    if let Some(captured) = captured {
        next.scores[mover] += captured.kind.value();

        if captured.kind == PieceKind::Raja {
            eliminate(&mut next, captured.owner);
            next.log.push_front(format!(
                "KING OF {} CAPTURED!",
                state.name_of(captured.owner).to_uppercase()
            ));
        }
    }

    conclude_turn(&mut next, mover);
    next
}

/// Remove a player from the war: active set, board, and any pact, all in
/// the same transition.
fn eliminate(next: &mut GameState, player: Player) {
    next.active_players.retain(|&p| p != player);
    next.board.remove_army(player);
    next.alliances.dissolve(player);
}

/// Winner detection, turn advance, and per-turn cleanup shared by the
/// move and submission paths.
fn conclude_turn(next: &mut GameState, mover: Player) {
    if next.active_players.len() == 1 {
        next.winners = next.active_players.clone();
        next.phase = GamePhase::GameOver;
    } else {
        next.winners.clear();
    }
    next.turn = next_turn(mover, &next.active_players);
    next.dice = None;
    next.selected = None;
}

fn pass(state: &GameState) -> GameState {
    if state.phase != GamePhase::Playing {
        return state.clone();
    }

    let mut next = state.clone();
    next.log
        .push_front(format!("{} passed their turn.", state.name_of(state.turn)));
    next.turn = next_turn(state.turn, &next.active_players);
    next.dice = None;
    next.selected = None;
    next
}

fn propose_alliance(state: &GameState, target: Option<Player>) -> GameState {
    if state.phase != GamePhase::Playing {
        return state.clone();
    }

    let mover = state.turn;
    let mut next = state.clone();

    match target {
        Some(target) => {
            if target == mover || !state.is_active(target) {
                return state.clone();
            }
            next.alliances.seal(mover, target);
            next.log.push_front(format!(
                "Pact sealed: {} & {}.",
                state.name_of(mover),
                state.name_of(target)
            ));
        }
        None => {
            next.alliances.dissolve(mover);
            next.log
                .push_front(format!("Alliance with {} dissolved.", state.name_of(mover)));
        }
    }

    next
}

fn submit_sovereignty(state: &GameState, target: Player) -> GameState {
    if state.phase != GamePhase::Playing || target == state.turn || !state.is_active(target) {
        return state.clone();
    }

    let mover = state.turn;
    let mut next = state.clone();

    eliminate(&mut next, mover);
    next.scores[target] += state.scores[mover] + SUBMISSION_BONUS;
    next.log.push_front(format!(
        "{} has submitted to {}.",
        state.name_of(mover),
        state.name_of(target)
    ));

    conclude_turn(&mut next, mover);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_turn_full_rotation() {
        let active = Player::ALL.to_vec();
        assert_eq!(next_turn(Player::South, &active), Player::West);
        assert_eq!(next_turn(Player::West, &active), Player::North);
        assert_eq!(next_turn(Player::North, &active), Player::East);
        assert_eq!(next_turn(Player::East, &active), Player::South);
    }

    #[test]
    fn test_next_turn_skips_inactive() {
        let active = vec![Player::South, Player::North];
        assert_eq!(next_turn(Player::South, &active), Player::North);
        assert_eq!(next_turn(Player::North, &active), Player::South);
    }

    #[test]
    fn test_next_turn_sole_survivor() {
        let active = vec![Player::South];
        assert_eq!(next_turn(Player::South, &active), Player::South);
        assert_eq!(next_turn(Player::East, &active), Player::South);
    }

    #[test]
    fn test_valid_selection() {
        assert!(valid_selection(&[Player::South, Player::East]));
        assert!(valid_selection(&Player::ALL));
        assert!(!valid_selection(&[Player::South]));
        assert!(!valid_selection(&[]));
        assert!(!valid_selection(&[Player::South, Player::South]));
    }
}
