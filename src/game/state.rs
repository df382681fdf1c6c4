//! The authoritative game state.
//!
//! `GameState` is the single snapshot the UI renders from. The reducer
//! replaces it wholesale on every accepted intent; nothing mutates it
//! field-by-field across intents. The event log uses `im::Vector` so that
//! clone-per-intent stays cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos};
use crate::core::{AllianceMap, DiceRoll, Player, PlayerMap};
use crate::rules;

/// Lifecycle phase of a session.
///
/// `LanguagePicker` and `Lobby` are setup screens; the engine passes them
/// through untouched. `GameOver` is terminal: the only exit is the reset
/// back to `Lobby`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// First screen; language choice itself is a UI concern.
    LanguagePicker,
    /// Player selection and kingdom naming.
    Lobby,
    /// The war is on.
    Playing,
    /// Exactly one active player remains.
    GameOver,
}

/// Complete observable game state.
///
/// Scores are monotonically non-decreasing within a game. The log is
/// reverse-chronological: index 0 is the newest entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The 8×8 board.
    pub board: Board,
    /// Whose turn it is.
    pub turn: Player,
    /// Current phase.
    pub phase: GamePhase,
    /// Square selected by the current player, if any.
    pub selected: Option<Pos>,
    /// Event log, newest first.
    pub log: Vector<String>,
    /// Winners; empty until exactly one active player remains.
    pub winners: Vec<Player>,
    /// Players still in the war, in the order they were selected.
    pub active_players: Vec<Player>,
    /// Pending pasha roll for the current turn.
    pub dice: Option<DiceRoll>,
    /// Mutual non-aggression pacts.
    pub alliances: AllianceMap,
    /// Karma per kingdom.
    pub scores: PlayerMap<u32>,
    /// Kingdom names chosen in the lobby.
    pub kingdom_names: PlayerMap<String>,
    /// How many kingdoms marched to war.
    pub initial_player_count: usize,
}

impl GameState {
    /// Fresh session state: language picker, full board, all four players.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            turn: Player::South,
            phase: GamePhase::LanguagePicker,
            selected: None,
            log: Vector::new(),
            winners: Vec::new(),
            active_players: Player::ALL.to_vec(),
            dice: None,
            alliances: AllianceMap::new(),
            scores: PlayerMap::with_value(0),
            kingdom_names: PlayerMap::new(|p| p.default_kingdom_name().to_string()),
            initial_player_count: 4,
        }
    }

    /// Whether `player` is still in the war.
    #[must_use]
    pub fn is_active(&self, player: Player) -> bool {
        self.active_players.contains(&player)
    }

    /// The kingdom name of `player`.
    #[must_use]
    pub fn name_of(&self, player: Player) -> &str {
        &self.kingdom_names[player]
    }

    /// The sole winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winners.first().copied()
    }

    // === Derived queries for the UI ===

    /// Legal destinations of the currently selected piece.
    #[must_use]
    pub fn legal_destinations(&self) -> rules::MoveList {
        match self.selected {
            Some(pos) => {
                rules::legal_moves_from(&self.board, pos, self.turn, self.dice, &self.alliances)
            }
            None => rules::MoveList::new(),
        }
    }

    /// Whether the current player can move under the pending roll.
    ///
    /// True with no pending roll, matching the UI's Pass gating: the Pass
    /// control only unlocks after a roll that allows nothing.
    #[must_use]
    pub fn current_player_has_move(&self) -> bool {
        if self.phase != GamePhase::Playing || self.dice.is_none() {
            return true;
        }
        rules::has_any_legal_move(&self.board, self.turn, self.dice, &self.alliances)
    }

    /// Squares holding pieces of the current player that can move now.
    #[must_use]
    pub fn movable_pieces(&self) -> Vec<Pos> {
        if self.phase != GamePhase::Playing || self.dice.is_none() {
            return Vec::new();
        }
        rules::movable_pieces(&self.board, self.turn, self.dice, &self.alliances)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new();

        assert_eq!(state.phase, GamePhase::LanguagePicker);
        assert_eq!(state.turn, Player::South);
        assert_eq!(state.active_players, Player::ALL.to_vec());
        assert_eq!(state.dice, None);
        assert!(state.winners.is_empty());
        assert_eq!(state.scores[Player::North], 0);
        assert_eq!(state.name_of(Player::West), "Pashchima");
    }

    #[test]
    fn test_no_selection_means_no_destinations() {
        let state = GameState::new();
        assert!(state.legal_destinations().is_empty());
    }

    #[test]
    fn test_has_move_is_true_before_roll() {
        let mut state = GameState::new();
        state.phase = GamePhase::Playing;
        assert!(state.current_player_has_move());
        assert!(state.movable_pieces().is_empty());
    }

    #[test]
    fn test_state_serde_round_trip() {
        let state = GameState::new();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
