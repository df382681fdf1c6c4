//! Game state machine: state, intents, reducer, and the session wrapper.

pub mod intent;
pub mod reducer;
pub mod state;

pub use intent::Intent;
pub use reducer::{next_turn, reduce, SUBMISSION_BONUS};
pub use state::{GamePhase, GameState};

use crate::board::Pos;
use crate::core::{DiceRng, Player, PlayerMap};

/// A running session: the authoritative state plus its dice RNG.
///
/// Thin convenience wrapper over [`reduce`] with one method per intent.
/// Each accepted intent swaps the state wholesale; rejected intents leave
/// it untouched.
///
/// ```
/// use chaturaji::game::{Game, GamePhase};
/// use chaturaji::core::Player;
///
/// let mut game = Game::new(42);
/// game.enter_lobby();
/// game.start_default_game(&[Player::South, Player::North]);
/// assert_eq!(game.state().phase, GamePhase::Playing);
/// assert_eq!(game.state().turn, Player::South);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    rng: DiceRng,
}

impl Game {
    /// Create a fresh session with a seeded dice RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(),
            rng: DiceRng::new(seed),
        }
    }

    /// Read-only snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply an intent, replacing the state with its successor.
    pub fn dispatch(&mut self, intent: &Intent) {
        self.state = reduce(&self.state, intent, &mut self.rng);
    }

    // === One method per intent ===

    /// Leave the language picker, or return from game over to the lobby.
    pub fn enter_lobby(&mut self) {
        self.dispatch(&Intent::EnterLobby);
    }

    /// Start the war with chosen players and kingdom names.
    pub fn start_game(&mut self, players: &[Player], names: PlayerMap<String>) {
        self.dispatch(&Intent::StartGame {
            players: players.to_vec(),
            names,
        });
    }

    /// Start the war keeping the default kingdom names.
    pub fn start_default_game(&mut self, players: &[Player]) {
        let names = PlayerMap::new(|p| p.default_kingdom_name().to_string());
        self.start_game(players, names);
    }

    /// Restart the current war with the given players.
    pub fn restart(&mut self, players: &[Player]) {
        self.dispatch(&Intent::Restart {
            players: players.to_vec(),
        });
    }

    /// Cast the pasha.
    pub fn roll_dice(&mut self) {
        self.dispatch(&Intent::RollDice);
    }

    /// Click a square.
    pub fn select_or_move(&mut self, pos: Pos) {
        self.dispatch(&Intent::SelectOrMove(pos));
    }

    /// Give up the turn.
    pub fn pass(&mut self) {
        self.dispatch(&Intent::Pass);
    }

    /// Seal a pact, or dissolve the current one with `None`.
    pub fn propose_alliance(&mut self, target: Option<Player>) {
        self.dispatch(&Intent::ProposeAlliance(target));
    }

    /// Yield sovereignty to `target`.
    pub fn submit_sovereignty(&mut self, target: Player) {
        self.dispatch(&Intent::SubmitSovereignty(target));
    }
}
