//! Player intents.
//!
//! An intent is a request, not a command: the reducer either produces a new
//! state or rejects the intent as a no-op. There are no fatal errors in the
//! core.

use serde::{Deserialize, Serialize};

use crate::board::Pos;
use crate::core::{Player, PlayerMap};

/// Everything a player (or the surrounding UI) can ask the engine to do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    /// Leave the language picker, or return from `GameOver` to the lobby.
    EnterLobby,
    /// Begin the war with the chosen kingdoms and their names.
    StartGame {
        /// Players marching to war, in seating order. At least two.
        players: Vec<Player>,
        /// Kingdom names as entered in the lobby.
        names: PlayerMap<String>,
    },
    /// Clear the battlefield and start over with the given kingdoms.
    Restart {
        /// Players for the fresh war.
        players: Vec<Player>,
    },
    /// Cast the pasha for the current turn.
    RollDice,
    /// Click a square: move the selected piece there, select, or deselect.
    SelectOrMove(Pos),
    /// Give up the turn (the UI offers this when no move exists).
    Pass,
    /// Seal a pact with the target, or dissolve the current one with `None`.
    ProposeAlliance(Option<Player>),
    /// Yield sovereignty: vanish from the board, karma + 5 to the target.
    SubmitSovereignty(Player),
}
