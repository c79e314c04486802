//! Game state types.

use crate::card::Card;
use crate::result::GameOutcome;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player to play a card or draw.
    AwaitingMove {
        /// Seat index of the player to move.
        player: usize,
    },
    /// The player drew a playable card, which is now the last card of their
    /// hand, and must play it.
    AwaitingDrawnPlay {
        /// Seat index of the player to move.
        player: usize,
    },
    /// The game has ended.
    GameOver(GameOutcome),
}

impl GameState {
    /// Returns the seat whose move it is, if the game is still running.
    #[must_use]
    pub const fn player(self) -> Option<usize> {
        match self {
            Self::AwaitingMove { player } | Self::AwaitingDrawnPlay { player } => Some(player),
            Self::GameOver(_) => None,
        }
    }
}

/// Result of [`Game::draw`](crate::Game::draw).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A playable card was drawn and must now be played with
    /// [`Game::play_drawn`](crate::Game::play_drawn).
    Playable(Card),
    /// Nothing playable could be drawn; the turn passed to the next player.
    Passed,
}
