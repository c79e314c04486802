//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when taking cards from a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// The pile has no cards.
    #[error("the pile is empty")]
    Empty,
}

/// Errors that can occur when accessing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// No card at the requested position.
    #[error("no card at index {index} (hand holds {len})")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No hands to deal to.
    #[error("no players to deal to")]
    NoPlayers,
    /// The game needs at least one computer opponent.
    #[error("at least one opponent is required")]
    NoOpponents,
    /// Hand size is zero.
    #[error("hand size is zero")]
    EmptyHand,
    /// Not enough cards in the draw pile.
    #[error("not enough cards in the draw pile")]
    NotEnoughCards,
}

/// Errors that can occur during player moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Invalid game state for this move.
    #[error("invalid game state for this move")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// No card at the chosen position.
    #[error("no card at the chosen position")]
    IndexOutOfRange,
    /// The card matches neither the rank nor the suit of the active card.
    #[error("card matches neither rank nor suit of the active card")]
    IllegalCard,
    /// An eight was played without naming a suit.
    #[error("an eight needs a suit")]
    MissingSuit,
    /// The suit choice is not one of the four suits.
    #[error("not a valid suit")]
    InvalidSuit,
    /// A pile operation failed.
    #[error(transparent)]
    Pile(#[from] PileError),
}

impl MoveError {
    /// Returns whether the move was rejected by the rules and the player
    /// should simply be asked again.
    #[must_use]
    pub const fn is_rejection(self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange | Self::IllegalCard | Self::MissingSuit | Self::InvalidSuit
        )
    }
}

impl From<HandError> for MoveError {
    fn from(_: HandError) -> Self {
        Self::IndexOutOfRange
    }
}

/// Errors that can occur while running a game to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    /// The number of policies does not match the number of seats.
    #[error("expected {expected} policies, got {actual}")]
    PolicyCountMismatch {
        /// Number of seats at the table.
        expected: usize,
        /// Number of policies supplied.
        actual: usize,
    },
    /// The engine rejected a move it should have accepted.
    #[error(transparent)]
    Move(#[from] MoveError),
}
