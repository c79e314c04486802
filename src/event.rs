//! Notifications emitted while a game runs.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::MoveError;

/// Something that happened at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A player's turn began.
    TurnStarted {
        /// Seat index.
        player: usize,
        /// Current round, starting at 1.
        round: usize,
        /// Card the player must match.
        active: Card,
        /// Cards in the player's hand.
        hand_size: usize,
    },
    /// A card moved from the draw pile into a hand.
    CardDrawn {
        /// Seat index.
        player: usize,
        /// The drawn card.
        card: Card,
    },
    /// A card was put on the discard pile. For eights this carries the
    /// chosen suit.
    CardPlayed {
        /// Seat index.
        player: usize,
        /// The card as it now lies on the discard pile.
        card: Card,
    },
    /// A move was rejected; the player will be asked again.
    InvalidMove {
        /// Seat index.
        player: usize,
        /// Why the move was rejected.
        error: MoveError,
    },
    /// The draw pile was refilled from the discard pile.
    DeckRefilled {
        /// Cards moved from the discard pile.
        cards: usize,
    },
    /// A player could not draw a playable card and passed.
    Passed {
        /// Seat index.
        player: usize,
    },
    /// A player emptied their hand.
    Won {
        /// Seat index.
        player: usize,
    },
    /// Every player passed in a row.
    Stalemate,
}

/// Receives [`GameEvent`]s from [`Game::run`](crate::Game::run).
pub trait GameObserver {
    /// Called once per event, in order.
    fn notify(&mut self, event: &GameEvent);
}

impl GameObserver for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(*event);
    }
}
