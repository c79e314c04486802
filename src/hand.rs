//! Player hand representation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::HandError;

/// Who supplies the moves for a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    /// Moves come from a person at the terminal.
    Human,
    /// Moves come from the computer policy.
    Computer,
}

/// A player's hand.
///
/// Cards keep the order they were received in, so a position chosen by a
/// player stays meaningful until the next card is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Display name of the player.
    name: String,
    /// Whether a human or the computer plays this hand.
    kind: PlayerKind,
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            cards: Vec::new(),
        }
    }

    /// Creates a hand that already holds `cards`, in order.
    #[must_use]
    pub fn with_cards(name: impl Into<String>, kind: PlayerKind, cards: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            kind,
            cards,
        }
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::IndexOutOfRange`] if there is no card at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Card, HandError> {
        if index >= self.cards.len() {
            return Err(HandError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    /// Returns the card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is out of cards.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns who plays this hand.
    #[must_use]
    pub const fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Returns whether this hand belongs to the human player.
    #[must_use]
    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }
}
