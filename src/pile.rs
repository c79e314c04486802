//! The draw pile (stock) and the discard pile.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::{DealError, PileError};
use crate::hand::Hand;

/// Result of drawing until a playable card turns up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawResult {
    /// A playable card was drawn. It is the last card of the hand.
    Found {
        /// The playable card.
        card: Card,
        /// Number of cards drawn, including `card`.
        drawn: usize,
    },
    /// The pile ran down to the reserve before a playable card was drawn.
    Exhausted {
        /// Number of cards drawn before stopping.
        drawn: usize,
    },
}

impl DrawResult {
    /// Returns the number of cards moved into the hand.
    #[must_use]
    pub const fn drawn(self) -> usize {
        match self {
            Self::Found { drawn, .. } | Self::Exhausted { drawn } => drawn,
        }
    }
}

/// Cards waiting to be drawn. The last card is the top of the pile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawPile {
    cards: Vec<Card>,
}

impl DrawPile {
    /// Creates an unshuffled pile holding one of every card.
    #[must_use]
    pub fn new_full_deck() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a pile from `cards`. The last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::Empty`] if the pile has no cards.
    pub fn draw_top(&mut self) -> Result<Card, PileError> {
        self.cards.pop().ok_or(PileError::Empty)
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns the cards in the pile, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deals `hand_size` cards to every hand, one card at a time in seat
    /// order, then turns one more card onto `discard` as the opening active
    /// card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NoPlayers`] if `hands` is empty and
    /// [`DealError::NotEnoughCards`] if the pile cannot cover the deal. No
    /// cards are moved on error.
    pub fn deal(
        &mut self,
        hands: &mut [Hand],
        discard: &mut DiscardPile,
        hand_size: usize,
    ) -> Result<(), DealError> {
        if hands.is_empty() {
            return Err(DealError::NoPlayers);
        }
        let needed = hands
            .len()
            .checked_mul(hand_size)
            .and_then(|n| n.checked_add(1))
            .ok_or(DealError::NotEnoughCards)?;
        if self.cards.len() < needed {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..hand_size {
            for hand in hands.iter_mut() {
                let card = self.draw_top().map_err(|_| DealError::NotEnoughCards)?;
                hand.add(card);
            }
        }
        let seed = self.draw_top().map_err(|_| DealError::NotEnoughCards)?;
        discard.play(seed);

        Ok(())
    }

    /// Moves every card below the discard pile's top into this pile and
    /// shuffles. Cards already in this pile stay in it.
    ///
    /// Returns the number of cards moved.
    pub fn refill_from<R: Rng + ?Sized>(
        &mut self,
        discard: &mut DiscardPile,
        rng: &mut R,
    ) -> usize {
        let moved = discard.cards_below_top().len();
        self.cards.extend_from_slice(discard.cards_below_top());
        discard.reset_to_top_only();
        self.shuffle(rng);
        moved
    }

    /// Draws cards into `hand` until one can be played on `active`.
    ///
    /// Eights always stop the draw. Drawing also stops, without taking
    /// another card, once only `reserve` cards are left in the pile; the
    /// caller is then expected to refill from the discard pile and try again.
    pub fn draw_until_playable(
        &mut self,
        active: Card,
        hand: &mut Hand,
        reserve: usize,
    ) -> DrawResult {
        let mut drawn = 0;
        while self.cards.len() > reserve {
            let Some(card) = self.cards.pop() else {
                break;
            };
            drawn += 1;
            hand.add(card);
            if card.is_wild() || card.valid_play(active) {
                return DrawResult::Found { card, drawn };
            }
        }
        DrawResult::Exhausted { drawn }
    }
}

/// Played cards. Only the top card matters to the rules; the rest is kept
/// so it can be recycled into the draw pile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    /// Creates an empty discard pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a discard pile from cards in play order; the last card is the
    /// active card.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Puts `card` on top. It becomes the active card.
    pub fn play(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the active card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::Empty`] if nothing has been played yet.
    pub fn top(&self) -> Result<Card, PileError> {
        self.cards.last().copied().ok_or(PileError::Empty)
    }

    /// Returns every card except the active one, oldest first.
    #[must_use]
    pub fn cards_below_top(&self) -> &[Card] {
        match self.cards.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    /// Drops the history, keeping only the active card.
    pub fn reset_to_top_only(&mut self) {
        let below = self.cards.len().saturating_sub(1);
        self.cards.drain(..below);
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
