//! Move sources for the players at the table.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::hand::Hand;

/// A move chosen by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Play the card at this position in the hand.
    Play(usize),
    /// Draw until a playable card turns up.
    Draw,
}

/// What a player sees when asked for a decision.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    /// Seat index of the deciding player.
    pub player: usize,
    /// The deciding player's hand.
    pub hand: &'a Hand,
    /// Top card of the discard pile.
    pub active: Card,
    /// Current round, starting at 1.
    pub round: usize,
}

/// Supplies moves for one seat.
///
/// The engine validates everything a policy returns. Rejected moves are
/// reported as [`GameEvent::InvalidMove`](crate::GameEvent::InvalidMove) and
/// the policy is asked again.
pub trait Policy {
    /// Picks the next move.
    fn choose_move(&mut self, view: &TurnView<'_>) -> Move;

    /// Picks the suit for an eight: 0 = Clubs, 1 = Diamonds, 2 = Hearts,
    /// 3 = Spades.
    fn choose_suit(&mut self, view: &TurnView<'_>) -> u8;
}

/// The computer opponent.
///
/// Scans the hand from the left and plays the first card that is an eight
/// or matches the active card, drawing when nothing does. Suits for eights
/// are picked uniformly at random.
#[derive(Debug, Clone)]
pub struct ComputerPolicy {
    rng: ChaCha8Rng,
}

impl ComputerPolicy {
    /// Creates a computer policy with its own seeded random source.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the position of the card the computer would play on `active`.
    #[must_use]
    pub fn pick(hand: &Hand, active: Card) -> Option<usize> {
        hand.cards()
            .iter()
            .position(|card| card.is_wild() || card.valid_play(active))
    }
}

impl Policy for ComputerPolicy {
    fn choose_move(&mut self, view: &TurnView<'_>) -> Move {
        Self::pick(view.hand, view.active).map_or(Move::Draw, Move::Play)
    }

    fn choose_suit(&mut self, _view: &TurnView<'_>) -> u8 {
        self.rng.random_range(0..4)
    }
}
