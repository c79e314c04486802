//! Game engine and state management.

use alloc::format;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::card::Card;
use crate::error::DealError;
use crate::event::GameEvent;
use crate::hand::{Hand, PlayerKind};
use crate::options::GameOptions;
use crate::pile::{DiscardPile, DrawPile};
use crate::result::GameOutcome;

mod actions;
mod run;
pub mod state;

pub use state::{DrawOutcome, GameState};

/// Name given to the human seat by [`Game::new`].
pub const HUMAN_NAME: &str = "You";

/// A Crazy Eights game engine that manages the piles, the hands and turn
/// order.
///
/// The game owns every card in play. Moves go through [`Game::play_card`],
/// [`Game::draw`] and [`Game::play_drawn`], or through [`Game::run`], which
/// drives the whole game with one [`Policy`](crate::Policy) per seat.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards waiting to be drawn.
    pub draw_pile: DrawPile,
    /// Played cards; the top one is the active card.
    pub discard_pile: DiscardPile,
    /// Hands in seat order. Seat 0 moves first.
    pub hands: Vec<Hand>,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Current round, starting at 1.
    round: usize,
    /// Passes since the last card was played.
    passes: usize,
    /// Events not yet handed out.
    events: Vec<GameEvent>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed and deals the opening hands.
    ///
    /// Seat 0 is the human player, followed by `options.opponents` computer
    /// players named "Computer 1", "Computer 2" and so on.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no opponents, the hand size is zero or
    /// the deck cannot cover the deal.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_opponents(2), 42).unwrap();
    /// assert_eq!(game.hands.len(), 3);
    /// assert_eq!(game.draw_pile.len(), 52 - 3 * 5 - 1);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, DealError> {
        if options.opponents == 0 {
            return Err(DealError::NoOpponents);
        }

        let mut hands = Vec::with_capacity(usize::from(options.opponents) + 1);
        hands.push(Hand::new(HUMAN_NAME, PlayerKind::Human));
        for number in 1..=options.opponents {
            hands.push(Hand::new(format!("Computer {number}"), PlayerKind::Computer));
        }

        Self::with_hands(options, seed, hands)
    }

    /// Creates a new game with caller-provided seats and deals the opening
    /// hands, starting with seat 1 and ending with seat 0. `options.opponents` is ignored; the seats are `hands`, which
    /// should be empty.
    ///
    /// # Errors
    ///
    /// Returns an error if `hands` is empty, the hand size is zero or the deck
    /// cannot cover the deal.
    pub fn with_hands(
        options: GameOptions,
        seed: u64,
        mut hands: Vec<Hand>,
    ) -> Result<Self, DealError> {
        if hands.is_empty() {
            return Err(DealError::NoPlayers);
        }
        if options.hand_size == 0 {
            return Err(DealError::EmptyHand);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut draw_pile = DrawPile::new_full_deck();
        draw_pile.shuffle(&mut rng);
        let mut discard_pile = DiscardPile::new();
        // Seat 0 is dealt last.
        hands.rotate_left(1);
        draw_pile.deal(&mut hands, &mut discard_pile, usize::from(options.hand_size))?;
        hands.rotate_right(1);

        debug!(
            players = hands.len(),
            hand_size = options.hand_size,
            "cards dealt"
        );

        let mut game = Self {
            draw_pile,
            discard_pile,
            hands,
            options,
            state: GameState::AwaitingMove { player: 0 },
            round: 1,
            passes: 0,
            events: Vec::new(),
            rng,
        };
        game.announce_turn(0);
        Ok(game)
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current round, starting at 1.
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Returns the seat whose move it is.
    ///
    /// Returns `None` once the game is over.
    pub const fn current_player(&self) -> Option<usize> {
        self.state.player()
    }

    /// Returns the top card of the discard pile.
    pub fn active_card(&self) -> Option<Card> {
        self.discard_pile.top().ok()
    }

    /// Returns the hand at `seat`.
    pub fn hand(&self, seat: usize) -> Option<&Hand> {
        self.hands.get(seat)
    }

    /// Returns the number of cards across both piles and every hand.
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.hands.iter().map(Hand::count).sum::<usize>()
    }

    /// Removes and returns the events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    fn announce_turn(&mut self, player: usize) {
        let hand_size = self.hands.get(player).map_or(0, Hand::count);
        if let Ok(active) = self.discard_pile.top() {
            debug!(player, round = self.round, %active, "turn started");
            self.emit(GameEvent::TurnStarted {
                player,
                round: self.round,
                active,
                hand_size,
            });
        }
    }

    /// Moves the turn to the seat after `player`, starting a new round when
    /// it wraps around.
    fn advance(&mut self, player: usize) {
        let next = (player + 1) % self.hands.len();
        if next == 0 {
            self.round += 1;
        }
        self.state = GameState::AwaitingMove { player: next };
        self.announce_turn(next);
    }

    fn end(&mut self, outcome: GameOutcome) {
        self.state = GameState::GameOver(outcome);
        match outcome {
            GameOutcome::Winner { player } => {
                info!(player, round = self.round, "game won");
                self.emit(GameEvent::Won { player });
            }
            GameOutcome::Stalemate => {
                warn!(round = self.round, "stalemate: every player passed");
                self.emit(GameEvent::Stalemate);
            }
        }
    }
}
