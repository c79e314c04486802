use tracing::debug;

use crate::card::{Card, Suit, WILD_RANK};
use crate::error::MoveError;
use crate::event::GameEvent;
use crate::hand::Hand;
use crate::pile::DrawResult;
use crate::result::GameOutcome;

use super::{DrawOutcome, Game, GameState};

impl Game {
    fn ensure_turn(&self, player: usize) -> Result<(), MoveError> {
        match self.state {
            GameState::AwaitingMove { player: current } if current == player => Ok(()),
            GameState::AwaitingMove { .. } => Err(MoveError::NotYourTurn),
            _ => Err(MoveError::InvalidState),
        }
    }

    fn ensure_drawn_play(&self, player: usize) -> Result<(), MoveError> {
        match self.state {
            GameState::AwaitingDrawnPlay { player: current } if current == player => Ok(()),
            GameState::AwaitingDrawnPlay { .. } => Err(MoveError::NotYourTurn),
            _ => Err(MoveError::InvalidState),
        }
    }

    fn hand_mut(&mut self, player: usize) -> Result<&mut Hand, MoveError> {
        self.hands.get_mut(player).ok_or(MoveError::InvalidState)
    }

    /// Works out the card that lands on the discard pile when `card` is
    /// played on `active`. Eights take the chosen suit.
    fn resolve_card(card: Card, active: Card, suit: Option<Suit>) -> Result<Card, MoveError> {
        if card.is_wild() {
            suit.map(|suit| Card::new(suit, WILD_RANK))
                .ok_or(MoveError::MissingSuit)
        } else if card.valid_play(active) {
            Ok(card)
        } else {
            Err(MoveError::IllegalCard)
        }
    }

    fn report_rejection(
        &mut self,
        player: usize,
        result: Result<Card, MoveError>,
    ) -> Result<Card, MoveError> {
        if let Err(error) = result {
            if error.is_rejection() {
                debug!(player, %error, "move rejected");
                self.emit(GameEvent::InvalidMove { player, error });
            }
        }
        result
    }

    /// Player action: play the card at `index` of the player's hand.
    ///
    /// Eights can always be played and need `suit`, which becomes the suit of
    /// the active card. Any other card must match the rank or suit of the
    /// active card; `suit` is ignored for them.
    ///
    /// Returns the card as it lies on the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn to choose a move, there
    /// is no card at `index`, an eight is played without a suit, or the card
    /// does not match the active card. Rejected moves change nothing and are
    /// reported as [`GameEvent::InvalidMove`].
    pub fn play_card(
        &mut self,
        player: usize,
        index: usize,
        suit: Option<Suit>,
    ) -> Result<Card, MoveError> {
        let result = self.try_play_card(player, index, suit);
        self.report_rejection(player, result)
    }

    fn try_play_card(
        &mut self,
        player: usize,
        index: usize,
        suit: Option<Suit>,
    ) -> Result<Card, MoveError> {
        self.ensure_turn(player)?;
        let active = self.discard_pile.top()?;
        let hand = self.hand_mut(player)?;
        let card = hand.get(index).ok_or(MoveError::IndexOutOfRange)?;
        let played = Self::resolve_card(card, active, suit)?;
        hand.remove_at(index)?;

        Ok(self.finish_play(player, played))
    }

    /// Player action: draw until a playable card turns up.
    ///
    /// When the draw pile runs out the discard pile, minus its top card, is
    /// shuffled back in and drawing continues. While that is still possible
    /// one card is held back in the draw pile if
    /// [`GameOptions::reserve_card`](crate::GameOptions::reserve_card) is set.
    ///
    /// On [`DrawOutcome::Playable`] the drawn card must be played next with
    /// [`Game::play_drawn`]. When nothing playable is left to draw the player
    /// passes. Once every player in a row has passed while holding no playable
    /// card the game ends in a stalemate.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn to choose a move.
    pub fn draw(&mut self, player: usize) -> Result<DrawOutcome, MoveError> {
        self.ensure_turn(player)?;
        let active = self.discard_pile.top()?;

        loop {
            let recyclable = !self.discard_pile.cards_below_top().is_empty();
            let reserve = if recyclable {
                self.options.reserve()
            } else {
                0
            };

            let hand = self.hands.get_mut(player).ok_or(MoveError::InvalidState)?;
            let result = self.draw_pile.draw_until_playable(active, hand, reserve);
            self.report_draws(player, result.drawn());

            match result {
                DrawResult::Found { card, .. } => {
                    self.state = GameState::AwaitingDrawnPlay { player };
                    return Ok(DrawOutcome::Playable(card));
                }
                DrawResult::Exhausted { .. } if recyclable => {
                    let cards = self
                        .draw_pile
                        .refill_from(&mut self.discard_pile, &mut self.rng);
                    debug!(cards, "draw pile refilled from discard pile");
                    self.emit(GameEvent::DeckRefilled { cards });
                }
                DrawResult::Exhausted { .. } => {
                    let stuck = self.hands.get(player).is_none_or(|hand| {
                        !hand
                            .cards()
                            .iter()
                            .any(|card| card.is_wild() || card.valid_play(active))
                    });
                    self.pass(player, stuck);
                    return Ok(DrawOutcome::Passed);
                }
            }
        }
    }

    /// Player action: play the card just drawn by [`Game::draw`].
    ///
    /// An eight needs `suit`; for any other card `suit` is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has no drawn card waiting to be played
    /// or the drawn card is an eight and `suit` is `None`.
    pub fn play_drawn(&mut self, player: usize, suit: Option<Suit>) -> Result<Card, MoveError> {
        let result = self.try_play_drawn(player, suit);
        self.report_rejection(player, result)
    }

    fn try_play_drawn(&mut self, player: usize, suit: Option<Suit>) -> Result<Card, MoveError> {
        self.ensure_drawn_play(player)?;
        let active = self.discard_pile.top()?;
        let hand = self.hand_mut(player)?;
        let index = hand.count().checked_sub(1).ok_or(MoveError::InvalidState)?;
        let card = hand.get(index).ok_or(MoveError::InvalidState)?;
        let played = Self::resolve_card(card, active, suit)?;
        hand.remove_at(index)?;

        Ok(self.finish_play(player, played))
    }

    fn report_draws(&mut self, player: usize, drawn: usize) {
        if drawn == 0 {
            return;
        }
        let Some(hand) = self.hands.get(player) else {
            return;
        };
        debug!(player, drawn, "cards drawn");
        let start = hand.count().saturating_sub(drawn);
        self.events.extend(
            hand.cards()[start..]
                .iter()
                .map(|&card| GameEvent::CardDrawn { player, card }),
        );
    }

    fn finish_play(&mut self, player: usize, card: Card) -> Card {
        self.discard_pile.play(card);
        self.passes = 0;
        debug!(player, %card, "card played");
        self.emit(GameEvent::CardPlayed { player, card });

        if self.hands.get(player).is_some_and(Hand::has_won) {
            self.end(GameOutcome::Winner { player });
        } else {
            self.advance(player);
        }
        card
    }

    /// Moves the turn on when nothing can be drawn. Only a `stuck` player, one
    /// holding no playable card, counts toward a stalemate.
    fn pass(&mut self, player: usize, stuck: bool) {
        self.passes = if stuck { self.passes + 1 } else { 0 };
        debug!(
            player,
            stuck,
            passes = self.passes,
            "nothing left to draw, passing"
        );
        self.emit(GameEvent::Passed { player });

        if self.passes >= self.hands.len() {
            self.end(GameOutcome::Stalemate);
        } else {
            self.advance(player);
        }
    }
}
