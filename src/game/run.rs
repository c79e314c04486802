use alloc::boxed::Box;

use crate::card::{Card, Suit};
use crate::error::{MoveError, RunError};
use crate::event::{GameEvent, GameObserver};
use crate::policy::{Move, Policy, TurnView};
use crate::result::GameOutcome;

use super::{Game, GameState};

impl Game {
    /// Plays the game to the end.
    ///
    /// `policies` supplies the moves for each seat, in seat order. Every event
    /// is passed to `observer` as soon as the move that caused it completes.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of policies does not match the number
    /// of seats, or the engine reaches a state it cannot continue from.
    pub fn run<O: GameObserver + ?Sized>(
        &mut self,
        policies: &mut [Box<dyn Policy>],
        observer: &mut O,
    ) -> Result<GameOutcome, RunError> {
        if policies.len() != self.hands.len() {
            return Err(RunError::PolicyCountMismatch {
                expected: self.hands.len(),
                actual: policies.len(),
            });
        }

        loop {
            self.flush(observer);
            let player = match self.state {
                GameState::GameOver(outcome) => return Ok(outcome),
                GameState::AwaitingMove { player } | GameState::AwaitingDrawnPlay { player } => {
                    player
                }
            };
            let policy = policies.get_mut(player).ok_or(MoveError::InvalidState)?;
            self.step(player, policy.as_mut(), observer)?;
        }
    }

    /// Asks `policy` for the current player's next decision and applies it.
    ///
    /// Rejected moves are reported to `observer` and leave the state as it
    /// was, so calling `step` again asks the policy again.
    ///
    /// # Errors
    ///
    /// Returns an error if `player` is not the player to move or the game is
    /// over.
    pub fn step<O: GameObserver + ?Sized>(
        &mut self,
        player: usize,
        policy: &mut dyn Policy,
        observer: &mut O,
    ) -> Result<(), MoveError> {
        match self.state.player() {
            Some(current) if current == player => {}
            Some(_) => return Err(MoveError::NotYourTurn),
            None => return Err(MoveError::InvalidState),
        }

        match self.state {
            GameState::AwaitingMove { .. } => {
                let choice = {
                    let view = self.turn_view(player)?;
                    policy.choose_move(&view)
                };
                match choice {
                    Move::Draw => {
                        self.draw(player)?;
                    }
                    Move::Play(index) => {
                        let wild = self
                            .hands
                            .get(player)
                            .and_then(|hand| hand.get(index))
                            .is_some_and(Card::is_wild);
                        let suit = if wild {
                            Some(self.ask_suit(player, policy, observer)?)
                        } else {
                            None
                        };
                        accept_rejection(self.play_card(player, index, suit))?;
                    }
                }
            }
            GameState::AwaitingDrawnPlay { .. } => {
                let wild = self
                    .hands
                    .get(player)
                    .and_then(|hand| hand.cards().last().copied())
                    .is_some_and(Card::is_wild);
                let suit = if wild {
                    Some(self.ask_suit(player, policy, observer)?)
                } else {
                    None
                };
                self.play_drawn(player, suit)?;
            }
            GameState::GameOver(_) => return Err(MoveError::InvalidState),
        }
        self.flush(observer);
        Ok(())
    }

    /// Returns what the player at `seat` sees.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no such seat or no card has been played.
    pub fn turn_view(&self, seat: usize) -> Result<TurnView<'_>, MoveError> {
        let hand = self.hands.get(seat).ok_or(MoveError::InvalidState)?;
        let active = self.discard_pile.top()?;
        Ok(TurnView {
            player: seat,
            hand,
            active,
            round: self.round,
        })
    }

    fn ask_suit<O: GameObserver + ?Sized>(
        &mut self,
        player: usize,
        policy: &mut dyn Policy,
        observer: &mut O,
    ) -> Result<Suit, MoveError> {
        loop {
            let choice = {
                let view = self.turn_view(player)?;
                policy.choose_suit(&view)
            };
            match Suit::from_index(choice) {
                Ok(suit) => return Ok(suit),
                Err(error) => {
                    self.emit(GameEvent::InvalidMove { player, error });
                    self.flush(observer);
                }
            }
        }
    }

    fn flush<O: GameObserver + ?Sized>(&mut self, observer: &mut O) {
        for event in self.events.drain(..) {
            observer.notify(&event);
        }
    }
}

fn accept_rejection(result: Result<Card, MoveError>) -> Result<(), MoveError> {
    match result {
        Ok(_) => Ok(()),
        Err(error) if error.is_rejection() => Ok(()),
        Err(error) => Err(error),
    }
}
