//! A Crazy Eights game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the draw pile, the discard
//! pile and every hand, and enforces the rules: matching rank or suit, wild
//! eights that name a new suit, drawing until a playable card turns up and
//! recycling the discard pile when the draw pile runs out.
//!
//! # Example
//!
//! ```
//! use crazy8s::{ComputerPolicy, Game, GameOptions, Policy};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! let mut policies: Vec<Box<dyn Policy>> = (0..game.hands.len())
//!     .map(|seat| Box::new(ComputerPolicy::new(seat as u64)) as Box<dyn Policy>)
//!     .collect();
//! let mut events: Vec<crazy8s::GameEvent> = Vec::new();
//! let outcome = game.run(&mut policies, &mut events).unwrap();
//! assert_eq!(game.current_player(), None);
//! let _ = outcome;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod pile;
pub mod policy;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, WILD_RANK};
pub use error::{DealError, HandError, MoveError, PileError, RunError};
pub use event::{GameEvent, GameObserver};
pub use game::{DrawOutcome, Game, GameState, HUMAN_NAME};
pub use hand::{Hand, PlayerKind};
pub use options::{GameOptions, MAX_OPPONENTS, MIN_OPPONENTS};
pub use pile::{DiscardPile, DrawPile, DrawResult};
pub use policy::{ComputerPolicy, Move, Policy, TurnView};
pub use result::GameOutcome;
