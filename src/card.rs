//! Card types and deck utilities.

use core::fmt;

use crate::error::MoveError;

/// Card suit.
///
/// Variants are declared in display order, which is also the order used by
/// [`Suit::from_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in index order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit for a player's numeric choice (0 = Clubs, 1 = Diamonds,
    /// 2 = Hearts, 3 = Spades).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidSuit`] for any other value.
    pub const fn from_index(index: u8) -> Result<Self, MoveError> {
        match index {
            0 => Ok(Self::Clubs),
            1 => Ok(Self::Diamonds),
            2 => Ok(Self::Hearts),
            3 => Ok(Self::Spades),
            _ => Err(MoveError::InvalidSuit),
        }
    }

    /// Returns the English name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards order by suit first and rank second. The ordering only exists for
/// display and sorting; the rules never compare cards this way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but display as `?`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether this card may be played on `active`.
    ///
    /// A card is playable when it shares the rank or the suit of the active
    /// card. Eights are wild, but that override is left to the caller (see
    /// [`Card::is_wild`]).
    #[must_use]
    pub const fn valid_play(self, active: Self) -> bool {
        self.rank == active.rank || self.suit as u8 == active.suit as u8
    }

    /// Returns whether this card has the wild rank.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        self.rank == WILD_RANK
    }

    /// Returns the English name of the rank.
    #[must_use]
    pub const fn rank_name(self) -> &'static str {
        match self.rank {
            1 => "Ace",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "Jack",
            12 => "Queen",
            13 => "King",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_name(), self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// The rank that can be played on any card and lets the player name a suit.
pub const WILD_RANK: u8 = 8;
