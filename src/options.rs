//! Game configuration options.

/// Fewest computer opponents the terminal game offers.
pub const MIN_OPPONENTS: u8 = 1;

/// Most computer opponents the terminal game offers.
pub const MAX_OPPONENTS: u8 = 3;

/// Configuration options for a Crazy Eights game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use crazy8s::GameOptions;
///
/// let options = GameOptions::default()
///     .with_opponents(2)
///     .with_hand_size(7)
///     .with_reserve_card(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of computer opponents seated after the human player.
    pub opponents: u8,
    /// Cards dealt to each player.
    pub hand_size: u8,
    /// Whether drawing holds one card back in the draw pile while the
    /// discard pile still has cards to recycle.
    pub reserve_card: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            opponents: MAX_OPPONENTS,
            hand_size: 5,
            reserve_card: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of computer opponents.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::GameOptions;
    ///
    /// let options = GameOptions::default().with_opponents(1);
    /// assert_eq!(options.opponents, 1);
    /// ```
    #[must_use]
    pub const fn with_opponents(mut self, opponents: u8) -> Self {
        self.opponents = opponents;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets whether the draw pile keeps a reserve card.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::GameOptions;
    ///
    /// let options = GameOptions::default().with_reserve_card(false);
    /// assert!(!options.reserve_card);
    /// ```
    #[must_use]
    pub const fn with_reserve_card(mut self, reserve_card: bool) -> Self {
        self.reserve_card = reserve_card;
        self
    }

    /// Number of cards held back in the draw pile while recycling is possible.
    #[must_use]
    pub const fn reserve(&self) -> usize {
        if self.reserve_card { 1 } else { 0 }
    }
}
