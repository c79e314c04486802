//! Game outcome types.

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// A player emptied their hand.
    Winner {
        /// Seat index of the winner.
        player: usize,
    },
    /// Every player passed in turn because nothing could be drawn.
    Stalemate,
}

impl GameOutcome {
    /// Returns the winning seat, if the game had a winner.
    #[must_use]
    pub const fn winner(self) -> Option<usize> {
        match self {
            Self::Winner { player } => Some(player),
            Self::Stalemate => None,
        }
    }
}
