//! Table phase types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Phase {
    /// Opening hands are dealt; the player adjusts and places a bet.
    Betting,
    /// The player twists or sticks.
    PlayerTurn,
    /// The player went over 21. The round resets once the bust settle
    /// delay has passed.
    Bust,
    /// The dealer reveal sequence is running.
    DealerTurn,
    /// The outcome is shown until the resolution delay has passed.
    Resolved,
}

impl Phase {
    /// Returns whether the phase ends in an automatic reset.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Bust | Self::Resolved)
    }
}

/// Input actions a driver can forward to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Action {
    /// Move one chip onto the bet.
    IncreaseBet,
    /// Move one chip back off the bet.
    DecreaseBet,
    /// Lock in the bet and start play.
    PlaceBet,
    /// Draw another card.
    Twist,
    /// End the player's turn.
    Stick,
}
