//! Error types for table operations.

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("no cards left in the deck")]
    Empty,
}

/// Reasons an input action was ignored.
///
/// Actions never fail from the caller's point of view; these values are
/// logged and otherwise dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Betting is closed for this round.
    #[error("betting is closed")]
    BettingClosed,
    /// No chips left to add to the bet.
    #[error("no chips left to bet")]
    NoChips,
    /// Nothing has been bet yet.
    #[error("no chips have been bet")]
    NoBet,
    /// The matched pot would overflow.
    #[error("bet is too large to match")]
    StakeTooLarge,
    /// It is not the player's turn.
    #[error("not the player's turn")]
    NotPlayerTurn,
    /// The deck is exhausted.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that stop the table from running a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// The opening hands could not be dealt.
    #[error("could not deal the opening hands: {0}")]
    Deal(#[from] DeckError),
    /// Chip or phase bookkeeping no longer adds up.
    #[error("table state is inconsistent: {0}")]
    Inconsistent(&'static str),
}
