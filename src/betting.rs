//! Chip balance, bet and pot bookkeeping.

use crate::error::{ActionError, TableError};

/// The player's chips for one table.
///
/// Chips move one at a time between the balance and the pending bet while
/// betting is open. Placing the bet closes betting and builds the pot, which
/// the house matches 1:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Betting {
    chips: u32,
    bet: u32,
    pot: u32,
    open: bool,
}

impl Betting {
    /// Opens betting with `chips` in the balance.
    #[must_use]
    pub const fn new(chips: u32) -> Self {
        Self {
            chips,
            bet: 0,
            pot: 0,
            open: true,
        }
    }

    /// Moves one chip from the balance onto the bet.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is closed or the balance is empty.
    pub const fn increase(&mut self) -> Result<(), ActionError> {
        if !self.open {
            return Err(ActionError::BettingClosed);
        }
        if self.chips == 0 {
            return Err(ActionError::NoChips);
        }
        self.chips -= 1;
        self.bet += 1;
        Ok(())
    }

    /// Moves one chip from the bet back to the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is closed or nothing has been bet.
    pub const fn decrease(&mut self) -> Result<(), ActionError> {
        if !self.open {
            return Err(ActionError::BettingClosed);
        }
        if self.bet == 0 {
            return Err(ActionError::NoBet);
        }
        self.bet -= 1;
        self.chips += 1;
        Ok(())
    }

    /// Places the bet: the pot becomes twice the bet, the bet clears and
    /// betting closes.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is closed, nothing has been bet, or the
    /// matched pot would not fit in a `u32`.
    pub fn place(&mut self) -> Result<u32, ActionError> {
        if !self.open {
            return Err(ActionError::BettingClosed);
        }
        if self.bet == 0 {
            return Err(ActionError::NoBet);
        }
        let pot = self.bet.checked_mul(2).ok_or(ActionError::StakeTooLarge)?;
        self.pot = pot;
        self.bet = 0;
        self.open = false;
        Ok(pot)
    }

    /// Pays the whole pot into the balance. Returns the amount credited.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Inconsistent`] if the balance would overflow.
    pub fn credit_pot(&mut self) -> Result<u32, TableError> {
        let pot = self.pot;
        self.chips = self
            .chips
            .checked_add(pot)
            .ok_or(TableError::Inconsistent("chip balance overflow"))?;
        self.pot = 0;
        Ok(pot)
    }

    /// Returns the player's half of the pot. Returns the amount credited.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Inconsistent`] if the pot is odd or the balance
    /// would overflow.
    pub fn push_pot(&mut self) -> Result<u32, TableError> {
        if self.pot % 2 != 0 {
            return Err(TableError::Inconsistent("pot is not a matched stake"));
        }
        let stake = self.pot / 2;
        self.chips = self
            .chips
            .checked_add(stake)
            .ok_or(TableError::Inconsistent("chip balance overflow"))?;
        self.pot = 0;
        Ok(stake)
    }

    /// Drops the pot. Returns the amount forfeited.
    pub const fn forfeit_pot(&mut self) -> u32 {
        let pot = self.pot;
        self.pot = 0;
        pot
    }

    /// Reopens betting for a new round. Any unplaced bet goes back to the
    /// balance and any unsettled pot is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Inconsistent`] if the refund would overflow.
    pub fn reopen(&mut self) -> Result<(), TableError> {
        self.chips = self
            .chips
            .checked_add(self.bet)
            .ok_or(TableError::Inconsistent("chip balance overflow"))?;
        self.bet = 0;
        self.pot = 0;
        self.open = true;
        Ok(())
    }

    /// Chip balance.
    #[must_use]
    pub const fn chips(&self) -> u32 {
        self.chips
    }

    /// Pending bet.
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.bet
    }

    /// Current pot.
    #[must_use]
    pub const fn pot(&self) -> u32 {
        self.pot
    }

    /// Returns whether bets may still change.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}
