//! Table configuration options.

/// Configuration for a table.
///
/// Durations are in milliseconds of the clock passed to
/// [`crate::Table::advance_to`]. Use the builder methods to customize:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_chips(50)
///     .with_dealer_draw_interval_ms(500)
///     .with_resolution_settle_ms(3000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableOptions {
    /// Chips the player starts the session with.
    pub starting_chips: u32,
    /// Pause between dealer draws.
    pub dealer_draw_interval_ms: u64,
    /// Pause after the dealer stops before the round is resolved.
    pub reveal_settle_ms: u64,
    /// How long the bust message stays up before the next round.
    pub bust_settle_ms: u64,
    /// How long the outcome message stays up before the next round.
    pub resolution_settle_ms: u64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_chips: 10,
            dealer_draw_interval_ms: 1000,
            reveal_settle_ms: 1000,
            bust_settle_ms: 1000,
            resolution_settle_ms: 2000,
        }
    }
}

impl TableOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_chips(100);
    /// assert_eq!(options.starting_chips, 100);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: u32) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the pause between dealer draws.
    #[must_use]
    pub const fn with_dealer_draw_interval_ms(mut self, ms: u64) -> Self {
        self.dealer_draw_interval_ms = ms;
        self
    }

    /// Sets the pause between the dealer stopping and resolution.
    #[must_use]
    pub const fn with_reveal_settle_ms(mut self, ms: u64) -> Self {
        self.reveal_settle_ms = ms;
        self
    }

    /// Sets how long a bust stays on screen.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_bust_settle_ms(250);
    /// assert_eq!(options.bust_settle_ms, 250);
    /// ```
    #[must_use]
    pub const fn with_bust_settle_ms(mut self, ms: u64) -> Self {
        self.bust_settle_ms = ms;
        self
    }

    /// Sets how long the outcome stays on screen.
    #[must_use]
    pub const fn with_resolution_settle_ms(mut self, ms: u64) -> Self {
        self.resolution_settle_ms = ms;
        self
    }
}
