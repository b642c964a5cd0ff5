//! Round outcomes and session statistics.

/// Result of a resolved round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outcome {
    /// Dealer bust or player scored higher.
    Win,
    /// Dealer scored higher.
    Lose,
    /// Equal scores.
    Draw,
}

impl Outcome {
    /// Decides the round once the dealer has stopped drawing.
    ///
    /// ```
    /// use bjtable::Outcome;
    ///
    /// assert_eq!(Outcome::determine(18, 22), Outcome::Win);
    /// assert_eq!(Outcome::determine(19, 19), Outcome::Draw);
    /// assert_eq!(Outcome::determine(18, 20), Outcome::Lose);
    /// ```
    #[must_use]
    pub const fn determine(player_score: u8, dealer_score: u8) -> Self {
        if dealer_score > crate::hand::BLACKJACK || player_score > dealer_score {
            Self::Win
        } else if player_score < dealer_score {
            Self::Lose
        } else {
            Self::Draw
        }
    }
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RoundEnd {
    /// The player went over 21; the dealer never played.
    Bust,
    /// The dealer played and the round was resolved.
    Resolved(Outcome),
}

/// Summary of the most recently finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u64,
    /// How the round ended.
    pub end: RoundEnd,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score (hole card included).
    pub dealer_score: u8,
    /// Pot at stake.
    pub pot: u32,
    /// Chips returned to the balance.
    pub payout: u32,
}

/// Running totals for the session. Survives round resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SessionStats {
    /// Rounds finished.
    pub rounds: u64,
    /// Rounds won.
    pub wins: u64,
    /// Rounds lost to the dealer.
    pub losses: u64,
    /// Rounds drawn.
    pub draws: u64,
    /// Rounds lost by going bust.
    pub busts: u64,
    /// Highest chip balance seen.
    pub peak_chips: u32,
}

impl SessionStats {
    /// Starts counting from the opening balance.
    #[must_use]
    pub const fn new(chips: u32) -> Self {
        Self {
            rounds: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            busts: 0,
            peak_chips: chips,
        }
    }

    pub(crate) const fn record(&mut self, end: RoundEnd, chips: u32) {
        self.rounds += 1;
        match end {
            RoundEnd::Bust => self.busts += 1,
            RoundEnd::Resolved(Outcome::Win) => self.wins += 1,
            RoundEnd::Resolved(Outcome::Lose) => self.losses += 1,
            RoundEnd::Resolved(Outcome::Draw) => self.draws += 1,
        }
        if chips > self.peak_chips {
            self.peak_chips = chips;
        }
    }
}
