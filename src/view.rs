//! What a renderer needs to draw the table.

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::{Outcome, RoundResult, SessionStats};
use crate::table::{Action, Phase, Table};

/// Color category for the banner message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Tone {
    /// Neutral prompt.
    Info,
    /// The player won.
    Win,
    /// The player lost.
    Lose,
}

/// Banner message for the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Message {
    /// Text to show.
    pub text: &'static str,
    /// How to color it.
    pub tone: Tone,
}

impl Message {
    const fn new(text: &'static str, tone: Tone) -> Self {
        Self { text, tone }
    }

    /// Message for a phase, given the round outcome once resolved.
    #[must_use]
    pub const fn for_phase(phase: Phase, outcome: Option<Outcome>) -> Option<Self> {
        match (phase, outcome) {
            (Phase::Betting, _) => Some(Self::new("PLACE BETS", Tone::Info)),
            (Phase::PlayerTurn, _) => Some(Self::new("STICK/TWIST?", Tone::Info)),
            (Phase::Bust, _) => Some(Self::new("YOU BUST", Tone::Lose)),
            (Phase::Resolved, Some(Outcome::Win)) => Some(Self::new("YOU WIN", Tone::Win)),
            (Phase::Resolved, Some(Outcome::Lose)) => Some(Self::new("YOU LOSE", Tone::Lose)),
            (Phase::Resolved, Some(Outcome::Draw)) => Some(Self::new("DRAW", Tone::Info)),
            (Phase::DealerTurn | Phase::Resolved, _) => None,
        }
    }
}

/// Which input actions are live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Controls {
    /// Bet up.
    pub increase_bet: bool,
    /// Bet down.
    pub decrease_bet: bool,
    /// Place bet.
    pub place_bet: bool,
    /// Twist.
    pub twist: bool,
    /// Stick.
    pub stick: bool,
}

/// Snapshot of the table for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableView {
    /// Round number.
    pub round: u64,
    /// Current phase.
    pub phase: Phase,
    /// Player cards, in deal order.
    pub player: Vec<Card>,
    /// Dealer cards, in deal order; the hole card stays face down until
    /// the player sticks.
    pub dealer: Vec<Card>,
    /// Player score. Always shown.
    pub player_score: u8,
    /// Dealer score, once the hole card is turned up.
    pub dealer_score: Option<u8>,
    /// Score of the dealer's face-up cards.
    pub dealer_visible_score: u8,
    /// Chip balance.
    pub chips: u32,
    /// Pending bet.
    pub bet: u32,
    /// Pot.
    pub pot: u32,
    /// Banner message.
    pub message: Option<Message>,
    /// Live actions.
    pub controls: Controls,
    /// Session statistics.
    pub stats: SessionStats,
    /// Last finished round.
    pub last_result: Option<RoundResult>,
    /// Cards left in the deck.
    pub cards_left: usize,
}

impl Table {
    /// Captures everything a renderer draws this frame.
    #[must_use]
    pub fn snapshot(&self) -> TableView {
        let dealer = self.dealer();
        TableView {
            round: self.round(),
            phase: self.phase(),
            player: self.player().cards().to_vec(),
            dealer: dealer.cards().to_vec(),
            player_score: self.player().score(),
            dealer_score: (!dealer.has_hidden()).then(|| dealer.score()),
            dealer_visible_score: dealer.visible_score(),
            chips: self.chips(),
            bet: self.bet(),
            pot: self.pot(),
            message: Message::for_phase(self.phase(), self.outcome()),
            controls: Controls {
                increase_bet: self.is_enabled(Action::IncreaseBet),
                decrease_bet: self.is_enabled(Action::DecreaseBet),
                place_bet: self.is_enabled(Action::PlaceBet),
                twist: self.is_enabled(Action::Twist),
                stick: self.is_enabled(Action::Stick),
            },
            stats: *self.stats(),
            last_result: self.last_result().copied(),
            cards_left: self.cards_left(),
        }
    }
}
