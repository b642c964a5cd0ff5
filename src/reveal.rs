//! The dealer's timed reveal sequence.
//!
//! Once the player sticks, the dealer draws one card per interval until a
//! stopping rule holds, then pauses before the round is resolved. The
//! sequencer itself has no clock: [`DealerReveal::tick`] performs one step
//! and the owning table decides when to call it.

use tracing::{debug, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::timer::{TimerEvent, TimerId, Timers};

/// Score at which the dealer always stands.
pub const DEALER_STANDS_ON: u8 = 17;

/// Why the dealer stopped drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StopReason {
    /// Dealer reached 17 or more.
    Stands,
    /// Dealer matched or beat the player's score.
    Covers,
    /// The deck ran out.
    DeckExhausted,
}

/// Where the sequence is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RevealState {
    /// Drawing on every tick.
    Drawing,
    /// Stopped, waiting out the settle pause.
    Settling,
    /// Dealer hand is final.
    Finished,
}

/// Result of one [`DealerReveal::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// A card was drawn and the dealer keeps going.
    Drew(Card),
    /// The dealer stopped, possibly after drawing one last card.
    Stopped {
        /// Card drawn on this tick, if any.
        drawn: Option<Card>,
        /// The rule that fired.
        reason: StopReason,
    },
    /// The sequence is no longer drawing.
    Idle,
}

/// Checks the dealer's stopping rules in priority order.
#[must_use]
pub fn stop_reason(dealer_score: u8, player_score: u8, cards_left: usize) -> Option<StopReason> {
    if dealer_score >= DEALER_STANDS_ON {
        Some(StopReason::Stands)
    } else if dealer_score >= player_score {
        Some(StopReason::Covers)
    } else if cards_left == 0 {
        Some(StopReason::DeckExhausted)
    } else {
        None
    }
}

/// A single dealer reveal sequence.
#[derive(Debug, Clone)]
pub struct DealerReveal {
    state: RevealState,
    interval: Option<TimerId>,
    settle: Option<TimerId>,
    drawn: usize,
    reason: Option<StopReason>,
}

impl DealerReveal {
    /// Creates a sequence with no timers attached. Drive it by calling
    /// [`tick`](Self::tick) directly.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RevealState::Drawing,
            interval: None,
            settle: None,
            drawn: 0,
            reason: None,
        }
    }

    /// Creates a sequence and arms its draw interval.
    pub fn start(timers: &mut Timers, now: u64, interval_ms: u64) -> Self {
        let mut reveal = Self::new();
        reveal.interval = Some(timers.set_interval(now, interval_ms, TimerEvent::DealerDraw));
        reveal
    }

    /// Runs one step against the dealer's hand.
    ///
    /// Stopping rules are checked before drawing, so a dealer who already
    /// stands draws nothing, and again after drawing, so the card that ends
    /// the sequence stops it on the same tick.
    pub fn tick(&mut self, dealer: &mut Hand, deck: &mut Deck, player_score: u8) -> RevealStep {
        if self.state != RevealState::Drawing {
            return RevealStep::Idle;
        }

        if let Some(reason) = stop_reason(dealer.score(), player_score, deck.len()) {
            self.stop(reason);
            return RevealStep::Stopped {
                drawn: None,
                reason,
            };
        }

        let card = match deck.draw() {
            Ok(card) => card,
            Err(err) => {
                warn!(%err, "dealer reveal ran out of cards");
                self.stop(StopReason::DeckExhausted);
                return RevealStep::Stopped {
                    drawn: None,
                    reason: StopReason::DeckExhausted,
                };
            }
        };
        dealer.add_card(card);
        self.drawn += 1;
        debug!(card = %card, dealer_score = dealer.score(), "dealer draws");

        match stop_reason(dealer.score(), player_score, deck.len()) {
            Some(reason) => {
                self.stop(reason);
                RevealStep::Stopped {
                    drawn: Some(card),
                    reason,
                }
            }
            None => RevealStep::Drew(card),
        }
    }

    fn stop(&mut self, reason: StopReason) {
        if reason == StopReason::DeckExhausted {
            warn!("deck exhausted during dealer reveal");
        }
        self.state = RevealState::Settling;
        self.reason = Some(reason);
    }

    /// Cancels the draw interval and arms the settle timeout. Does nothing
    /// unless the sequence has stopped and is not already settling.
    pub fn begin_settle(&mut self, timers: &mut Timers, now: u64, settle_ms: u64) {
        if self.state != RevealState::Settling || self.settle.is_some() {
            return;
        }
        if let Some(id) = self.interval.take() {
            timers.cancel(id);
        }
        self.settle = Some(timers.set_timeout(now, settle_ms, TimerEvent::RevealSettled));
    }

    /// Marks the dealer hand final. Returns `false` if the sequence was not
    /// waiting to settle.
    pub fn finish(&mut self) -> bool {
        if self.state != RevealState::Settling {
            return false;
        }
        self.state = RevealState::Finished;
        self.settle = None;
        true
    }

    /// Cancels whatever timer the sequence still holds.
    pub fn cancel(&mut self, timers: &mut Timers) {
        if let Some(id) = self.interval.take() {
            timers.cancel(id);
        }
        if let Some(id) = self.settle.take() {
            timers.cancel(id);
        }
    }

    /// Returns whether `id` belongs to this sequence.
    #[must_use]
    pub fn owns(&self, id: TimerId) -> bool {
        self.interval == Some(id) || self.settle == Some(id)
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> RevealState {
        self.state
    }

    /// Cards drawn so far.
    #[must_use]
    pub const fn drawn(&self) -> usize {
        self.drawn
    }

    /// The stopping rule that fired, once stopped.
    #[must_use]
    pub const fn reason(&self) -> Option<StopReason> {
        self.reason
    }
}

impl Default for DealerReveal {
    fn default() -> Self {
        Self::new()
    }
}
