//! The table: one owned value holding every piece of round state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error};

use crate::betting::Betting;
use crate::deck::Deck;
use crate::error::TableError;
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::result::{Outcome, RoundResult, SessionStats};
use crate::reveal::DealerReveal;
use crate::timer::{Fired, TimerEvent, TimerId, Timers};

mod actions;
mod dealer;
mod lifecycle;
pub mod state;

pub use state::{Action, Phase};

/// A single-player blackjack table against an automated dealer.
///
/// All state lives here and every operation takes `&mut self`. A driver
/// forwards input through the action methods, advances time with
/// [`advance_to`](Self::advance_to), and draws whatever
/// [`snapshot`](Self::snapshot) returns.
///
/// Actions read the table clock, not the wall clock: a stick schedules the
/// first dealer draw from the last value passed to `advance_to`. Drivers
/// advance the clock to the moment of input before forwarding it.
///
/// ```
/// use bjtable::{Phase, Table, TableOptions};
///
/// let mut table = Table::new(TableOptions::default(), 7).unwrap();
/// assert!(table.increase_bet());
/// assert!(table.place_bet());
/// assert_eq!(table.phase(), Phase::PlayerTurn);
/// ```
#[derive(Debug)]
pub struct Table {
    options: TableOptions,
    rng: ChaCha8Rng,
    phase: Phase,
    betting: Betting,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    outcome: Option<Outcome>,
    payout_applied: bool,
    /// Active dealer reveal, if the player has stuck this round.
    reveal: Option<DealerReveal>,
    /// Bust or resolution timeout that ends the round.
    round_end: Option<TimerId>,
    timers: Timers,
    /// Last clock value seen by `advance_to`.
    now: u64,
    round: u64,
    stats: SessionStats,
    last_result: Option<RoundResult>,
}

impl Table {
    /// Opens a table and deals the first round from a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Deal`] if the opening hands cannot be dealt.
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, TableError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self::open(options, rng, deck)
    }

    /// Opens a table whose first round is dealt from `deck` as given.
    /// Later rounds use freshly shuffled decks.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Deal`] if `deck` holds fewer than four cards.
    pub fn with_deck(options: TableOptions, seed: u64, deck: Deck) -> Result<Self, TableError> {
        Self::open(options, ChaCha8Rng::seed_from_u64(seed), deck)
    }

    fn open(options: TableOptions, rng: ChaCha8Rng, deck: Deck) -> Result<Self, TableError> {
        let mut table = Self {
            options,
            rng,
            phase: Phase::Betting,
            betting: Betting::new(options.starting_chips),
            deck: Deck::from_draws(&[]),
            player: Hand::new(),
            dealer: Hand::new(),
            outcome: None,
            payout_applied: false,
            reveal: None,
            round_end: None,
            timers: Timers::new(),
            now: 0,
            round: 0,
            stats: SessionStats::new(options.starting_chips),
            last_result: None,
        };
        table.start_round(deck)?;
        Ok(table)
    }

    /// Advances the table clock to `now` (milliseconds, monotonic) and
    /// fires every timer due by then, earliest first.
    ///
    /// Work triggered by a timer is scheduled from that timer's due time, so
    /// the outcome does not depend on how often the driver polls. A clock
    /// value older than the last one seen is ignored. Returns the number of
    /// timers fired.
    pub fn advance_to(&mut self, now: u64) -> usize {
        if now < self.now {
            debug!(now, last = self.now, "ignoring clock that ran backwards");
            return 0;
        }

        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(now) {
            self.now = timer.due_at;
            fired += 1;
            self.dispatch(timer);
        }
        self.now = now;
        self.check_consistency();
        fired
    }

    /// Advances the table clock by `elapsed_ms`.
    pub fn advance_by(&mut self, elapsed_ms: u64) -> usize {
        self.advance_to(self.now.saturating_add(elapsed_ms))
    }

    fn dispatch(&mut self, timer: Fired) {
        debug!(id = ?timer.id, event = ?timer.event, at = timer.due_at, "timer fired");
        let owned_by_reveal = self.reveal.as_ref().is_some_and(|r| r.owns(timer.id));

        match timer.event {
            TimerEvent::DealerDraw | TimerEvent::RevealSettled if !owned_by_reveal => {
                debug!(id = ?timer.id, "dropping stale reveal timer");
                self.timers.cancel(timer.id);
            }
            TimerEvent::DealerDraw => self.step_reveal(),
            TimerEvent::RevealSettled => self.finish_reveal(),
            TimerEvent::BustSettled | TimerEvent::ResolutionElapsed => {
                if self.round_end == Some(timer.id) {
                    self.round_end = None;
                    self.reset_round();
                } else {
                    debug!(id = ?timer.id, "dropping stale round-end timer");
                }
            }
        }
    }

    /// Checks the bookkeeping invariants and forces a reset if any fails.
    fn check_consistency(&mut self) {
        let betting_phase = self.phase == Phase::Betting;
        let problem = if self.betting.is_open() != betting_phase {
            Some("betting gate does not match the phase")
        } else if !betting_phase && self.betting.bet() != 0 {
            Some("unplaced bet outside the betting phase")
        } else if betting_phase && self.betting.pot() != 0 {
            Some("pot carried into the betting phase")
        } else if self.reveal.is_some()
            && !matches!(self.phase, Phase::DealerTurn | Phase::Resolved)
        {
            Some("dealer reveal outlived its round")
        } else if self.phase.is_terminal() != self.round_end.is_some() {
            Some("round-end timer does not match the phase")
        } else {
            None
        };

        if let Some(reason) = problem {
            self.force_reset(TableError::Inconsistent(reason));
        }
    }

    fn force_reset(&mut self, err: TableError) {
        error!(%err, round = self.round, phase = ?self.phase, "forcing round reset");
        self.reset_round();
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Chip balance.
    #[must_use]
    pub const fn chips(&self) -> u32 {
        self.betting.chips()
    }

    /// Pending bet.
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.betting.bet()
    }

    /// Current pot.
    #[must_use]
    pub const fn pot(&self) -> u32 {
        self.betting.pot()
    }

    /// Returns whether bets may still change.
    #[must_use]
    pub const fn is_betting_open(&self) -> bool {
        self.betting.is_open()
    }

    /// The player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// The dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Cards left in this round's deck.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.deck.len()
    }

    /// Outcome of a resolved round.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns whether this round's payout has been applied.
    #[must_use]
    pub const fn payout_applied(&self) -> bool {
        self.payout_applied
    }

    /// The running dealer reveal, if any.
    #[must_use]
    pub const fn reveal(&self) -> Option<&DealerReveal> {
        self.reveal.as_ref()
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Clock time the next timer is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_due()
    }

    /// Last clock value passed to [`advance_to`](Self::advance_to).
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.now
    }

    /// Current round number, starting at 1.
    #[must_use]
    pub const fn round(&self) -> u64 {
        self.round
    }

    /// Session statistics.
    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Summary of the last finished round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }
}
