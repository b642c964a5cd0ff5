use tracing::{debug, error, info};

use crate::deck::Deck;
use crate::error::TableError;
use crate::timer::TimerEvent;

use super::{Phase, Table};

impl Table {
    /// Cancels the reveal sequence and any round-end timeout.
    fn cancel_timers(&mut self) {
        if let Some(mut reveal) = self.reveal.take() {
            reveal.cancel(&mut self.timers);
        }
        self.round_end = None;
        let dropped = self.timers.cancel_all();
        if dropped > 0 {
            debug!(dropped, "cancelled pending timers");
        }
    }

    /// Abandons the current round and deals the next one from a fresh deck.
    ///
    /// Only the chip balance and session statistics carry over. An unplaced
    /// bet goes back to the balance, a pot in play is lost, and a running
    /// dealer reveal is cancelled along with every pending timer. The table
    /// resets itself when a round ends, so drivers only need this to abandon
    /// a round early.
    pub fn reset_round(&mut self) {
        let deck = Deck::shuffled(&mut self.rng);
        self.restart_with(deck);
    }

    /// Starts the next round from `deck`. If it cannot be dealt the current
    /// round stays in place and the reset is retried after the resolution
    /// delay.
    fn restart_with(&mut self, deck: Deck) {
        if let Err(err) = self.start_round(deck) {
            error!(%err, round = self.round, "could not start the next round");
            if let Some(stale) = self.round_end.take() {
                self.timers.cancel(stale);
            }
            self.round_end = Some(self.timers.set_timeout(
                self.now,
                self.options.resolution_settle_ms,
                TimerEvent::ResolutionElapsed,
            ));
        }
    }

    /// Starts a round dealt from `deck`.
    ///
    /// Timers are cancelled once the new hands are dealt, so nothing from the
    /// previous round can fire into them. If the deal fails the previous
    /// round is left untouched, timers included.
    pub(super) fn start_round(&mut self, mut deck: Deck) -> Result<(), TableError> {
        let (player, dealer) = deck.deal_opening()?;
        self.betting.reopen()?;
        self.cancel_timers();

        self.deck = deck;
        self.player = player;
        self.dealer = dealer;
        self.outcome = None;
        self.payout_applied = false;
        self.phase = Phase::Betting;
        self.round += 1;

        info!(
            round = self.round,
            chips = self.betting.chips(),
            player_score = self.player.score(),
            dealer_shows = self.dealer.visible_score(),
            "round started"
        );
        Ok(())
    }
}
