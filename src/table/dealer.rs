use tracing::{debug, info, warn};

use crate::error::TableError;
use crate::result::{Outcome, RoundEnd, RoundResult};
use crate::reveal::RevealStep;
use crate::timer::TimerEvent;

use super::{Phase, Table};

impl Table {
    /// Runs one step of the dealer reveal. Called when the draw interval
    /// fires.
    pub(super) fn step_reveal(&mut self) {
        if self.phase != Phase::DealerTurn {
            warn!(phase = ?self.phase, "dealer draw fired outside the dealer turn");
            return;
        }
        let player_score = self.player.score();
        let Some(reveal) = self.reveal.as_mut() else {
            return;
        };

        match reveal.tick(&mut self.dealer, &mut self.deck, player_score) {
            RevealStep::Drew(_) | RevealStep::Idle => {}
            RevealStep::Stopped { drawn, reason } => {
                info!(
                    round = self.round,
                    ?reason,
                    last_card = ?drawn,
                    dealer_score = self.dealer.score(),
                    drawn = reveal.drawn(),
                    "dealer stops"
                );
                reveal.begin_settle(&mut self.timers, self.now, self.options.reveal_settle_ms);
            }
        }
    }

    /// Called when the post-reveal settle timeout fires.
    pub(super) fn finish_reveal(&mut self) {
        let finished = self.reveal.as_mut().is_some_and(|r| r.finish());
        if finished && self.phase == Phase::DealerTurn {
            self.resolve();
        } else {
            debug!(phase = ?self.phase, "ignoring reveal settle");
        }
    }

    /// Decides the outcome, settles the pot and schedules the next round.
    fn resolve(&mut self) {
        let player_score = self.player.score();
        let dealer_score = self.dealer.score();
        let outcome = Outcome::determine(player_score, dealer_score);
        let pot = self.betting.pot();

        self.outcome = Some(outcome);
        self.phase = Phase::Resolved;

        let payout = match self.settle(outcome) {
            Ok(payout) => payout,
            Err(err) => {
                self.force_reset(err);
                return;
            }
        };

        let result = RoundResult {
            round: self.round,
            end: RoundEnd::Resolved(outcome),
            player_score,
            dealer_score,
            pot,
            payout,
        };
        self.stats.record(result.end, self.betting.chips());
        self.last_result = Some(result);
        self.round_end = Some(self.timers.set_timeout(
            self.now,
            self.options.resolution_settle_ms,
            TimerEvent::ResolutionElapsed,
        ));

        info!(
            round = self.round,
            ?outcome,
            player_score,
            dealer_score,
            payout,
            chips = self.betting.chips(),
            "round resolved"
        );
    }

    /// Moves the pot according to `outcome`. A win or draw pays out only
    /// once per round.
    fn settle(&mut self, outcome: Outcome) -> Result<u32, TableError> {
        match outcome {
            Outcome::Lose => {
                self.betting.forfeit_pot();
                Ok(0)
            }
            _ if self.payout_applied => Ok(0),
            Outcome::Win => {
                let paid = self.betting.credit_pot()?;
                self.payout_applied = true;
                Ok(paid)
            }
            Outcome::Draw => {
                let returned = self.betting.push_pot()?;
                self.payout_applied = true;
                Ok(returned)
            }
        }
    }
}
