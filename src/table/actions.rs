use tracing::{debug, info};

use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::result::{RoundEnd, RoundResult};
use crate::reveal::DealerReveal;
use crate::timer::TimerEvent;

use super::{Action, Phase, Table};

impl Table {
    fn report(&mut self, action: Action, result: Result<(), ActionError>) -> bool {
        match result {
            Ok(()) => {
                self.check_consistency();
                true
            }
            Err(err) => {
                debug!(?action, %err, phase = ?self.phase, "action ignored");
                false
            }
        }
    }

    fn ensure_phase(&self, phase: Phase, err: ActionError) -> Result<(), ActionError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(err)
        }
    }

    /// Forwards an input action. Returns whether it had any effect.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::IncreaseBet => self.increase_bet(),
            Action::DecreaseBet => self.decrease_bet(),
            Action::PlaceBet => self.place_bet(),
            Action::Twist => self.twist(),
            Action::Stick => self.stick(),
        }
    }

    /// Returns whether `action` would currently have an effect.
    #[must_use]
    pub fn is_enabled(&self, action: Action) -> bool {
        match action {
            Action::IncreaseBet => self.betting_allows() && self.betting.chips() > 0,
            Action::DecreaseBet => self.betting_allows() && self.betting.bet() > 0,
            Action::PlaceBet => self.betting_allows() && self.betting.bet() > 0,
            Action::Twist => self.phase == Phase::PlayerTurn && !self.deck.is_empty(),
            Action::Stick => self.phase == Phase::PlayerTurn,
        }
    }

    fn betting_allows(&self) -> bool {
        self.phase == Phase::Betting && self.betting.is_open()
    }

    /// Moves one chip from the balance onto the bet. Ignored outside the
    /// betting phase or with an empty balance.
    pub fn increase_bet(&mut self) -> bool {
        let result = self
            .ensure_phase(Phase::Betting, ActionError::BettingClosed)
            .and_then(|()| self.betting.increase());
        self.report(Action::IncreaseBet, result)
    }

    /// Moves one chip from the bet back to the balance. Ignored outside the
    /// betting phase or with nothing bet.
    pub fn decrease_bet(&mut self) -> bool {
        let result = self
            .ensure_phase(Phase::Betting, ActionError::BettingClosed)
            .and_then(|()| self.betting.decrease());
        self.report(Action::DecreaseBet, result)
    }

    /// Places the bet, matched 1:1 into the pot, and starts the player's
    /// turn. Ignored outside the betting phase or with nothing bet.
    pub fn place_bet(&mut self) -> bool {
        let result = self
            .ensure_phase(Phase::Betting, ActionError::BettingClosed)
            .and_then(|()| self.betting.place())
            .map(|pot| {
                self.phase = Phase::PlayerTurn;
                info!(
                    round = self.round,
                    pot,
                    chips = self.betting.chips(),
                    player_score = self.player.score(),
                    "bet placed"
                );
            });
        self.report(Action::PlaceBet, result)
    }

    /// Draws a card into the player's hand. Going over 21 ends the round as
    /// a bust. Ignored outside the player's turn or on an empty deck.
    pub fn twist(&mut self) -> bool {
        let result = self
            .ensure_phase(Phase::PlayerTurn, ActionError::NotPlayerTurn)
            .and_then(|()| self.deck.draw().map_err(|_| ActionError::NoCards))
            .map(|card| {
                self.player.add_card(card);
                let score = self.player.score();
                debug!(card = %card, score, "player twists");
                if score > BLACKJACK {
                    self.go_bust();
                }
            });
        self.report(Action::Twist, result)
    }

    /// Ends the player's turn: the dealer's hole card is turned up and the
    /// reveal sequence starts, with the first draw one interval after
    /// [`now`](Self::now). Ignored outside the player's turn.
    pub fn stick(&mut self) -> bool {
        let result = self
            .ensure_phase(Phase::PlayerTurn, ActionError::NotPlayerTurn)
            .map(|()| {
                if let Some(mut previous) = self.reveal.take() {
                    previous.cancel(&mut self.timers);
                }
                self.dealer.reveal();
                self.reveal = Some(DealerReveal::start(
                    &mut self.timers,
                    self.now,
                    self.options.dealer_draw_interval_ms,
                ));
                self.phase = Phase::DealerTurn;
                info!(
                    round = self.round,
                    player_score = self.player.score(),
                    dealer_score = self.dealer.score(),
                    "player sticks"
                );
            });
        self.report(Action::Stick, result)
    }

    fn go_bust(&mut self) {
        let forfeited = self.betting.forfeit_pot();
        self.phase = Phase::Bust;
        self.round_end = Some(self.timers.set_timeout(
            self.now,
            self.options.bust_settle_ms,
            TimerEvent::BustSettled,
        ));

        let result = RoundResult {
            round: self.round,
            end: RoundEnd::Bust,
            player_score: self.player.score(),
            dealer_score: self.dealer.score(),
            pot: forfeited,
            payout: 0,
        };
        self.stats.record(result.end, self.betting.chips());
        self.last_result = Some(result);
        info!(
            round = self.round,
            player_score = result.player_score,
            forfeited,
            "player busts"
        );
    }
}
