//! Betting controller tests.

use bjtable::{ActionError, Betting, TableError};
use proptest::prelude::*;

#[test]
fn increase_then_decrease_round_trips() {
    let mut betting = Betting::new(10);
    betting.increase().unwrap();
    assert_eq!((betting.chips(), betting.bet()), (9, 1));

    betting.decrease().unwrap();
    assert_eq!(betting, Betting::new(10));
}

#[test]
fn increase_with_no_chips_is_rejected() {
    let mut betting = Betting::new(0);
    assert_eq!(betting.increase().unwrap_err(), ActionError::NoChips);
    assert_eq!(betting, Betting::new(0));
}

#[test]
fn decrease_with_nothing_bet_is_rejected() {
    let mut betting = Betting::new(3);
    assert_eq!(betting.decrease().unwrap_err(), ActionError::NoBet);
    assert_eq!(betting.chips(), 3);
}

#[test]
fn place_without_bet_keeps_betting_open() {
    let mut betting = Betting::new(5);
    assert_eq!(betting.place().unwrap_err(), ActionError::NoBet);
    assert!(betting.is_open());
    assert_eq!(betting.pot(), 0);
}

#[test]
fn place_matches_stake_and_closes() {
    let mut betting = Betting::new(10);
    betting.increase().unwrap();
    betting.increase().unwrap();

    assert_eq!(betting.place().unwrap(), 4);
    assert_eq!(betting.pot(), 4);
    assert_eq!(betting.bet(), 0);
    assert_eq!(betting.chips(), 8);
    assert!(!betting.is_open());

    let closed = betting;
    assert_eq!(betting.place().unwrap_err(), ActionError::BettingClosed);
    assert_eq!(betting.increase().unwrap_err(), ActionError::BettingClosed);
    assert_eq!(betting.decrease().unwrap_err(), ActionError::BettingClosed);
    assert_eq!(betting, closed);
}

#[test]
fn settling_the_pot() {
    let mut won = Betting::new(10);
    won.increase().unwrap();
    won.increase().unwrap();
    won.place().unwrap();
    assert_eq!(won.credit_pot().unwrap(), 4);
    assert_eq!((won.chips(), won.pot()), (12, 0));

    let mut pushed = Betting::new(10);
    pushed.increase().unwrap();
    pushed.increase().unwrap();
    pushed.place().unwrap();
    assert_eq!(pushed.push_pot().unwrap(), 2);
    assert_eq!((pushed.chips(), pushed.pot()), (10, 0));

    let mut lost = Betting::new(10);
    lost.increase().unwrap();
    lost.place().unwrap();
    assert_eq!(lost.forfeit_pot(), 2);
    assert_eq!((lost.chips(), lost.pot()), (9, 0));
}

#[test]
fn credit_overflow_is_inconsistent() {
    let mut betting = Betting::new(u32::MAX);
    betting.increase().unwrap();
    betting.place().unwrap();
    assert!(matches!(
        betting.credit_pot().unwrap_err(),
        TableError::Inconsistent(_)
    ));
}

#[test]
fn reopen_refunds_unplaced_bet() {
    let mut betting = Betting::new(4);
    betting.increase().unwrap();
    betting.reopen().unwrap();
    assert_eq!(betting, Betting::new(4));

    betting.increase().unwrap();
    betting.place().unwrap();
    betting.reopen().unwrap();
    assert!(betting.is_open());
    assert_eq!((betting.chips(), betting.bet(), betting.pot()), (3, 0, 0));
}

proptest! {
    /// Moving chips on and off the bet never creates or loses chips.
    #[test]
    fn prop_chips_are_conserved(start in 0u32..50, ups in prop::collection::vec(any::<bool>(), 0..80)) {
        let mut betting = Betting::new(start);
        for up in ups {
            let before = betting;
            let result = if up { betting.increase() } else { betting.decrease() };
            if result.is_err() {
                prop_assert_eq!(betting, before);
            }
            prop_assert_eq!(betting.chips() + betting.bet(), start);
        }
    }
}
