//! Dealer reveal sequencer and timer tests.

use bjtable::reveal::stop_reason;
use bjtable::{
    Card, DealerReveal, Deck, Hand, Rank, RevealState, RevealStep, StopReason, Suit, TimerEvent,
    Timers,
};

const fn card(rank: Rank) -> Card {
    Card::new(Suit::Spades, rank)
}

fn dealer(ranks: &[Rank]) -> Hand {
    Hand::from_cards(&ranks.iter().map(|&r| card(r)).collect::<Vec<_>>())
}

#[test]
fn stops_after_drawing_to_seventeen_or_more() {
    let mut hand = dealer(&[Rank::Ten, Rank::Two]);
    let mut deck = Deck::from_draws(&[card(Rank::Nine); 8]);
    let mut reveal = DealerReveal::new();

    let step = reveal.tick(&mut hand, &mut deck, 20);
    assert_eq!(
        step,
        RevealStep::Stopped {
            drawn: Some(card(Rank::Nine)),
            reason: StopReason::Stands,
        }
    );
    assert_eq!(hand.score(), 21);
    assert_eq!(reveal.state(), RevealState::Settling);
    assert_eq!(reveal.drawn(), 1);
    assert_eq!(reveal.tick(&mut hand, &mut deck, 20), RevealStep::Idle);
    assert_eq!(deck.len(), 7);
}

#[test]
fn stops_without_drawing_when_covering_player() {
    let mut hand = dealer(&[Rank::Ten, Rank::Six]);
    let mut deck = Deck::from_draws(&[card(Rank::Two)]);
    let mut reveal = DealerReveal::new();

    let step = reveal.tick(&mut hand, &mut deck, 15);
    assert_eq!(
        step,
        RevealStep::Stopped {
            drawn: None,
            reason: StopReason::Covers,
        }
    );
    assert_eq!(hand.len(), 2);
    assert_eq!(deck.len(), 1);
    assert_eq!(reveal.reason(), Some(StopReason::Covers));
}

#[test]
fn draws_one_card_per_tick() {
    let mut hand = dealer(&[Rank::Two, Rank::Three]);
    let mut deck = Deck::from_draws(&[card(Rank::Two), card(Rank::Three), card(Rank::Ten)]);
    let mut reveal = DealerReveal::new();

    assert_eq!(
        reveal.tick(&mut hand, &mut deck, 20),
        RevealStep::Drew(card(Rank::Two))
    );
    assert_eq!(
        reveal.tick(&mut hand, &mut deck, 20),
        RevealStep::Drew(card(Rank::Three))
    );
    assert_eq!(hand.score(), 10);
    assert_eq!(
        reveal.tick(&mut hand, &mut deck, 20),
        RevealStep::Stopped {
            drawn: Some(card(Rank::Ten)),
            reason: StopReason::Stands,
        }
    );
    assert_eq!(hand.score(), 20);
}

#[test]
fn exhausted_deck_stops_the_dealer() {
    let mut hand = dealer(&[Rank::Ten, Rank::Two]);
    let mut deck = Deck::from_draws(&[]);
    let mut reveal = DealerReveal::new();

    assert_eq!(
        reveal.tick(&mut hand, &mut deck, 20),
        RevealStep::Stopped {
            drawn: None,
            reason: StopReason::DeckExhausted,
        }
    );

    let mut hand = dealer(&[Rank::Ten, Rank::Two]);
    let mut deck = Deck::from_draws(&[card(Rank::Two)]);
    let mut reveal = DealerReveal::new();
    assert_eq!(
        reveal.tick(&mut hand, &mut deck, 20),
        RevealStep::Stopped {
            drawn: Some(card(Rank::Two)),
            reason: StopReason::DeckExhausted,
        }
    );
    assert_eq!(hand.score(), 14);
}

#[test]
fn stop_rules_in_priority_order() {
    assert_eq!(stop_reason(17, 20, 10), Some(StopReason::Stands));
    assert_eq!(stop_reason(25, 20, 0), Some(StopReason::Stands));
    assert_eq!(stop_reason(16, 16, 0), Some(StopReason::Covers));
    assert_eq!(stop_reason(12, 20, 0), Some(StopReason::DeckExhausted));
    assert_eq!(stop_reason(12, 20, 1), None);
}

#[test]
fn settle_replaces_interval_with_timeout() {
    let mut timers = Timers::new();
    let mut reveal = DealerReveal::start(&mut timers, 0, 1000);
    assert_eq!(timers.len(), 1);
    assert_eq!(timers.next_due(), Some(1000));

    // Settling before stopping is a no-op.
    reveal.begin_settle(&mut timers, 0, 500);
    assert_eq!(timers.len(), 1);

    let fired = timers.pop_due(1000).unwrap();
    assert_eq!(fired.event, TimerEvent::DealerDraw);
    assert!(reveal.owns(fired.id));

    let mut hand = dealer(&[Rank::Ten, Rank::Eight]);
    let mut deck = Deck::build();
    assert!(matches!(
        reveal.tick(&mut hand, &mut deck, 12),
        RevealStep::Stopped { .. }
    ));

    reveal.begin_settle(&mut timers, 1000, 500);
    assert_eq!(timers.len(), 1);
    assert!(!timers.is_pending(fired.id));
    assert_eq!(timers.next_due(), Some(1500));

    let settled = timers.pop_due(1500).unwrap();
    assert_eq!(settled.event, TimerEvent::RevealSettled);
    assert!(reveal.finish());
    assert_eq!(reveal.state(), RevealState::Finished);
    assert!(!reveal.finish());
}

#[test]
fn cancel_drops_pending_timers() {
    let mut timers = Timers::new();
    let mut reveal = DealerReveal::start(&mut timers, 0, 1000);
    reveal.cancel(&mut timers);
    assert!(timers.is_empty());
    assert_eq!(timers.pop_due(10_000), None);
}

#[test]
fn intervals_rearm_from_their_due_time() {
    let mut timers = Timers::new();
    let id = timers.set_interval(0, 100, TimerEvent::DealerDraw);

    let dues: Vec<u64> = std::iter::from_fn(|| timers.pop_due(350))
        .map(|f| f.due_at)
        .collect();
    assert_eq!(dues, vec![100, 200, 300]);
    assert_eq!(timers.next_due(), Some(400));

    assert!(timers.cancel(id));
    assert!(!timers.cancel(id));
    assert_eq!(timers.pop_due(1000), None);
}

#[test]
fn timers_fire_earliest_first_then_in_schedule_order() {
    let mut timers = Timers::new();
    let late = timers.set_timeout(0, 300, TimerEvent::ResolutionElapsed);
    let first = timers.set_timeout(0, 100, TimerEvent::BustSettled);
    let second = timers.set_timeout(0, 100, TimerEvent::RevealSettled);

    assert_eq!(timers.pop_due(50), None);
    assert_eq!(timers.pop_due(500).unwrap().id, first);
    assert_eq!(timers.pop_due(500).unwrap().id, second);
    assert_eq!(timers.pop_due(500).unwrap().id, late);
    assert!(timers.is_empty());
    assert_eq!(timers.cancel_all(), 0);
}
