//! Card, deck and scoring tests.

use std::collections::HashSet;

use bjtable::{Card, DECK_SIZE, Deck, DeckError, Hand, Rank, Suit, score};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn ranks(ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().map(|&r| card(Suit::Clubs, r)).collect()
}

fn sorted(cards: &[Card]) -> Vec<(Suit, Rank)> {
    let mut pairs: Vec<_> = cards.iter().map(|c| (c.suit(), c.rank())).collect();
    pairs.sort_unstable();
    pairs
}

#[test]
fn scores_with_ace_reduction() {
    assert_eq!(score(&ranks(&[Rank::Ace, Rank::Ace])), 12);
    assert_eq!(score(&ranks(&[Rank::Ace, Rank::King])), 21);
    assert_eq!(score(&ranks(&[Rank::King, Rank::Queen, Rank::Two])), 22);
    assert_eq!(score(&ranks(&[Rank::Ace, Rank::Nine, Rank::Ace])), 21);
    assert_eq!(
        score(&ranks(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace])),
        14
    );
    assert_eq!(score(&[]), 0);
}

#[test]
fn long_bust_totals_step_aces_down_before_saturating() {
    let mut cards = ranks(&[Rank::King; 24]);
    cards.extend(ranks(&[Rank::Ace; 4]));
    assert_eq!(score(&cards), 244);

    assert_eq!(score(Deck::build().cards()), u8::MAX);
}

#[test]
fn hand_tracks_soft_and_bust() {
    let mut hand = Hand::from_cards(&ranks(&[Rank::Ace, Rank::Six]));
    assert_eq!(hand.score(), 17);
    assert!(hand.is_soft());
    assert!(!hand.is_bust());

    hand.add_card(card(Suit::Hearts, Rank::Ten));
    assert_eq!(hand.score(), 17);
    assert!(!hand.is_soft());

    hand.add_card(card(Suit::Spades, Rank::Five));
    assert_eq!(hand.score(), 22);
    assert!(hand.is_bust());
}

#[test]
fn visible_score_skips_face_down_cards() {
    let mut hole = card(Suit::Diamonds, Rank::King);
    hole.turn_down();
    let mut dealer = Hand::from_cards(&[card(Suit::Hearts, Rank::Ace), hole]);

    assert!(dealer.has_hidden());
    assert_eq!(dealer.visible_score(), 11);
    assert_eq!(dealer.score(), 21);

    assert_eq!(dealer.reveal(), 1);
    assert!(!dealer.has_hidden());
    assert_eq!(dealer.visible_score(), 21);
    assert_eq!(dealer.reveal(), 0);
}

#[test]
fn built_deck_has_every_card_once() {
    let deck = Deck::build();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<_> = deck.cards().iter().map(|c| (c.suit(), c.rank())).collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert!(deck.cards().iter().all(|c| !c.is_face_down()));
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let built = Deck::build();
    let mut shuffled = built.clone();
    shuffled.shuffle(&mut rng);

    assert_eq!(shuffled.len(), DECK_SIZE);
    assert_eq!(sorted(shuffled.cards()), sorted(built.cards()));
    assert_ne!(shuffled.cards(), built.cards());
}

#[test]
fn draw_until_empty() {
    let mut deck = Deck::from_draws(&[card(Suit::Hearts, Rank::Seven)]);
    assert_eq!(deck.draw().unwrap(), card(Suit::Hearts, Rank::Seven));
    assert!(deck.is_empty());
    assert_eq!(deck.draw().unwrap_err(), DeckError::Empty);
}

#[test]
fn opening_deal_hides_dealer_second_card() {
    let mut deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Two),   // player
        card(Suit::Clubs, Rank::Three),  // dealer up
        card(Suit::Spades, Rank::Four),  // player
        card(Suit::Diamonds, Rank::Five), // dealer hole
        card(Suit::Hearts, Rank::Six),
    ]);

    let (player, dealer) = deck.deal_opening().unwrap();
    assert_eq!(deck.len(), 1);

    assert_eq!(player.score(), 6);
    assert!(!player.has_hidden());

    assert_eq!(dealer.cards()[0].rank(), Rank::Three);
    assert!(!dealer.cards()[0].is_face_down());
    assert_eq!(dealer.cards()[1].rank(), Rank::Five);
    assert!(dealer.cards()[1].is_face_down());
}

#[test]
fn opening_deal_needs_four_cards() {
    let mut deck = Deck::from_draws(&ranks(&[Rank::Two, Rank::Three, Rank::Four]));
    assert_eq!(deck.deal_opening().unwrap_err(), DeckError::Empty);
    assert_eq!(deck.len(), 3);
}

#[test]
fn asset_keys_follow_art_naming() {
    assert_eq!(card(Suit::Spades, Rank::Ace).asset_key(), "Spades_01");
    assert_eq!(card(Suit::Hearts, Rank::Ten).asset_key(), "Hearts_10");
    assert_eq!(card(Suit::Diamonds, Rank::Queen).asset_key(), "Diamonds_Queen");

    let mut hidden = card(Suit::Clubs, Rank::Nine);
    hidden.turn_down();
    assert_eq!(hidden.asset_key(), "back");
    assert_eq!(hidden.to_string(), "??");
    hidden.turn_up();
    assert_eq!(hidden.to_string(), "9c");
}

fn arb_cards() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(
        (
            prop::sample::select(Suit::ALL.to_vec()),
            prop::sample::select(Rank::ALL.to_vec()),
        ),
        0..10,
    )
    .prop_map(|pairs| pairs.into_iter().map(|(s, r)| card(s, r)).collect())
}

proptest! {
    /// The score is the best non-bust Ace assignment when one exists,
    /// otherwise every Ace counts 1.
    #[test]
    fn prop_score_is_best_assignment(cards in arb_cards()) {
        let aces = cards.iter().filter(|c| c.is_ace()).count() as u32;
        let hard: u32 = cards
            .iter()
            .map(|c| if c.is_ace() { 1 } else { u32::from(c.value()) })
            .sum();
        let got = u32::from(score(&cards));

        let best = (0..=aces)
            .map(|soft| hard + soft * 10)
            .filter(|&total| total <= 21)
            .max();

        match best {
            Some(total) => prop_assert_eq!(got, total),
            None => prop_assert_eq!(got, hard),
        }
    }

    /// Order of cards does not change the score.
    #[test]
    fn prop_score_ignores_order(cards in arb_cards()) {
        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(score(&cards), score(&reversed));
    }
}
