//! Hands and scoring.

use alloc::vec::Vec;

use crate::card::Card;

/// Highest non-bust total.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> (u8, bool) {
    let mut value: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(u16::from(card.value()));
    }

    while value > u16::from(BLACKJACK) && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= u16::from(BLACKJACK);
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// Scores a sequence of cards.
///
/// Every Ace starts at 11 and is stepped down to 1, one at a time, while
/// the total is over 21. The result is the best non-bust total when one
/// exists, otherwise the smallest bust total, saturating at `u8::MAX`.
///
/// ```
/// use bjtable::{Card, Rank, Suit, score};
///
/// let cards = [
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Clubs, Rank::Nine),
///     Card::new(Suit::Spades, Rank::Ace),
/// ];
/// assert_eq!(score(&cards), 21);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the cards hold an Ace still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Cards held by the player or the dealer.
///
/// Scores are derived from the full card sequence on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Total score of every card, face down or not.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Score of the face-up cards only.
    #[must_use]
    pub fn visible_score(&self) -> u8 {
        evaluate_cards(self.cards.iter().filter(|c| !c.is_face_down())).0
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether any card is still face down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(Card::is_face_down)
    }

    /// Turns every card face up. Returns the number of cards flipped.
    pub fn reveal(&mut self) -> usize {
        let mut flipped = 0;
        for card in self.cards.iter_mut().filter(|c| c.is_face_down()) {
            card.turn_up();
            flipped += 1;
        }
        flipped
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
