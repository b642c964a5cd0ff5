//! The 52-card deck and the opening deal.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;
use crate::hand::Hand;

/// Cards needed for the opening deal.
pub const OPENING_CARDS: usize = 4;

/// An ordered pile of cards. The top of the deck is the end of the vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds an unshuffled deck with one card per suit and rank.
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Builds a deck and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::build();
        deck.shuffle(rng);
        deck
    }

    /// Creates a stacked deck that deals `draws` in order.
    ///
    /// ```
    /// use bjtable::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::from_draws(&[
    ///     Card::new(Suit::Hearts, Rank::Ace),
    ///     Card::new(Suit::Clubs, Rank::Two),
    /// ]);
    /// assert_eq!(deck.draw().unwrap().rank(), Rank::Ace);
    /// ```
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the remaining cards in place (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Deals the opening hands: player, dealer, player, dealer.
    ///
    /// The dealer's second card is dealt face down. The deck is left
    /// untouched if it holds fewer than four cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck cannot cover the deal.
    pub fn deal_opening(&mut self) -> Result<(Hand, Hand), DeckError> {
        if self.cards.len() < OPENING_CARDS {
            return Err(DeckError::Empty);
        }

        let mut player = Hand::new();
        let mut dealer = Hand::new();

        player.add_card(self.draw()?);
        dealer.add_card(self.draw()?);
        player.add_card(self.draw()?);

        let mut hole = self.draw()?;
        hole.turn_down();
        dealer.add_card(hole);

        Ok((player, dealer))
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::build()
    }
}
