//! A single-table stick-or-twist blackjack engine with optional `no_std`
//! support.
//!
//! The crate provides a [`Table`] that owns the whole round: the deck, both
//! hands, the player's chips, and the timed dealer reveal. It never draws
//! anything and never reads a clock. A driver forwards input through the
//! action methods, advances time with [`Table::advance_to`], and renders
//! [`Table::snapshot`].
//!
//! # Example
//!
//! ```
//! use bjtable::{Phase, Table, TableOptions};
//!
//! let options = TableOptions::default();
//! let mut table = Table::new(options, 42).unwrap();
//! table.increase_bet();
//! table.place_bet();
//! table.stick();
//! assert_eq!(table.phase(), Phase::DealerTurn);
//!
//! // Let the dealer play out and the result be shown.
//! table.advance_by(30_000);
//! assert_eq!(table.phase(), Phase::Betting);
//! assert_eq!(table.round(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod betting;
pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod reveal;
pub mod table;
pub mod timer;
pub mod view;

// Re-export main types
pub use betting::Betting;
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DeckError, TableError};
pub use hand::{BLACKJACK, Hand, score};
pub use options::TableOptions;
pub use result::{Outcome, RoundEnd, RoundResult, SessionStats};
pub use reveal::{DealerReveal, RevealState, RevealStep, StopReason};
pub use table::{Action, Phase, Table};
pub use timer::{TimerEvent, TimerId, Timers};
pub use view::{Controls, Message, TableView, Tone};
