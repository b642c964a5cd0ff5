//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit name as used in card asset keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rank {
    /// Ace, worth 11 or 1.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks, Ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Nominal score contribution. Aces count 11 here; the hand decides
    /// whether to step them down to 1.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    /// Returns the rank label used in card asset keys.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "01",
            Self::Two => "02",
            Self::Three => "03",
            Self::Four => "04",
            Self::Five => "05",
            Self::Six => "06",
            Self::Seven => "07",
            Self::Eight => "08",
            Self::Nine => "09",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

/// A playing card.
///
/// Suit and rank never change once the card is built. Only the
/// face-down flag flips, when the dealer's hole card is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Card {
    suit: Suit,
    rank: Rank,
    face_down: bool,
}

impl Card {
    /// Creates a face-up card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_down: false,
        }
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns whether the card is face down.
    #[must_use]
    pub const fn is_face_down(&self) -> bool {
        self.face_down
    }

    /// Turns the card face down.
    pub const fn turn_down(&mut self) {
        self.face_down = true;
    }

    /// Turns the card face up.
    pub const fn turn_up(&mut self) {
        self.face_down = false;
    }

    /// Nominal score contribution (see [`Rank::value`]).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Returns whether this card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    /// Identity a renderer resolves to artwork: `back` while face down,
    /// otherwise `<Suit>_<rank>` such as `Spades_01` or `Hearts_Queen`.
    #[must_use]
    pub fn asset_key(&self) -> alloc::string::String {
        if self.face_down {
            alloc::string::String::from("back")
        } else {
            alloc::format!("{}_{}", self.suit.name(), self.rank.label())
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_down {
            return f.write_str("??");
        }
        let rank = match self.rank {
            Rank::Ace => "A",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            other => other.label().trim_start_matches('0'),
        };
        let suit = match self.suit {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        };
        write!(f, "{rank}{suit}")
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
