//! Card model: suit, rank, and visibility.
//!
//! A card's identity is its `(Suit, Rank)` pair, which is unique across the
//! 52-card set. The `visible` flag is mutable state owned by whichever zone
//! currently holds the card.
//!
//! ## Colors
//!
//! Clubs and spades are black, diamonds and hearts are red. Tableau builds
//! alternate colors; see `rules::placement::suits_stackable`.

use serde::{Deserialize, Serialize};

/// Card suit.
///
/// Declaration order (clubs, diamonds, hearts, spades) is the canonical deck
/// order used by the deck builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

/// All four suits in canonical order.
pub const ALL_SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

/// Suit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

impl Suit {
    /// Get the suit's color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }

    /// Unicode glyph for display.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Card rank, 1 (ace) through 13 (king).
///
/// ```
/// use rust_klondike::core::Rank;
///
/// assert_eq!(Rank::new(1), Some(Rank::ACE));
/// assert_eq!(Rank::new(14), None);
/// assert_eq!(Rank::QUEEN.label(), "Q");
/// assert_eq!(Rank::new(7).unwrap().label(), "7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, returning `None` outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the numeric value (1..=13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate over all thirteen ranks, ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    /// The next rank up, or `None` for a king.
    #[must_use]
    pub const fn succ(self) -> Option<Rank> {
        Rank::new(self.0 + 1)
    }

    /// Face label: "A", "2".."10", "J", "Q", "K".
    #[must_use]
    pub const fn label(self) -> &'static str {
        RANK_LABELS[self.0 as usize - 1]
    }
}

const RANK_LABELS: [&str; 13] = ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"];

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank out of range: {value}"))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
///
/// Equality compares identity and visibility. Use [`Card::same_identity`]
/// when only the `(suit, rank)` pair matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    /// Is this card face-up?
    pub visible: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            visible: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            visible: true,
        }
    }

    /// The card's identity.
    #[must_use]
    pub const fn id(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }

    /// Check whether two cards are the same card, ignoring visibility.
    #[must_use]
    pub fn same_identity(&self, other: &Card) -> bool {
        self.id() == other.id()
    }

    /// Copy of this card with the given visibility.
    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.visible {
            write!(f, "{}{}", self.rank, self.suit)
        } else {
            f.write_str("??")
        }
    }
}
