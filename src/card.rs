//! Card values and the fixed rank and suit sequences.

use core::fmt;

/// Ranks in deck order, lowest first.
pub const RANKS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

/// Suits in deck order.
pub const SUITS: [&str; 4] = ["spades", "diamonds", "clubs", "hearts"];

/// Number of cards per deck.
pub const DECK_SIZE: usize = RANKS.len() * SUITS.len();

/// A playing card.
///
/// Equality is structural over the rank and suit strings.
///
/// Rank and suit are `&'static str`, which keeps `Card` `Copy` and lets
/// [`Card::new`] be `const`. A card cannot borrow runtime strings, so parsed
/// input has to be matched against [`RANKS`] and [`SUITS`] (or leaked) before
/// it can be built into a card for a membership test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card, one of [`RANKS`] for standard cards.
    pub rank: &'static str,
    /// The suit of the card, one of [`SUITS`] for standard cards.
    pub suit: &'static str,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank or suit. Use
    /// [`Card::is_standard`] to check whether the card can appear in a deck.
    #[must_use]
    pub const fn new(rank: &'static str, suit: &'static str) -> Self {
        Self { rank, suit }
    }

    /// Returns the position of this card's rank in [`RANKS`].
    #[must_use]
    pub fn rank_index(&self) -> Option<usize> {
        RANKS.iter().position(|&rank| rank == self.rank)
    }

    /// Returns the position of this card's suit in [`SUITS`].
    #[must_use]
    pub fn suit_index(&self) -> Option<usize> {
        SUITS.iter().position(|&suit| suit == self.suit)
    }

    /// Returns whether both rank and suit belong to the standard sequences.
    #[must_use]
    pub fn is_standard(&self) -> bool {
        self.rank_index().is_some() && self.suit_index().is_some()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card(rank='{}', suit='{}')", self.rank, self.suit)
    }
}
