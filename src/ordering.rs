//! Sort keys over cards.

use crate::card::{Card, SUITS};

/// Precedence of each suit when ranking cards of equal rank.
///
/// Use the builder methods to customize values:
///
/// ```
/// use frenchdeck::{Card, SuitValues};
///
/// let hearts_high = SuitValues::default()
///     .with_hearts(3)
///     .with_spades(2);
///
/// assert_eq!(hearts_high.key(&Card::new("2", "hearts")), Some((0, 3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuitValues {
    /// Value of spades.
    pub spades: usize,
    /// Value of hearts.
    pub hearts: usize,
    /// Value of diamonds.
    pub diamonds: usize,
    /// Value of clubs.
    pub clubs: usize,
}

impl Default for SuitValues {
    fn default() -> Self {
        Self::SPADES_HIGH
    }
}

impl SuitValues {
    /// Spades highest, then hearts, diamonds, and clubs.
    pub const SPADES_HIGH: Self = Self {
        spades: 3,
        hearts: 2,
        diamonds: 1,
        clubs: 0,
    };

    /// Sets the value of spades.
    #[must_use]
    pub const fn with_spades(mut self, value: usize) -> Self {
        self.spades = value;
        self
    }

    /// Sets the value of hearts.
    #[must_use]
    pub const fn with_hearts(mut self, value: usize) -> Self {
        self.hearts = value;
        self
    }

    /// Sets the value of diamonds.
    #[must_use]
    pub const fn with_diamonds(mut self, value: usize) -> Self {
        self.diamonds = value;
        self
    }

    /// Sets the value of clubs.
    #[must_use]
    pub const fn with_clubs(mut self, value: usize) -> Self {
        self.clubs = value;
        self
    }

    /// Returns the value assigned to `suit`, or `None` for an unknown suit.
    #[must_use]
    pub fn value(&self, suit: &str) -> Option<usize> {
        match suit {
            "spades" => Some(self.spades),
            "hearts" => Some(self.hearts),
            "diamonds" => Some(self.diamonds),
            "clubs" => Some(self.clubs),
            _ => None,
        }
    }

    /// Returns the rank-then-suit sort key of `card`.
    ///
    /// The key is `(rank_index, suit_value)`, so rank decides first and
    /// suit breaks ties whatever the suit values are. Cards outside the
    /// standard ranks and suits yield `None`, which sorts before every `Some`.
    #[must_use]
    pub fn key(&self, card: &Card) -> Option<(usize, usize)> {
        let rank = card.rank_index()?;
        let suit = self.value(card.suit)?;
        Some((rank, suit))
    }
}

/// Rank-then-suit key with spades highest within each rank.
///
/// The key is the composite `rank_index * 4 + suit_value`, running from 0
/// for the two of clubs to 51 for the ace of spades.
///
/// ```
/// use frenchdeck::{Card, spades_high};
///
/// assert_eq!(spades_high(&Card::new("2", "clubs")), Some(0));
/// assert_eq!(spades_high(&Card::new("A", "spades")), Some(51));
/// ```
#[must_use]
pub fn spades_high(card: &Card) -> Option<usize> {
    let (rank, suit) = SuitValues::SPADES_HIGH.key(card)?;
    rank.checked_mul(SUITS.len())?.checked_add(suit)
}
