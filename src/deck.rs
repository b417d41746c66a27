//! The deck and its read-only operations.

use alloc::vec::Vec;
use core::ops::Index;
use core::slice;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANKS, SUITS};
use crate::error::IndexError;
use crate::ordering::spades_high;

/// An immutable French deck of 52 cards.
///
/// Cards are laid out suit by suit in [`SUITS`] order, each suit running
/// through [`RANKS`] from `"2"` to `"A"`. Position `i` therefore holds
/// `SUITS[i / 13]` and `RANKS[i % 13]`.
///
/// ```
/// use frenchdeck::{Card, FrenchDeck};
///
/// let deck = FrenchDeck::new();
/// assert_eq!(deck.slice(0, 2), &[Card::new("2", "spades"), Card::new("3", "spades")]);
/// assert_eq!(deck.iter().rev().next(), Some(&Card::new("A", "hearts")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrenchDeck {
    /// Cards in construction order.
    cards: Vec<Card>,
}

impl Default for FrenchDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl FrenchDeck {
    /// Creates a deck in construction order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for rank in RANKS {
                cards.push(Card::new(rank, suit));
            }
        }

        tracing::debug!(cards = cards.len(), "built french deck");
        Self { cards }
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards. Always `false` for a built deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at `index`.
    ///
    /// Negative indices count from the end: `-1` is the last card and
    /// `-52` the first.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if `index >= 52` or `index < -52`.
    pub fn at(&self, index: isize) -> Result<Card, IndexError> {
        self.resolve(index)
            .and_then(|position| self.cards.get(position))
            .copied()
            .ok_or(IndexError::OutOfRange {
                index,
                len: self.cards.len(),
            })
    }

    /// Returns the card at a zero-based position, or `None` past the end.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Returns the cards in `[start, end)`.
    ///
    /// Negative bounds count from the end, then both are clamped to the
    /// deck. An empty or inverted range yields an empty slice.
    #[must_use]
    pub fn slice(&self, start: isize, end: isize) -> &[Card] {
        let start = self.clamp(start);
        let end = self.clamp(end);
        if start >= end {
            return &[];
        }
        &self.cards[start..end]
    }

    /// Returns all cards in construction order.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether some position holds a card equal to `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.iter().any(|held| held == card)
    }

    /// Returns a fresh iterator over the cards in construction order.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns a uniformly random card. The deck is left unchanged.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Card {
        let position = rng.random_range(0..self.cards.len());
        tracing::trace!(position, "picked random card");
        self.cards[position]
    }

    /// Returns a copy of the cards sorted ascending by `key`.
    ///
    /// The sort is stable: cards with equal keys keep construction order.
    #[must_use]
    pub fn sorted_by_key<K, F>(&self, key: F) -> Vec<Card>
    where
        K: Ord,
        F: FnMut(&Card) -> K,
    {
        let mut cards = self.cards.clone();
        cards.sort_by_key(key);
        cards
    }

    /// Returns a copy of the cards sorted by rank, spades highest within a rank.
    #[must_use]
    pub fn sorted_spades_high(&self) -> Vec<Card> {
        self.sorted_by_key(spades_high)
    }

    /// Returns a shuffled copy of the cards.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        tracing::trace!(cards = cards.len(), "shuffled copy of deck");
        cards
    }

    /// Returns a shuffled copy of the cards, deterministic for a given seed.
    #[must_use]
    pub fn shuffled_with_seed(&self, seed: u64) -> Vec<Card> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffled(&mut rng)
    }

    /// Maps a possibly negative index to a position, if it lands in the deck.
    fn resolve(&self, index: isize) -> Option<usize> {
        let len = self.cards.len();
        if index >= 0 {
            usize::try_from(index).ok().filter(|&position| position < len)
        } else {
            len.checked_sub(index.unsigned_abs())
        }
    }

    /// Maps a possibly negative slice bound into `[0, len]`.
    fn clamp(&self, bound: isize) -> usize {
        let len = self.cards.len();
        if bound >= 0 {
            usize::try_from(bound).map_or(len, |position| position.min(len))
        } else {
            len.saturating_sub(bound.unsigned_abs())
        }
    }
}

impl Index<usize> for FrenchDeck {
    type Output = Card;

    fn index(&self, position: usize) -> &Card {
        &self.cards[position]
    }
}

impl<'a> IntoIterator for &'a FrenchDeck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
