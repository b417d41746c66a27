//! A French deck of playing cards with optional `no_std` support.
//!
//! The crate provides a [`FrenchDeck`] holding the 52 rank/suit
//! combinations in a fixed order, with positional access, slicing,
//! membership tests, random picks, and sorting by a caller-supplied key.
//!
//! # Example
//!
//! ```
//! use frenchdeck::{Card, FrenchDeck};
//!
//! let deck = FrenchDeck::new();
//! assert_eq!(deck.size(), 52);
//! assert_eq!(deck.at(0), Ok(Card::new("2", "spades")));
//! assert_eq!(deck.at(-1), Ok(Card::new("A", "hearts")));
//! assert!(deck.contains(&Card::new("Q", "hearts")));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod ordering;

pub use card::{Card, DECK_SIZE, RANKS, SUITS};
pub use deck::FrenchDeck;
pub use error::IndexError;
pub use ordering::{SuitValues, spades_high};
