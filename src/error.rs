//! Error types for deck access.

use thiserror::Error;

/// Errors that can occur during positional access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Index is past either end of the deck.
    #[error("card index {index} out of range for deck of {len}")]
    OutOfRange {
        /// The requested index.
        index: isize,
        /// Number of cards in the deck.
        len: usize,
    },
}
