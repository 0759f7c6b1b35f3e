//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when parsing a card, suit, or rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is empty.
    #[error("input is empty")]
    Empty,
    /// Rank symbol is not recognized.
    #[error("unknown rank")]
    InvalidRank,
    /// Suit symbol is not recognized.
    #[error("unknown suit")]
    InvalidSuit,
}
