//! A standard 52-card deck built from composable transforms, with optional
//! `no_std` support.
//!
//! A deck starts in canonical order (suit by suit, Ace to King) and is then
//! passed through an ordered list of [`Transform`]s: sorting, shuffling,
//! filtering, and multiplying. Cards are taken off the front with
//! [`Deck::deal_card`].
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, Rank, filter_out, multiply, shuffle_with_seed};
//!
//! let mut deck = Deck::with_transforms([
//!     filter_out(|card| card.rank == Rank::Two),
//!     multiply(2),
//!     shuffle_with_seed(42),
//! ]);
//! assert_eq!(deck.len(), 96);
//!
//! let card = deck.deal_card().unwrap();
//! assert_ne!(card.rank, Rank::Two);
//! assert_eq!(deck.len(), 95);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod builder;
pub mod card;
pub mod deck;
pub mod error;
pub mod transform;

// Re-export main types
pub use builder::{DeckBuilder, new_deck};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, ParseCardError};
#[cfg(feature = "std")]
pub use transform::shuffle;
pub use transform::{
    Less, Transform, default_sort, filter_out, less, multiply, reverse, reverse_sort,
    shuffle_with_rng, shuffle_with_seed, sort_by,
};
