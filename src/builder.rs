//! Deck builder.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::deck::Deck;
use crate::transform::{self, Less, Transform};

/// Configures the transforms applied to a new deck.
///
/// Use the builder pattern to assemble a pipeline; stages run in the order
/// they were added:
///
/// ```
/// use deckrs::{DeckBuilder, Rank};
///
/// let deck = DeckBuilder::new()
///     .with_filter_out(|card| card.rank == Rank::Two)
///     .with_copies(2)
///     .with_shuffle_seed(42)
///     .build();
/// assert_eq!(deck.len(), 96);
/// ```
#[derive(Default)]
pub struct DeckBuilder {
    /// Pipeline stages, in application order.
    transforms: Vec<Transform>,
}

impl DeckBuilder {
    /// Creates a builder with no transforms.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Appends an arbitrary transform.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckBuilder, reverse_sort};
    ///
    /// let deck = DeckBuilder::new().with_transform(reverse_sort()).build();
    /// assert_eq!(deck.cards()[0].to_string(), "KS");
    /// ```
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    /// Appends a sort using a comparator factory.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckBuilder, less};
    ///
    /// let deck = DeckBuilder::new().with_sort(less).build();
    /// assert_eq!(deck.cards()[0].to_string(), "AC");
    /// ```
    #[must_use]
    pub fn with_sort<F>(self, factory: F) -> Self
    where
        F: for<'a> Fn(&'a [Card]) -> Less<'a> + 'static,
    {
        self.with_transform(transform::sort_by(factory))
    }

    /// Appends a deterministic shuffle.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckBuilder;
    ///
    /// let a = DeckBuilder::new().with_shuffle_seed(9).build();
    /// let b = DeckBuilder::new().with_shuffle_seed(9).build();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn with_shuffle_seed(self, seed: u64) -> Self {
        self.with_transform(transform::shuffle_with_seed(seed))
    }

    /// Appends a clock-seeded shuffle.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn with_shuffle(self) -> Self {
        self.with_transform(transform::shuffle())
    }

    /// Appends a filter that drops cards matching `predicate`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckBuilder, Suit};
    ///
    /// let deck = DeckBuilder::new()
    ///     .with_filter_out(|card| card.suit == Suit::Hearts)
    ///     .build();
    /// assert_eq!(deck.len(), 39);
    /// ```
    #[must_use]
    pub fn with_filter_out<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Card) -> bool + 'static,
    {
        self.with_transform(transform::filter_out(predicate))
    }

    /// Appends a stage that repeats the deck `copies` times.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckBuilder;
    ///
    /// let deck = DeckBuilder::new().with_copies(6).build();
    /// assert_eq!(deck.len(), 312);
    /// ```
    #[must_use]
    pub fn with_copies(self, copies: usize) -> Self {
        self.with_transform(transform::multiply(copies))
    }

    /// Returns the number of transforms queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns whether no transforms are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Builds the canonical deck and runs every queued transform over it.
    #[must_use]
    pub fn build(self) -> Deck {
        Deck::with_transforms(self.transforms)
    }
}

impl fmt::Debug for DeckBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckBuilder")
            .field("transforms", &self.transforms.len())
            .finish()
    }
}

/// Builds the canonical deck and applies `transforms` in order.
///
/// Shorthand for [`Deck::with_transforms`].
///
/// ```
/// use deckrs::{default_sort, new_deck, shuffle_with_seed};
///
/// let deck = new_deck([shuffle_with_seed(1), default_sort()]);
/// assert_eq!(deck, deckrs::Deck::new());
/// ```
#[must_use]
pub fn new_deck<I>(transforms: I) -> Deck
where
    I: IntoIterator<Item = Transform>,
{
    Deck::with_transforms(transforms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    #[test]
    fn stages_run_in_insertion_order() {
        let filter_then_copy = DeckBuilder::new()
            .with_filter_out(|card| card.rank == Rank::Ace)
            .with_copies(2)
            .build();
        let copy_then_filter = DeckBuilder::new()
            .with_copies(2)
            .with_filter_out(|card| card.rank == Rank::Ace)
            .build();

        assert_eq!(filter_then_copy.len(), 96);
        assert_eq!(copy_then_filter.len(), 96);
        assert_eq!(filter_then_copy, copy_then_filter);

        let shuffle_then_sort = DeckBuilder::new()
            .with_shuffle_seed(5)
            .with_sort(transform::less)
            .build();
        let sort_then_shuffle = DeckBuilder::new()
            .with_sort(transform::less)
            .with_shuffle_seed(5)
            .build();
        assert_eq!(shuffle_then_sort, Deck::new());
        assert_ne!(sort_then_shuffle, Deck::new());
    }

    #[test]
    fn empty_builder_yields_canonical_deck() {
        let builder = DeckBuilder::default();
        assert!(builder.is_empty());
        assert_eq!(builder.build(), Deck::new());
    }

    #[test]
    fn len_counts_queued_stages() {
        let builder = DeckBuilder::new().with_copies(2).with_shuffle_seed(1);
        assert_eq!(builder.len(), 2);
    }
}
