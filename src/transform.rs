//! Deck transforms.
//!
//! A [`Transform`] takes a deck by value and returns the next deck. Transforms
//! are plain boxed closures, so callers can mix the constructors below with
//! their own functions when building a pipeline.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;

/// A single pipeline stage.
pub type Transform = Box<dyn FnMut(Deck) -> Deck>;

/// A less-than predicate over two positions of a card slice.
pub type Less<'a> = Box<dyn Fn(usize, usize) -> bool + 'a>;

/// Sorts the deck with a comparator built from the deck itself.
///
/// `factory` receives the cards as they are before sorting and returns a
/// predicate telling whether the card at position `i` belongs before the card
/// at position `j`. The sort is not guaranteed to be stable.
///
/// # Panics
///
/// May panic if the predicate is not a strict weak ordering.
pub fn sort_by<F>(factory: F) -> Transform
where
    F: for<'a> Fn(&'a [Card]) -> Less<'a> + 'static,
{
    Box::new(move |deck: Deck| {
        let cards = deck.into_vec();
        let mut order: Vec<usize> = (0..cards.len()).collect();

        let less = factory(cards.as_slice());
        order.sort_unstable_by(|&i, &j| {
            if less(i, j) {
                Ordering::Less
            } else if less(j, i) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });

        order.into_iter().map(|i| cards[i]).collect()
    })
}

/// Ascending [`Card::rank_key`] comparator, for use with [`sort_by`].
#[must_use]
pub fn less(cards: &[Card]) -> Less<'_> {
    Box::new(move |i: usize, j: usize| cards[i].rank_key() < cards[j].rank_key())
}

/// Descending [`Card::rank_key`] comparator, for use with [`sort_by`].
#[must_use]
pub fn reverse(cards: &[Card]) -> Less<'_> {
    Box::new(move |i: usize, j: usize| cards[i].rank_key() > cards[j].rank_key())
}

/// Sorts by suit, then rank: Ace of Clubs first, King of Spades last.
#[must_use]
pub fn default_sort() -> Transform {
    sort_by(less)
}

/// Sorts by suit, then rank, descending: King of Spades first.
#[must_use]
pub fn reverse_sort() -> Transform {
    sort_by(reverse)
}

/// Places `cards[perm[i]]` at position `i` for a permutation drawn from `rng`.
fn permute<R: Rng + ?Sized>(deck: Deck, rng: &mut R) -> Deck {
    let cards = deck.into_vec();
    let mut perm: Vec<usize> = (0..cards.len()).collect();
    perm.shuffle(rng);

    perm.into_iter().map(|j| cards[j]).collect()
}

/// Shuffles with the given random source.
///
/// The source is owned by the transform and advances each time it runs, so a
/// reused transform yields a different permutation on every call.
pub fn shuffle_with_rng<R>(mut rng: R) -> Transform
where
    R: Rng + 'static,
{
    Box::new(move |deck: Deck| permute(deck, &mut rng))
}

/// Shuffles deterministically from `seed`.
///
/// ```
/// use deckrs::{Deck, shuffle_with_seed};
///
/// let a = Deck::with_transforms([shuffle_with_seed(7)]);
/// let b = Deck::with_transforms([shuffle_with_seed(7)]);
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn shuffle_with_seed(seed: u64) -> Transform {
    shuffle_with_rng(ChaCha8Rng::seed_from_u64(seed))
}

/// Shuffles with a generator seeded from the system clock.
///
/// Uses the same permutation routine as [`shuffle_with_seed`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn shuffle() -> Transform {
    Box::new(|deck: Deck| {
        let mut rng = ChaCha8Rng::seed_from_u64(clock_seed());
        permute(deck, &mut rng)
    })
}

#[cfg(feature = "std")]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

/// Removes every card for which `predicate` returns `true`.
///
/// Note the polarity: the predicate names the cards to drop, not the ones to
/// keep.
pub fn filter_out<P>(mut predicate: P) -> Transform
where
    P: FnMut(&Card) -> bool + 'static,
{
    Box::new(move |deck: Deck| deck.into_iter().filter(|card| !predicate(card)).collect())
}

/// Concatenates the deck with itself `n` times.
///
/// `multiply(0)` empties the deck and `multiply(1)` leaves it unchanged.
///
/// # Panics
///
/// Panics if the resulting length overflows `usize`.
#[must_use]
pub fn multiply(n: usize) -> Transform {
    Box::new(move |deck: Deck| Deck::from(deck.cards().repeat(n)))
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::card::{Rank, Suit};

    fn cards(deck: &Deck) -> Vec<Card> {
        deck.cards().to_vec()
    }

    #[test]
    fn sort_by_uses_deck_positions() {
        let input = Deck::from(vec![
            Card::new(Suit::Spades, Rank::Two),
            Card::new(Suit::Clubs, Rank::King),
            Card::new(Suit::Hearts, Rank::Ace),
        ]);

        let sorted = input.apply(default_sort());
        assert_eq!(
            cards(&sorted),
            vec![
                Card::new(Suit::Clubs, Rank::King),
                Card::new(Suit::Hearts, Rank::Ace),
                Card::new(Suit::Spades, Rank::Two),
            ]
        );
    }

    #[test]
    fn multiply_zero_and_one() {
        assert!(Deck::new().apply(multiply(0)).is_empty());
        assert_eq!(Deck::new().apply(multiply(1)), Deck::new());
    }

    #[test]
    fn reused_rng_transform_advances() {
        let mut transform = shuffle_with_seed(3);
        let first = transform(Deck::new());
        let second = transform(Deck::new());
        assert_ne!(first, second);
    }

    #[test]
    fn shuffle_keeps_every_card() {
        let mut shuffled = cards(&Deck::new().apply(shuffle_with_seed(11)));
        shuffled.sort_unstable_by_key(Card::rank_key);
        assert_eq!(shuffled, cards(&Deck::new()));
    }

    #[cfg(feature = "std")]
    #[test]
    fn clock_shuffle_is_a_permutation() {
        let shuffled = Deck::new().apply(shuffle()).apply(default_sort());
        assert_eq!(shuffled, Deck::new());
    }

    #[test]
    fn empty_deck_passes_through() {
        let empty = Deck::from(Vec::new());
        let out = empty
            .apply(shuffle_with_seed(1))
            .apply(default_sort())
            .apply(filter_out(|_| true))
            .apply(multiply(4));
        assert!(out.is_empty());
    }
}
