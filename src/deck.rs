//! Deck representation and canonical construction.

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::transform::Transform;

/// An ordered sequence of cards.
///
/// A freshly built deck holds every (suit, rank) pair exactly once, ordered
/// by suit and then by rank. Transforms are free to break that invariant:
/// filtering drops cards and multiplying duplicates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck {
    /// Cards, front of the deck first.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the canonical 52-card deck.
    ///
    /// Cards are ordered by suit (Clubs first) and, within a suit, by rank
    /// (Ace first).
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates the canonical deck and runs it through `transforms` in order.
    ///
    /// Each transform receives the output of the previous one.
    ///
    /// ```
    /// use deckrs::{Deck, multiply, reverse_sort};
    ///
    /// let deck = Deck::with_transforms([reverse_sort(), multiply(2)]);
    /// assert_eq!(deck.len(), 104);
    /// assert_eq!(deck.cards()[0].to_string(), "KS");
    /// ```
    #[must_use]
    pub fn with_transforms<I>(transforms: I) -> Self
    where
        I: IntoIterator<Item = Transform>,
    {
        let mut deck = Self::new();
        let mut applied = 0_usize;

        for transform in transforms {
            deck = deck.apply(transform);
            applied += 1;
        }

        log::debug!(
            "built deck of {} cards with {applied} transform(s)",
            deck.len()
        );
        deck
    }

    /// Applies a single transform, consuming the deck.
    #[must_use]
    pub fn apply(self, mut transform: Transform) -> Self {
        let before = self.len();
        let deck = transform(self);
        log::trace!("transform applied: {before} -> {} cards", deck.len());
        deck
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// The remaining cards keep their relative order, so each deal shifts
    /// them forward and costs time linear in the deck size.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards are left.
    pub fn deal_card(&mut self) -> Result<Card, DealError> {
        if self.cards.is_empty() {
            return Err(DealError::EmptyDeck);
        }

        let card = self.cards.remove(0);
        log::trace!("dealt {card}, {} cards remaining", self.cards.len());
        Ok(card)
    }

    /// Returns the cards in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns an iterator over the cards, front first.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Consumes the deck and returns its cards.
    #[must_use]
    pub fn into_vec(self) -> Vec<Card> {
        self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn canonical_order_is_suit_major() {
        let deck = Deck::new();
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.suit.ordinal(), i / Rank::COUNT);
            assert_eq!(card.rank.ordinal(), i % Rank::COUNT);
            assert_eq!(card.rank_key(), i);
        }
    }

    #[test]
    fn deal_card_pops_front() {
        let mut deck = Deck::from(vec![
            Card::new(Suit::Hearts, Rank::Two),
            Card::new(Suit::Clubs, Rank::Nine),
        ]);

        assert_eq!(deck.deal_card(), Ok(Card::new(Suit::Hearts, Rank::Two)));
        assert_eq!(deck.deal_card(), Ok(Card::new(Suit::Clubs, Rank::Nine)));
        assert_eq!(deck.deal_card(), Err(DealError::EmptyDeck));
        assert!(deck.is_empty());
    }

    #[test]
    fn display_joins_cards_with_spaces() {
        let deck: Deck = [
            Card::new(Suit::Diamonds, Rank::Ace),
            Card::new(Suit::Hearts, Rank::Ten),
        ]
        .into_iter()
        .collect();
        assert_eq!(deck.to_string(), "AD 10H");
        assert_eq!(Deck::from(Vec::new()).to_string(), "");
    }
}
