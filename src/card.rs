//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
///
/// Variants are declared in ordinal order, which is also the primary key of
/// [`Card::rank_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// Number of suits.
    pub const COUNT: usize = 4;

    /// All suits in ordinal order.
    pub const ALL: [Self; Self::COUNT] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the ordinal of the suit (0 for Clubs through 3 for Spades).
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the one-character display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Clubs => "C",
            Self::Diamonds => "D",
            Self::Hearts => "H",
            Self::Spades => "S",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseCardError::Empty);
        }
        Self::ALL
            .into_iter()
            .find(|suit| suit.symbol().eq_ignore_ascii_case(s))
            .ok_or(ParseCardError::InvalidSuit)
    }
}

/// Card rank.
///
/// Ace is the lowest rank (ordinal 0) and King the highest (ordinal 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// Number of ranks.
    pub const COUNT: usize = 13;

    /// All ranks in ordinal order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the ordinal of the rank (0 for Ace through 12 for King).
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseCardError::Empty);
        }
        Self::ALL
            .into_iter()
            .find(|rank| rank.symbol().eq_ignore_ascii_case(s))
            .ok_or(ParseCardError::InvalidRank)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the canonical ordering key: suit first, then rank.
    ///
    /// The key is `suit.ordinal() * Rank::COUNT + rank.ordinal()`, so every
    /// card of a deck maps to a distinct value in `0..DECK_SIZE`.
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Clubs, Rank::Ace).rank_key(), 0);
    /// assert_eq!(Card::new(Suit::Diamonds, Rank::Ace).rank_key(), 13);
    /// assert_eq!(Card::new(Suit::Spades, Rank::King).rank_key(), 51);
    /// ```
    #[must_use]
    pub const fn rank_key(&self) -> usize {
        self.suit.ordinal() * Rank::COUNT + self.rank.ordinal()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the display form, e.g. `"AD"` or `"10h"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((split, _)) = s.char_indices().last() else {
            return Err(ParseCardError::Empty);
        };
        let (rank, suit) = s.split_at(split);
        if rank.is_empty() {
            return Err(ParseCardError::InvalidRank);
        }
        Ok(Self::new(suit.parse()?, rank.parse()?))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::COUNT * Rank::COUNT;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_renders_rank_then_suit() {
        let cases = [
            (Card::new(Suit::Diamonds, Rank::Ace), "AD"),
            (Card::new(Suit::Clubs, Rank::Two), "2C"),
            (Card::new(Suit::Spades, Rank::Five), "5S"),
            (Card::new(Suit::Hearts, Rank::Ten), "10H"),
            (Card::new(Suit::Clubs, Rank::Jack), "JC"),
            (Card::new(Suit::Diamonds, Rank::King), "KD"),
        ];
        for (card, expected) in cases {
            assert_eq!(card.to_string(), expected);
            assert_eq!(expected.parse::<Card>(), Ok(card));
        }
    }

    #[test]
    fn ordinals_follow_declaration_order() {
        for (i, suit) in Suit::ALL.into_iter().enumerate() {
            assert_eq!(suit.ordinal(), i);
        }
        for (i, rank) in Rank::ALL.into_iter().enumerate() {
            assert_eq!(rank.ordinal(), i);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("qs".parse(), Ok(Card::new(Suit::Spades, Rank::Queen)));
        assert_eq!(" 10c ".parse(), Ok(Card::new(Suit::Clubs, Rank::Ten)));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("H".parse::<Card>(), Err(ParseCardError::InvalidRank));
        assert_eq!("1H".parse::<Card>(), Err(ParseCardError::InvalidRank));
        assert_eq!("AX".parse::<Card>(), Err(ParseCardError::InvalidSuit));
        assert_eq!("".parse::<Suit>(), Err(ParseCardError::Empty));
        assert_eq!("Z".parse::<Rank>(), Err(ParseCardError::InvalidRank));
    }

    #[test]
    fn rank_key_orders_suit_before_rank() {
        let king_of_clubs = Card::new(Suit::Clubs, Rank::King);
        let ace_of_diamonds = Card::new(Suit::Diamonds, Rank::Ace);
        assert!(king_of_clubs.rank_key() < ace_of_diamonds.rank_key());
    }
}
