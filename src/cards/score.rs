use super::card::Card;
use super::suit::Suit;
use crate::Error;
use crate::HAND_SIZE;
use crate::Utility;

/// The value of a three-card hand.
///
/// Ordinary hands score the best single-suit total of their cards, an
/// integer between 3 and 31. Three of a kind score [`Score::TRIPS`], which
/// sits strictly between 30 and [`Score::MAX`]. Stored in half points so
/// that the sentinel stays exact and scores can be hashed and ordered.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u8);

impl Score {
    /// Three of a kind: beats every suit total but 31.
    pub const TRIPS: Self = Self(61);
    /// Ace and two ten-counters of one suit. Wins on the spot.
    pub const MAX: Self = Self(62);

    /// Scores a slice that must hold exactly three cards.
    pub fn evaluate(cards: &[Card]) -> Result<Self, Error> {
        let cards = <[Card; HAND_SIZE]>::try_from(cards)
            .map_err(|_| Error::InvalidHandSize(cards.len()))?;
        Card::distinct(&cards)?;
        Ok(Self::from(cards))
    }
    /// Whole points, with the sentinel's half.
    pub fn points(&self) -> Utility {
        Utility::from(*self)
    }
    fn suited(cards: &[Card; HAND_SIZE]) -> u8 {
        Suit::all()
            .into_iter()
            .map(|suit| {
                cards
                    .iter()
                    .filter(|c| c.suit() == suit)
                    .map(Card::points)
                    .sum::<u8>()
            })
            .max()
            .unwrap_or_default()
    }
}

impl From<[Card; HAND_SIZE]> for Score {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        if cards.iter().all(|c| c.rank() == cards[0].rank()) {
            Self::TRIPS
        } else {
            Self(Self::suited(&cards) * 2)
        }
    }
}

/// u8 isomorphism, in half points
/// 30.5
/// 61
impl From<Score> for u8 {
    fn from(s: Score) -> u8 {
        s.0
    }
}
impl From<u8> for Score {
    fn from(n: u8) -> Self {
        debug_assert!(n <= Self::MAX.0);
        Self(n)
    }
}

impl From<Score> for Utility {
    fn from(s: Score) -> Utility {
        s.0 as Utility / 2.0
    }
}
impl TryFrom<Utility> for Score {
    type Error = String;
    fn try_from(x: Utility) -> Result<Self, Self::Error> {
        let halves = (x * 2.0).round();
        if (x * 2.0 - halves).abs() < 1e-3 && halves >= 0.0 && halves <= Self::MAX.0 as Utility {
            Ok(Self(halves as u8))
        } else {
            Err(format!("not a hand score: {}", x))
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 % 2 {
            0 => write!(f, "{}", self.0 / 2),
            _ => write!(f, "{}.5", self.0 / 2),
        }
    }
}
