use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;
use crate::DECK_SIZE;
use crate::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `suit * 13 + rank`. The derived ordering is therefore the canonical one:
/// suits outer (clubs, diamonds, hearts, spades), ranks inner, ace high.
/// It is used to sort cards for display, never to compare hands.
///
/// # Parsing
///
/// Cards parse from two-character codes like `"AS"` (ace of spades)
/// or `"TC"` (ten of clubs). Use [`Card::parse`] for several at once.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 % Rank::COUNT as u8)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 / Rank::COUNT as u8)
    }
    /// Contribution of this card to its suit's total.
    pub fn points(&self) -> u8 {
        self.rank().points()
    }
    /// The whole universe in canonical order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE as u8).map(Card)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(s) * Rank::COUNT as u8 + u8::from(r))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// TC
/// 8
/// 0b00001000
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!((n as usize) < DECK_SIZE);
        Self(n)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => Ok(Card::from((Rank::try_from(r)?, Suit::try_from(s)?))),
            _ => Err(Error::InvalidCard(s.to_string())),
        }
    }
}
impl Card {
    /// Parses whitespace-separated card codes into a vector of cards.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.split_whitespace()
            .map(Self::try_from)
            .collect::<Result<Vec<Self>, _>>()
    }
    /// Fails on the first card that shows up twice.
    pub fn distinct(cards: &[Self]) -> Result<(), Error> {
        match cards
            .iter()
            .enumerate()
            .find(|(i, c)| cards[..*i].contains(*c))
        {
            Some((_, c)) => Err(Error::DuplicateCard(*c)),
            None => Ok(()),
        }
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(0..DECK_SIZE as u8))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_cards() {
        assert!(Card::distinct(&Card::parse("AS KS QS").unwrap()).is_ok());
        assert!(Card::distinct(&[]).is_ok());
        let repeated = Card::parse("AS KS AS").unwrap();
        assert!(Card::distinct(&repeated) == Err(Error::DuplicateCard(Card::try_from("AS").unwrap())));
    }

    #[test]
    fn bijective_rank_suit() {
        let card = Card::random();
        let suit = card.suit();
        let rank = card.rank();
        assert!(card == Card::from((rank, suit)));
    }

    #[test]
    fn bijective_u8() {
        let card = Card::random();
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn bijective_str() {
        for card in Card::all() {
            let code = card.to_string();
            assert!(code.len() == 2);
            assert_eq!(Card::try_from(code.as_str()), Ok(card));
        }
    }

    #[test]
    fn canonical_order() {
        let codes = Card::all().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(codes.first().map(String::as_str), Some("2C"));
        assert_eq!(codes.get(12).map(String::as_str), Some("AC"));
        assert_eq!(codes.get(13).map(String::as_str), Some("2D"));
        assert_eq!(codes.last().map(String::as_str), Some("AS"));
    }

    #[test]
    fn strict_total_order() {
        let cards = Card::all().collect::<Vec<_>>();
        for (i, a) in cards.iter().enumerate() {
            for (j, b) in cards.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j));
            }
        }
        // suit dominates rank
        let ac = Card::try_from("AC").unwrap();
        let two_d = Card::try_from("2D").unwrap();
        assert!(ac < two_d);
    }

    #[test]
    fn structural_equality() {
        assert_eq!(Card::try_from("7H"), Card::try_from(" 7H "));
        assert_eq!(
            Card::try_from("7H").unwrap(),
            Card::from((Rank::Seven, Suit::Heart))
        );
    }

    #[test]
    fn invalid_tokens() {
        assert!(matches!(Card::try_from("1S"), Err(Error::InvalidCard(_))));
        assert!(matches!(Card::try_from("AX"), Err(Error::InvalidCard(_))));
        assert!(matches!(Card::try_from("A"), Err(Error::InvalidCard(_))));
        assert!(matches!(Card::try_from("ASS"), Err(Error::InvalidCard(_))));
        assert!(matches!(Card::try_from(""), Err(Error::InvalidCard(_))));
    }

    #[test]
    fn parse_many() {
        let cards = Card::parse("AS KS QS").unwrap();
        assert!(cards.len() == 3);
        assert!(cards[0] == Card::from((Rank::Ace, Suit::Spade)));
        assert!(Card::parse("AS ZZ").is_err());
    }
}
